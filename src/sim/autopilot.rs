//! Idle/demo mode - a simple bot that plays the game

use super::input::TickInput;
use super::state::{Falling, GameState};
use crate::consts::*;

/// How far above the player an obstacle counts as a threat
const LOOKAHEAD: f32 = 220.0;
/// Extra horizontal clearance kept from threats
const CLEARANCE: f32 = 12.0;
/// Dead zone so the bot doesn't jitter around its target
const DEAD_ZONE: f32 = 4.0;

/// Pick keys for this tick: dodge the nearest threat, else chase resources
pub fn autopilot(state: &GameState) -> TickInput {
    let player = &state.player;
    let home_y = CANVAS_HEIGHT - player.size * 3.0;

    let threat = state
        .obstacles
        .iter()
        .filter(|o| is_threat(o, state))
        .min_by(|a, b| {
            (player.pos.y - a.pos.y)
                .partial_cmp(&(player.pos.y - b.pos.y))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    let target_x = if let Some(threat) = threat {
        // Step to whichever side has more room
        let reach = (player.size + threat.size) / 2.0 + CLEARANCE;
        let left = threat.pos.x - reach;
        let right = threat.pos.x + reach;
        if left > player.size / 2.0 && (player.pos.x <= threat.pos.x || right > CANVAS_WIDTH) {
            left
        } else {
            right
        }
    } else {
        state
            .resources
            .iter()
            .filter(|r| r.pos.y < player.pos.y + player.size)
            .min_by(|a, b| {
                a.pos
                    .distance_squared(player.pos)
                    .partial_cmp(&b.pos.distance_squared(player.pos))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map_or(CANVAS_WIDTH / 2.0, |r| r.pos.x)
    };

    let dx = target_x - player.pos.x;
    let dy = home_y - player.pos.y;
    TickInput {
        left: dx < -DEAD_ZONE,
        right: dx > DEAD_ZONE,
        up: dy < -DEAD_ZONE,
        down: dy > DEAD_ZONE,
    }
}

fn is_threat(obstacle: &Falling, state: &GameState) -> bool {
    let player = &state.player;
    let above = player.pos.y - obstacle.pos.y;
    let reach = (player.size + obstacle.size) / 2.0 + CLEARANCE;
    above > -reach && above < LOOKAHEAD && (obstacle.pos.x - player.pos.x).abs() < reach
}
