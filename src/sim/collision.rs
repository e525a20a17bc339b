//! Collision detection and response for falling entities
//!
//! Overlap is a circle test between centers: closer than the average of the
//! two sizes. Square bodies are treated as their inscribed circles.

use glam::Vec2;

use super::state::{EntityKind, Falling, GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Whether two bodies of the given diameters overlap
#[inline]
pub fn overlaps(a: Vec2, size_a: f32, b: Vec2, size_b: f32) -> bool {
    a.distance(b) < (size_a + size_b) / 2.0
}

/// What happened to one entity this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Still falling
    None,
    /// Touched the player
    Hit,
    /// Fell off the bottom edge
    Expired,
}

/// Advance one entity and classify it against the player
pub fn advance_and_test(entity: &mut Falling, player_pos: Vec2, player_size: f32) -> Contact {
    entity.pos.y += entity.speed;
    if overlaps(player_pos, player_size, entity.pos, entity.size) {
        Contact::Hit
    } else if entity.below_screen() {
        Contact::Expired
    } else {
        Contact::None
    }
}

/// Move every entity down, apply contact effects and prune consumed ones
pub fn resolve(state: &mut GameState) {
    resolve_kind(state, EntityKind::Obstacle);
    if state.is_running() {
        resolve_kind(state, EntityKind::Resource);
    }
}

fn resolve_kind(state: &mut GameState, kind: EntityKind) {
    let player_pos = state.player.pos;
    let player_size = state.player.size;

    let mut entities = match kind {
        EntityKind::Obstacle => std::mem::take(&mut state.obstacles),
        EntityKind::Resource => std::mem::take(&mut state.resources),
    };

    // Reverse order keeps indices valid across removals
    for i in (0..entities.len()).rev() {
        match advance_and_test(&mut entities[i], player_pos, player_size) {
            Contact::Hit => {
                entities.remove(i);
                match kind {
                    EntityKind::Obstacle => hit_obstacle(state),
                    EntityKind::Resource => collect_resource(state),
                }
                if !state.is_running() {
                    break;
                }
            }
            Contact::Expired => {
                entities.remove(i);
            }
            Contact::None => {}
        }
    }

    match kind {
        EntityKind::Obstacle => state.obstacles = entities,
        EntityKind::Resource => state.resources = entities,
    }
}

/// Apply obstacle damage; ends the run when health runs out
pub fn hit_obstacle(state: &mut GameState) {
    state.health = (state.health - state.tuning.obstacle_damage).max(0);
    state.hits += 1;
    log::debug!("Obstacle hit, health {}", state.health);
    state.events.push(GameEvent::ObstacleHit {
        health: state.health,
    });

    if state.health <= 0 {
        enter_game_over(state);
    }
}

/// Apply resource rewards
pub fn collect_resource(state: &mut GameState) {
    state.score += state.tuning.resource_score;
    state.health = (state.health + state.tuning.resource_heal).min(MAX_HEALTH);
    state.collected += 1;
    log::debug!("Resource collected, score {}", state.score);
    state.events.push(GameEvent::ResourceCollected {
        score: state.score,
        health: state.health,
    });
}

/// One-way transition to `GameOver`; repeated calls are ignored
pub fn enter_game_over(state: &mut GameState) {
    if state.phase == GamePhase::GameOver {
        return;
    }
    state.phase = GamePhase::GameOver;
    log::info!(
        "Game over: score {} after {} frames",
        state.score,
        state.frame_count
    );
    state.events.push(GameEvent::GameOver { score: state.score });
}
