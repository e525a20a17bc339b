//! Capped difficulty ramp: faster entities, shorter spawn intervals

use super::state::{Difficulty, GameEvent, GameState};
use crate::tuning::RampTuning;

/// Apply one ramp step; returns false when everything is already capped
pub fn step(difficulty: &mut Difficulty, ramp: &RampTuning) -> bool {
    let before = difficulty.clone();

    difficulty.obstacle_speed =
        (difficulty.obstacle_speed + ramp.speed_step).min(ramp.obstacle_speed_cap);
    difficulty.resource_speed =
        (difficulty.resource_speed + ramp.speed_step).min(ramp.resource_speed_cap);
    difficulty.obstacle_interval = lower_interval(
        difficulty.obstacle_interval,
        ramp.spawn_interval_step,
        ramp.obstacle_interval_floor,
    );
    difficulty.resource_interval = lower_interval(
        difficulty.resource_interval,
        ramp.spawn_interval_step,
        ramp.resource_interval_floor,
    );

    // Never undo a value that started beyond its cap
    difficulty.obstacle_speed = difficulty.obstacle_speed.max(before.obstacle_speed);
    difficulty.resource_speed = difficulty.resource_speed.max(before.resource_speed);

    *difficulty != before
}

fn lower_interval(current: u64, step: u64, floor: u64) -> u64 {
    if current <= floor {
        return current;
    }
    current.saturating_sub(step).max(floor)
}

/// Run the ramp on its cadence and propagate new speeds to live entities
pub fn update(state: &mut GameState) {
    let Some(ramp) = state.tuning.ramp.clone() else {
        return;
    };
    if !state.frame_count.is_multiple_of(ramp.interval_ticks.max(1)) {
        return;
    }
    if !step(&mut state.difficulty, &ramp) {
        return;
    }

    state.difficulty.level += 1;
    let obstacle_speed = state.difficulty.obstacle_speed;
    let resource_speed = state.difficulty.resource_speed;
    for obstacle in &mut state.obstacles {
        obstacle.speed = obstacle_speed;
    }
    for resource in &mut state.resources {
        resource.speed = resource_speed;
    }

    log::info!(
        "Difficulty level {}: obstacle speed {:.1}, spawn every {} ticks",
        state.difficulty.level + 1,
        obstacle_speed,
        state.difficulty.obstacle_interval
    );
    state.events.push(GameEvent::DifficultyRaised {
        level: state.difficulty.level,
    });
}
