//! Fixed per-frame simulation tick
//!
//! One call advances the session by exactly one display refresh.

use super::input::TickInput;
use super::state::GameState;
use super::{collision, difficulty, kinematics, spawn, starfield};

/// Advance the game state by one tick; a no-op once the game is over
pub fn tick(state: &mut GameState, input: &TickInput) {
    if !state.is_running() {
        return;
    }

    state.frame_count += 1;

    let accel = state.tuning.player_accel;
    let damping = state.tuning.damping;
    kinematics::update_player(&mut state.player, input, accel, damping);

    difficulty::update(state);
    starfield::update(state);

    spawn::spawn_entities(state);
    collision::resolve(state);
}
