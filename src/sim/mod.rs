//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per display refresh
//! - Seeded RNG only
//! - Stable iteration order (insertion order, ids increase)
//! - No rendering, audio or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod difficulty;
pub mod input;
pub mod kinematics;
pub mod spawn;
pub mod starfield;
pub mod state;
pub mod tick;

pub use autopilot::autopilot;
pub use collision::overlaps;
pub use input::{Key, KeyboardState, TickInput};
pub use state::{
    Difficulty, EntityKind, Falling, GameEvent, GamePhase, GameState, Player, Star,
};
pub use tick::tick;
