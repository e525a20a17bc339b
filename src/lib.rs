//! Starfall Dodge - dodge falling obstacles, collect falling resources
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, spawning, collisions, difficulty)
//! - `renderer`: Immediate-mode draw list and 2D canvas backend
//! - `hud`: Score/health/stat text displays
//! - `audio`: Sound effect playback
//! - `platform`: Host shell capabilities (message box, exit)
//! - `tuning`: Data-driven game balance
//! - `game`: Frame driver tying the above together

pub mod audio;
pub mod game;
pub mod hud;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use game::{FrameOutcome, Game};
pub use tuning::{Preset, Tuning};

/// Game configuration constants
pub mod consts {
    /// Logical canvas width; the surface is scaled to fit the window
    pub const CANVAS_WIDTH: f32 = 800.0;
    /// Logical canvas height
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Upper bound for health
    pub const MAX_HEALTH: i32 = 100;

    /// Ticks between difficulty steps (10 seconds at 60 Hz)
    pub const RAMP_INTERVAL_TICKS: u64 = 600;
}

