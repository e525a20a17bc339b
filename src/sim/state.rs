//! Game state and core simulation types
//!
//! Everything one session needs lives in [`GameState`]; a restart builds a
//! fresh one.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Health ran out; terminal for this session
    GameOver,
}

/// Something that happened during a tick, for sound and HUD dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    ObstacleHit { health: i32 },
    ResourceCollected { score: u32, health: i32 },
    DifficultyRaised { level: u32 },
    GameOver { score: u32 },
}

/// The player-controlled square
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Side length; also used as the collision diameter
    pub size: f32,
}

impl Player {
    /// Player resting at the canvas center
    pub fn centered(size: f32) -> Self {
        Self {
            pos: Vec2::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0),
            vel: Vec2::ZERO,
            size,
        }
    }
}

/// Falling entity kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// Costs health on contact
    Obstacle,
    /// Grants score and a little health on contact
    Resource,
}

/// An obstacle or resource falling down the screen
#[derive(Debug, Clone)]
pub struct Falling {
    pub id: u32,
    pub kind: EntityKind,
    pub pos: Vec2,
    pub size: f32,
    /// Pixels per tick; live entities follow the difficulty ramp
    pub speed: f32,
}

impl Falling {
    /// True once the entity has fully left the bottom edge
    pub fn below_screen(&self) -> bool {
        self.pos.y > CANVAS_HEIGHT + self.size
    }
}

/// Decorative background star
#[derive(Debug, Clone)]
pub struct Star {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
}

/// Speeds and spawn intervals currently in effect (raised by the ramp)
#[derive(Debug, Clone, PartialEq)]
pub struct Difficulty {
    /// Ramp steps applied so far
    pub level: u32,
    pub obstacle_speed: f32,
    pub resource_speed: f32,
    pub obstacle_interval: u64,
    pub resource_interval: u64,
}

impl Difficulty {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            level: 0,
            obstacle_speed: tuning.obstacle_speed,
            resource_speed: tuning.resource_speed,
            obstacle_interval: tuning.obstacle_interval,
            resource_interval: tuning.resource_interval,
        }
    }
}

/// Complete session state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub score: u32,
    /// Always within `[0, MAX_HEALTH]`
    pub health: i32,
    pub phase: GamePhase,
    /// Ticks simulated while running
    pub frame_count: u64,
    pub difficulty: Difficulty,
    pub player: Player,
    /// Active obstacles, oldest first
    pub obstacles: Vec<Falling>,
    /// Active resources, oldest first
    pub resources: Vec<Falling>,
    /// Background particles (not gameplay-affecting)
    pub stars: Vec<Star>,
    /// Resources picked up this session
    pub collected: u32,
    /// Obstacles that hit the player this session
    pub hits: u32,
    /// Events recorded since the last drain
    pub events: Vec<GameEvent>,
    rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Create a new session with the given seed
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            score: 0,
            health: MAX_HEALTH,
            phase: GamePhase::Running,
            frame_count: 0,
            difficulty: Difficulty::from_tuning(&tuning),
            player: Player::centered(tuning.player_size),
            obstacles: Vec::new(),
            resources: Vec::new(),
            stars: Vec::with_capacity(tuning.star_count),
            collected: 0,
            hits: 0,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
            tuning,
        };

        super::starfield::populate(&mut state);

        state
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Uniform sample in `[0, 1)` from the session RNG
    pub fn random_unit(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    /// Uniform sample in `[low, high)`; returns `low` for an empty range
    pub fn random_range(&mut self, low: f32, high: f32) -> f32 {
        if high <= low {
            return low;
        }
        self.rng.random_range(low..high)
    }

    /// Take all events recorded since the previous drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
