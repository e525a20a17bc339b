//! Score, health and stat text displays
//!
//! Text nodes are only written when their rendered string changes, so an
//! idle frame costs no DOM work.

use crate::sim::GameState;

/// Text displays owned by the HUD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HudField {
    Score,
    Health,
    Stats,
}

impl HudField {
    /// DOM element id for this field
    pub fn element_id(&self) -> &'static str {
        match self {
            HudField::Score => "score",
            HudField::Health => "health",
            HudField::Stats => "stats",
        }
    }
}

/// Health display color by threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthColor {
    Green,
    Amber,
    Red,
}

impl HealthColor {
    pub fn for_health(health: i32) -> Self {
        if health > 60 {
            HealthColor::Green
        } else if health > 30 {
            HealthColor::Amber
        } else {
            HealthColor::Red
        }
    }

    pub fn css(&self) -> &'static str {
        match self {
            HealthColor::Green => "#4CAF50",
            HealthColor::Amber => "#FFC107",
            HealthColor::Red => "#F44336",
        }
    }
}

/// Where HUD updates go (DOM on the web, a recorder in tests)
pub trait HudSink {
    fn set_text(&mut self, field: HudField, text: &str);
    fn set_color(&mut self, field: HudField, css_color: &str);
}

/// Change-tracking HUD
#[derive(Debug, Clone, Default)]
pub struct Hud {
    score: Option<String>,
    health: Option<String>,
    stats: Option<String>,
    health_color: Option<HealthColor>,
}

pub fn score_text(state: &GameState) -> String {
    format!("Score: {}", state.score)
}

pub fn health_text(state: &GameState) -> String {
    format!("Health: {}", state.health)
}

pub fn stats_text(state: &GameState) -> String {
    format!(
        "Level {}  Collected {}  Hits {}",
        state.difficulty.level + 1,
        state.collected,
        state.hits
    )
}

impl Hud {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget what was written so the next sync rewrites every field
    pub fn invalidate(&mut self) {
        *self = Self::default();
    }

    /// Push changed fields to the sink; returns how many writes were made
    pub fn sync(&mut self, state: &GameState, sink: &mut impl HudSink) -> usize {
        let mut writes = 0;

        writes += update_field(&mut self.score, score_text(state), HudField::Score, sink);
        writes += update_field(&mut self.health, health_text(state), HudField::Health, sink);
        writes += update_field(&mut self.stats, stats_text(state), HudField::Stats, sink);

        let color = HealthColor::for_health(state.health);
        if self.health_color != Some(color) {
            sink.set_color(HudField::Health, color.css());
            self.health_color = Some(color);
            writes += 1;
        }

        writes
    }
}

fn update_field(
    cached: &mut Option<String>,
    text: String,
    field: HudField,
    sink: &mut impl HudSink,
) -> usize {
    if cached.as_deref() == Some(text.as_str()) {
        return 0;
    }
    sink.set_text(field, &text);
    *cached = Some(text);
    1
}
