//! Game balance and presets
//!
//! Every gameplay constant lives here so both game variants share one
//! simulation. Overrides can be loaded from JSON; missing fields keep the
//! preset defaults.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::consts::*;

/// Slowest fall speed a tuning may ask for
const MIN_FALL_SPEED: f32 = 0.1;

/// Game variant presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Preset {
    /// Original rules: no starfield, constant difficulty
    Classic,
    /// Parallax starfield and a difficulty ramp
    #[default]
    Starfield,
}

impl Preset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Classic => "Classic",
            Preset::Starfield => "Starfield",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" | "v1" => Some(Preset::Classic),
            "starfield" | "v2" => Some(Preset::Starfield),
            _ => None,
        }
    }
}

/// Periodic escalation of entity speed and spawn frequency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RampTuning {
    /// Ticks between steps
    pub interval_ticks: u64,
    /// Speed added to both entity kinds per step
    pub speed_step: f32,
    pub obstacle_speed_cap: f32,
    pub resource_speed_cap: f32,
    /// Ticks removed from both spawn intervals per step
    pub spawn_interval_step: u64,
    pub obstacle_interval_floor: u64,
    pub resource_interval_floor: u64,
}

impl Default for RampTuning {
    fn default() -> Self {
        Self {
            interval_ticks: RAMP_INTERVAL_TICKS,
            speed_step: 0.2,
            obstacle_speed_cap: 6.0,
            resource_speed_cap: 4.4,
            spawn_interval_step: 8,
            obstacle_interval_floor: 50,
            resource_interval_floor: 100,
        }
    }
}

/// Data-driven game balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    pub player_size: f32,
    /// Velocity added per tick for each held direction
    pub player_accel: f32,
    /// Per-tick velocity multiplier (friction)
    pub damping: f32,

    // === Obstacles ===
    pub obstacle_size: f32,
    pub obstacle_speed: f32,
    /// Ticks between obstacle spawns
    pub obstacle_interval: u64,
    pub obstacle_damage: i32,

    // === Resources ===
    pub resource_size: f32,
    pub resource_speed: f32,
    /// Ticks between resource spawns
    pub resource_interval: u64,
    pub resource_score: u32,
    pub resource_heal: i32,

    // === Difficulty / background ===
    /// Difficulty ramp, `None` keeps speeds and intervals constant
    pub ramp: Option<RampTuning>,
    /// Number of background stars (0 disables the starfield)
    pub star_count: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self::from_preset(Preset::default())
    }
}

impl Tuning {
    /// Balance for a given preset
    pub fn from_preset(preset: Preset) -> Self {
        let classic = Self {
            player_size: 20.0,
            player_accel: 1.0,
            damping: 0.8,

            obstacle_size: 30.0,
            obstacle_speed: 2.0,
            obstacle_interval: 120,
            obstacle_damage: 10,

            resource_size: 25.0,
            resource_speed: 1.5,
            resource_interval: 200,
            resource_score: 5,
            resource_heal: 1,

            ramp: None,
            star_count: 0,
        };

        match preset {
            Preset::Classic => classic,
            Preset::Starfield => Self {
                player_size: 25.0,
                ramp: Some(RampTuning::default()),
                star_count: 100,
                ..classic
            },
        }
    }

    /// Parse a JSON override document on top of the default preset
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Self::from_json_over(json, Preset::default())
    }

    /// Parse a JSON override document on top of `preset`
    pub fn from_json_over(json: &str, preset: Preset) -> Result<Self, serde_json::Error> {
        let overrides: Value = serde_json::from_str(json)?;
        let mut merged = serde_json::to_value(Self::from_preset(preset))?;
        merge_json(&mut merged, overrides);
        serde_json::from_value::<Self>(merged).map(Self::validated)
    }

    /// Load overrides, falling back to `preset` when the document is invalid
    pub fn load_or(json: Option<&str>, preset: Preset) -> Self {
        let Some(json) = json else {
            return Self::from_preset(preset);
        };
        match Self::from_json_over(json, preset) {
            Ok(tuning) => {
                log::info!("Loaded tuning overrides");
                tuning
            }
            Err(e) => {
                log::warn!("Invalid tuning ({e}), using {} preset", preset.as_str());
                Self::from_preset(preset)
            }
        }
    }

    /// Clamp values the simulation cannot work with
    pub fn validated(mut self) -> Self {
        self.damping = self.damping.clamp(0.0, 1.0);
        self.player_size = self.player_size.clamp(1.0, CANVAS_WIDTH.min(CANVAS_HEIGHT));
        self.obstacle_speed = self.obstacle_speed.max(MIN_FALL_SPEED);
        self.resource_speed = self.resource_speed.max(MIN_FALL_SPEED);
        self.obstacle_interval = self.obstacle_interval.max(1);
        self.resource_interval = self.resource_interval.max(1);
        self.obstacle_damage = self.obstacle_damage.max(0);
        self.resource_heal = self.resource_heal.max(0);
        if let Some(ramp) = self.ramp.as_mut() {
            ramp.interval_ticks = ramp.interval_ticks.max(1);
            ramp.speed_step = ramp.speed_step.max(0.0);
            ramp.obstacle_speed_cap = ramp.obstacle_speed_cap.max(MIN_FALL_SPEED);
            ramp.resource_speed_cap = ramp.resource_speed_cap.max(MIN_FALL_SPEED);
            ramp.obstacle_interval_floor = ramp.obstacle_interval_floor.max(1);
            ramp.resource_interval_floor = ramp.resource_interval_floor.max(1);
        }
        self
    }
}

/// Overlay `overrides` onto `base`, descending into objects present in both
fn merge_json(base: &mut Value, overrides: Value) {
    match (base, overrides) {
        (Value::Object(base), Value::Object(overrides)) => {
            for (key, value) in overrides {
                match base.get_mut(&key) {
                    Some(slot) if slot.is_object() && value.is_object() => merge_json(slot, value),
                    _ => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, overrides) => *base = overrides,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_differ_in_extras_only() {
        let classic = Tuning::from_preset(Preset::Classic);
        let starfield = Tuning::from_preset(Preset::Starfield);

        assert!(classic.ramp.is_none());
        assert_eq!(classic.star_count, 0);
        assert!(starfield.ramp.is_some());
        assert!(starfield.star_count > 0);
        assert_eq!(classic.obstacle_interval, starfield.obstacle_interval);
        assert_eq!(classic.damping, 0.8);
    }

    #[test]
    fn test_from_json_partial_override() {
        let tuning = Tuning::from_json(r#"{ "obstacle_speed": 3.5, "ramp": null }"#).unwrap();
        assert_eq!(tuning.obstacle_speed, 3.5);
        assert!(tuning.ramp.is_none());
        // Untouched fields keep the default preset
        assert_eq!(tuning.player_size, 25.0);
    }

    #[test]
    fn test_validated_fixes_zero_intervals() {
        let tuning = Tuning::from_json(r#"{ "obstacle_interval": 0, "damping": 1.7 }"#).unwrap();
        assert_eq!(tuning.obstacle_interval, 1);
        assert_eq!(tuning.damping, 1.0);
    }

    #[test]
    fn test_load_or_falls_back() {
        let tuning = Tuning::load_or(Some("not json"), Preset::Classic);
        assert_eq!(tuning, Tuning::from_preset(Preset::Classic));
        assert_eq!(Preset::from_str("V1"), Some(Preset::Classic));
        assert_eq!(Preset::from_str("hard"), None);
    }

    #[test]
    fn test_partial_override_keeps_chosen_preset() {
        let tuning = Tuning::load_or(Some(r#"{ "obstacle_speed": 3.0 }"#), Preset::Classic);
        assert_eq!(tuning.obstacle_speed, 3.0);
        assert_eq!(tuning.star_count, 0);
        assert!(tuning.ramp.is_none());
        assert_eq!(tuning.player_size, 20.0);
    }

    #[test]
    fn test_nested_ramp_override_merges() {
        let tuning =
            Tuning::from_json_over(r#"{ "ramp": { "speed_step": 0.5 } }"#, Preset::Starfield)
                .unwrap();
        let ramp = tuning.ramp.unwrap();
        assert_eq!(ramp.speed_step, 0.5);
        assert_eq!(ramp.obstacle_speed_cap, 6.0);
        assert_eq!(ramp.interval_ticks, 600);
    }

    #[test]
    fn test_validated_keeps_entities_falling() {
        let tuning = Tuning::from_json(
            r#"{ "obstacle_speed": -4.0, "resource_speed": -1.0,
                 "ramp": { "obstacle_speed_cap": -2.0, "resource_speed_cap": 0.0, "speed_step": -1.0 } }"#,
        )
        .unwrap();
        assert!(tuning.obstacle_speed > 0.0);
        assert!(tuning.resource_speed > 0.0);
        let ramp = tuning.ramp.unwrap();
        assert!(ramp.obstacle_speed_cap > 0.0);
        assert!(ramp.resource_speed_cap > 0.0);
        assert_eq!(ramp.speed_step, 0.0);

        let nan = Tuning {
            obstacle_speed: f32::NAN,
            ..Tuning::default()
        }
        .validated();
        assert_eq!(nan.obstacle_speed, MIN_FALL_SPEED);
    }
}
