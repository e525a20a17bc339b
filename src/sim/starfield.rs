//! Parallax starfield behind the play area
//!
//! Purely cosmetic: stars never interact with the player.

use glam::Vec2;

use super::state::{GameState, Star};
use crate::consts::*;

/// Smallest and largest star size
const STAR_SIZE_RANGE: (f32, f32) = (0.5, 2.5);
/// Star speed as a fraction of the current obstacle speed, by depth
const STAR_DEPTH_RANGE: (f32, f32) = (0.1, 0.6);

/// Fill the starfield with `tuning.star_count` stars spread over the screen
pub fn populate(state: &mut GameState) {
    state.stars.clear();
    for _ in 0..state.tuning.star_count {
        let y = state.random_unit() * CANVAS_HEIGHT;
        let star = new_star(state, y);
        state.stars.push(star);
    }
}

/// Random star at height `y`; bigger stars are nearer and therefore faster
fn new_star(state: &mut GameState, y: f32) -> Star {
    let x = state.random_unit() * CANVAS_WIDTH;
    let size = state.random_range(STAR_SIZE_RANGE.0, STAR_SIZE_RANGE.1);
    let t = (size - STAR_SIZE_RANGE.0) / (STAR_SIZE_RANGE.1 - STAR_SIZE_RANGE.0);
    let depth = STAR_DEPTH_RANGE.0 + t * (STAR_DEPTH_RANGE.1 - STAR_DEPTH_RANGE.0);
    Star {
        pos: Vec2::new(x, y),
        size,
        speed: depth * state.difficulty.obstacle_speed,
    }
}

/// Scroll stars down, recycling those that leave the bottom edge
pub fn update(state: &mut GameState) {
    let mut stars = std::mem::take(&mut state.stars);
    for star in &mut stars {
        star.pos.y += star.speed;
        if star.pos.y > CANVAS_HEIGHT {
            *star = new_star(state, 0.0);
        }
    }
    state.stars = stars;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::{Preset, Tuning};

    #[test]
    fn test_populate_matches_tuning() {
        let state = GameState::new(4, Tuning::from_preset(Preset::Starfield));
        assert_eq!(state.stars.len(), state.tuning.star_count);
        for star in &state.stars {
            assert!(star.pos.y >= 0.0 && star.pos.y <= CANVAS_HEIGHT);
            assert!(star.speed > 0.0);
        }

        let classic = GameState::new(4, Tuning::from_preset(Preset::Classic));
        assert!(classic.stars.is_empty());
    }

    #[test]
    fn test_star_respawns_at_top_with_current_speed() {
        let mut state = GameState::new(4, Tuning::from_preset(Preset::Starfield));
        state.difficulty.obstacle_speed = 5.0;
        state.stars[0].pos.y = CANVAS_HEIGHT - 0.01;
        state.stars[0].speed = 1.0;

        update(&mut state);

        let star = &state.stars[0];
        assert_eq!(star.pos.y, 0.0);
        assert!(star.speed >= 0.1 * 5.0 - 1e-4 && star.speed <= 0.6 * 5.0 + 1e-4);
        assert_eq!(state.stars.len(), state.tuning.star_count);
    }
}
