//! Periodic spawning of obstacles and resources above the visible area

use glam::Vec2;

use super::state::{EntityKind, Falling, GameState};
use crate::consts::*;

/// Whether a spawner with `interval` fires on `frame`
#[inline]
pub fn is_spawn_frame(frame: u64, interval: u64) -> bool {
    interval > 0 && frame.is_multiple_of(interval)
}

/// Run both spawners for the current frame
pub fn spawn_entities(state: &mut GameState) {
    let frame = state.frame_count;
    if is_spawn_frame(frame, state.difficulty.obstacle_interval) {
        spawn(state, EntityKind::Obstacle);
    }
    if is_spawn_frame(frame, state.difficulty.resource_interval) {
        spawn(state, EntityKind::Resource);
    }
}

/// Append one entity at a random x, just above the top edge
pub fn spawn(state: &mut GameState, kind: EntityKind) {
    let (size, speed) = match kind {
        EntityKind::Obstacle => (state.tuning.obstacle_size, state.difficulty.obstacle_speed),
        EntityKind::Resource => (state.tuning.resource_size, state.difficulty.resource_speed),
    };
    let x = state.random_unit() * CANVAS_WIDTH;
    let entity = Falling {
        id: state.next_entity_id(),
        kind,
        pos: Vec2::new(x, -size),
        size,
        speed,
    };
    match kind {
        EntityKind::Obstacle => state.obstacles.push(entity),
        EntityKind::Resource => state.resources.push(entity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::{Preset, Tuning};

    #[test]
    fn test_spawn_frames() {
        let hits: Vec<u64> = (1..=400).filter(|&f| is_spawn_frame(f, 120)).collect();
        assert_eq!(hits, vec![120, 240, 360]);
        assert!(!is_spawn_frame(5, 0));
    }

    #[test]
    fn test_spawned_above_top_edge() {
        let mut state = GameState::new(3, Tuning::from_preset(Preset::Classic));
        for _ in 0..20 {
            spawn(&mut state, EntityKind::Obstacle);
            spawn(&mut state, EntityKind::Resource);
        }
        assert_eq!(state.obstacles.len(), 20);
        assert_eq!(state.resources.len(), 20);
        for e in state.obstacles.iter().chain(&state.resources) {
            assert!(e.pos.x >= 0.0 && e.pos.x < CANVAS_WIDTH);
            assert_eq!(e.pos.y, -e.size);
        }
        assert_eq!(state.obstacles[0].speed, 2.0);
        assert_eq!(state.resources[0].speed, 1.5);
    }
}
