//! Keyboard state and per-tick input snapshots

use std::collections::HashSet;

use glam::Vec2;

/// Movement keys the game understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
}

impl Key {
    /// Map a DOM-style key identifier (`KeyboardEvent.key`) to a movement key
    pub fn from_identifier(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" | "w" | "W" => Some(Key::Up),
            "ArrowDown" | "s" | "S" => Some(Key::Down),
            "ArrowLeft" | "a" | "A" => Some(Key::Left),
            "ArrowRight" | "d" | "D" => Some(Key::Right),
            _ => None,
        }
    }
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl TickInput {
    /// Unit acceleration per held direction; opposite keys cancel out
    pub fn direction(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.up {
            dir.y -= 1.0;
        }
        if self.down {
            dir.y += 1.0;
        }
        if self.left {
            dir.x -= 1.0;
        }
        if self.right {
            dir.x += 1.0;
        }
        dir
    }
}

/// Held-key map, mutated by key events between ticks
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: HashSet<Key>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press; returns false for keys the game ignores
    pub fn key_down(&mut self, identifier: &str) -> bool {
        match Key::from_identifier(identifier) {
            Some(key) => {
                self.held.insert(key);
                true
            }
            None => false,
        }
    }

    /// Record a key release; returns false for keys the game ignores
    pub fn key_up(&mut self, identifier: &str) -> bool {
        match Key::from_identifier(identifier) {
            Some(key) => {
                self.held.remove(&key);
                true
            }
            None => false,
        }
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Consistent view of the held keys for one tick
    pub fn snapshot(&self) -> TickInput {
        TickInput {
            up: self.is_held(Key::Up),
            down: self.is_held(Key::Down),
            left: self.is_held(Key::Left),
            right: self.is_held(Key::Right),
        }
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_and_wasd_map_to_same_key() {
        assert_eq!(Key::from_identifier("ArrowLeft"), Key::from_identifier("a"));
        assert_eq!(Key::from_identifier("ArrowUp"), Some(Key::Up));
        assert_eq!(Key::from_identifier("Enter"), None);
    }

    #[test]
    fn test_snapshot_tracks_press_and_release() {
        let mut keys = KeyboardState::new();
        assert!(keys.key_down("ArrowRight"));
        assert!(keys.key_down("w"));
        assert!(!keys.key_down("Escape"));

        let input = keys.snapshot();
        assert!(input.right && input.up);
        assert!(!input.left && !input.down);

        keys.key_up("d");
        assert!(!keys.snapshot().right);
    }

    #[test]
    fn test_direction_sums_axes() {
        let input = TickInput {
            up: true,
            left: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(input.direction(), Vec2::new(0.0, -1.0));
    }
}
