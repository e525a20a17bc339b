//! Player movement: acceleration from held keys, damping, bounds clamp

use glam::Vec2;

use super::input::TickInput;
use super::state::Player;
use crate::consts::*;

/// Advance the player by one tick
pub fn update_player(player: &mut Player, input: &TickInput, accel: f32, damping: f32) {
    player.vel += input.direction() * accel;
    player.vel *= damping;
    player.pos += player.vel;
    clamp_to_canvas(player);
}

/// Keep the whole player box inside the canvas
pub fn clamp_to_canvas(player: &mut Player) {
    let half = player.size / 2.0;
    let min = Vec2::splat(half);
    let max = Vec2::new(CANVAS_WIDTH - half, CANVAS_HEIGHT - half);
    player.pos = player.pos.clamp(min, max);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accelerates_then_damps() {
        let mut player = Player::centered(25.0);
        let input = TickInput {
            right: true,
            ..Default::default()
        };
        update_player(&mut player, &input, 1.0, 0.8);
        assert!((player.vel.x - 0.8).abs() < 1e-6);
        assert!((player.pos.x - 400.8).abs() < 1e-4);
        assert_eq!(player.vel.y, 0.0);
    }

    #[test]
    fn test_velocity_decays_without_input() {
        let mut player = Player::centered(25.0);
        player.vel = Vec2::new(5.0, -3.0);
        let mut prev = player.vel.length();
        for _ in 0..50 {
            update_player(&mut player, &TickInput::default(), 1.0, 0.8);
            let speed = player.vel.length();
            assert!(speed < prev);
            prev = speed;
        }
        assert!(prev < 1e-3);
    }

    #[test]
    fn test_clamped_at_corner() {
        let mut player = Player::centered(20.0);
        let input = TickInput {
            up: true,
            left: true,
            ..Default::default()
        };
        for _ in 0..500 {
            update_player(&mut player, &input, 1.0, 0.8);
        }
        assert_eq!(player.pos, Vec2::new(10.0, 10.0));
    }
}
