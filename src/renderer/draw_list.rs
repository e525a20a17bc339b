//! Immediate-mode draw commands built from the game state
//!
//! The list is backend-agnostic; the web build replays it on a 2D canvas and
//! tests inspect it directly.

use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::sim::{Falling, GameState, Player, Star};

/// RGBA color with components in `0.0..=1.0`
pub type Color = [f32; 4];

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const PLAYER: Color = [0.0, 1.0, 1.0, 1.0]; // #00FFFF
    pub const OBSTACLE: Color = [1.0, 0.0, 0.0, 1.0]; // #FF0000
    pub const RESOURCE: Color = [0.0, 1.0, 0.0, 1.0]; // #00FF00
    pub const STAR: Color = [1.0, 1.0, 1.0, 1.0];
}

/// Convert a color to a CSS `rgba()` string
pub fn css_color(color: Color) -> String {
    let [r, g, b, a] = color;
    format!(
        "rgba({}, {}, {}, {})",
        (r.clamp(0.0, 1.0) * 255.0).round() as u8,
        (g.clamp(0.0, 1.0) * 255.0).round() as u8,
        (b.clamp(0.0, 1.0) * 255.0).round() as u8,
        a.clamp(0.0, 1.0)
    )
}

/// One drawing operation in logical canvas coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { width: f32, height: f32 },
    FillRect { x: f32, y: f32, w: f32, h: f32, color: Color },
    FillCircle { x: f32, y: f32, radius: f32, color: Color },
}

/// Ordered list of draw commands for one frame
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    /// Build the frame: clear, stars, player, obstacles, resources
    pub fn build(state: &GameState) -> Self {
        let mut commands = Vec::with_capacity(
            1 + state.stars.len() + 1 + state.obstacles.len() + state.resources.len(),
        );

        commands.push(DrawCommand::Clear {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
        });
        commands.extend(state.stars.iter().map(star));
        commands.push(player(&state.player));
        commands.extend(state.obstacles.iter().map(obstacle));
        commands.extend(state.resources.iter().map(resource));

        Self { commands }
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

fn star(star: &Star) -> DrawCommand {
    // Small stars read as far away: dimmer
    let alpha = (0.3 + star.size * 0.25).min(1.0);
    let [r, g, b, _] = colors::STAR;
    DrawCommand::FillCircle {
        x: star.pos.x,
        y: star.pos.y,
        radius: star.size,
        color: [r, g, b, alpha],
    }
}

fn player(player: &Player) -> DrawCommand {
    centered_square(player.pos.x, player.pos.y, player.size, colors::PLAYER)
}

fn obstacle(obstacle: &Falling) -> DrawCommand {
    centered_square(obstacle.pos.x, obstacle.pos.y, obstacle.size, colors::OBSTACLE)
}

fn resource(resource: &Falling) -> DrawCommand {
    DrawCommand::FillCircle {
        x: resource.pos.x,
        y: resource.pos.y,
        radius: resource.size / 2.0,
        color: colors::RESOURCE,
    }
}

fn centered_square(cx: f32, cy: f32, size: f32, color: Color) -> DrawCommand {
    DrawCommand::FillRect {
        x: cx - size / 2.0,
        y: cy - size / 2.0,
        w: size,
        h: size,
        color,
    }
}
