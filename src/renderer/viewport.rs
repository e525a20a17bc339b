//! Fit the fixed logical canvas into the window

use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// Uniform scale of the logical canvas inside a window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scale: f32,
    /// Displayed canvas size in CSS pixels
    pub css_width: f32,
    pub css_height: f32,
}

impl Viewport {
    /// Largest uniform scale that keeps the whole canvas visible
    pub fn fit(window_width: f32, window_height: f32) -> Self {
        let scale = (window_width / CANVAS_WIDTH)
            .min(window_height / CANVAS_HEIGHT)
            .max(0.0);
        Self {
            scale,
            css_width: CANVAS_WIDTH * scale,
            css_height: CANVAS_HEIGHT * scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_limited_by_height() {
        let vp = Viewport::fit(1920.0, 900.0);
        assert_eq!(vp.scale, 1.5);
        assert_eq!((vp.css_width, vp.css_height), (1200.0, 900.0));
    }

    #[test]
    fn test_fit_is_idempotent() {
        assert_eq!(Viewport::fit(400.0, 600.0), Viewport::fit(400.0, 600.0));
        assert_eq!(Viewport::fit(400.0, 600.0).scale, 0.5);
    }
}
