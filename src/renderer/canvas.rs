//! 2D canvas backend (web only)

use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::draw_list::{DrawCommand, DrawList, css_color};
use super::viewport::Viewport;
use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// Replays draw lists on a `<canvas>` 2D context
pub struct CanvasBackend {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub viewport: Viewport,
}

impl CanvasBackend {
    /// Attach to a canvas and fix its backing store to the logical resolution
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        canvas.set_width(CANVAS_WIDTH as u32);
        canvas.set_height(CANVAS_HEIGHT as u32);

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self {
            canvas,
            ctx,
            viewport: Viewport::fit(CANVAS_WIDTH, CANVAS_HEIGHT),
        })
    }

    /// Recompute the display scale for a new window size
    pub fn resize(&mut self, window_width: f32, window_height: f32) {
        self.viewport = Viewport::fit(window_width, window_height);
        let style = self.canvas.style();
        let _ = style.set_property("width", &format!("{}px", self.viewport.css_width));
        let _ = style.set_property("height", &format!("{}px", self.viewport.css_height));
    }

    /// Execute every command in order
    pub fn draw(&self, list: &DrawList) {
        for command in &list.commands {
            match *command {
                DrawCommand::Clear { width, height } => {
                    self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
                }
                DrawCommand::FillRect { x, y, w, h, color } => {
                    self.ctx.set_fill_style_str(&css_color(color));
                    self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
                }
                DrawCommand::FillCircle {
                    x,
                    y,
                    radius,
                    color,
                } => {
                    self.ctx.set_fill_style_str(&css_color(color));
                    self.ctx.begin_path();
                    if let Err(e) = self.ctx.arc(
                        x as f64,
                        y as f64,
                        radius as f64,
                        0.0,
                        std::f64::consts::TAU,
                    ) {
                        log::warn!("Canvas arc failed: {:?}", e);
                        continue;
                    }
                    self.ctx.fill();
                }
            }
        }
    }
}
