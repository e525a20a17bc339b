//! Rendering module
//!
//! The game state is turned into an immediate-mode [`DrawList`] each frame;
//! backends only replay it.

pub mod draw_list;
pub mod viewport;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasBackend;
pub use draw_list::{Color, DrawCommand, DrawList, colors};
pub use viewport::Viewport;
