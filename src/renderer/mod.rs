//! Rendering module
//!
//! `shapes` builds a platform-independent draw list from the game state;
//! `canvas` paints it with the browser's Canvas 2D API.

pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use shapes::{Color, Shape, scene};
