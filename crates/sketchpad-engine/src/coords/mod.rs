//! Coordinate types shared by the canvas, the renderer and the scenes.
//!
//! Two spaces are in play:
//! - window space: logical pixels, origin top-left, +X right, +Y down
//! - scene space: whatever an [`Ortho2d`] projection maps onto the window
//!
//! The renderer converts scene space to clip space on the CPU.

mod ortho;
mod vec2;
mod viewport;

pub use ortho::Ortho2d;
pub use vec2::Vec2;
pub use viewport::Viewport;
