//! Paint model shared by the canvas and the renderer.

pub mod color;

pub use color::Color;
