//! Sketchpad engine crate.
//!
//! Owns the window + GPU runtime, the fixed-rate frame loop, and the small set
//! of drawing primitives used by the studio scenes.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod paint;
pub mod canvas;
pub mod draw;
pub mod render;
