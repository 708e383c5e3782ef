//! Canvas: the explicit drawing target passed to scene hooks.
//!
//! Responsibilities:
//! - define the `Canvas` contract the `draw` helpers are written against
//! - record calls into a renderer-agnostic `DrawList`
//! - resolve a recorded frame into what is actually visible (clear + draws
//!   with the projection in force for each)
//!
//! Projection state lives on the canvas object rather than in ambient GPU
//! state, so scenes can be driven and inspected without a window.

mod cmd;
mod list;

pub use cmd::{DrawCmd, LineStripCmd, PointsCmd, Vertex};
pub use list::{DrawList, ResolvedDraw, ResolvedFrame};

use crate::coords::Ortho2d;
use crate::paint::Color;

/// Drawing target for scene hooks and `draw` helpers.
pub trait Canvas {
    /// Replaces the projection used by every subsequent draw call.
    ///
    /// The projection persists across frames until replaced. A projection
    /// with zero width or height is ignored.
    fn set_projection(&mut self, projection: Ortho2d);

    /// Discards everything drawn so far this frame and fills with `color`.
    fn clear(&mut self, color: Color);

    /// Draws each vertex as a square point `size` pixels wide.
    fn draw_points(&mut self, vertices: &[Vertex], size: f32);

    /// Connects consecutive vertices with line segments `width` pixels wide.
    fn draw_line_strip(&mut self, vertices: &[Vertex], width: f32);
}
