use crate::coords::{Ortho2d, Vec2};
use crate::paint::Color;

/// Scene-space position with a color.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vertex {
    pub pos: Vec2,
    pub color: Color,
}

impl Vertex {
    #[inline]
    pub const fn new(pos: Vec2, color: Color) -> Self {
        Self { pos, color }
    }
}

/// Point batch payload.
#[derive(Debug, Clone, PartialEq)]
pub struct PointsCmd {
    pub vertices: Vec<Vertex>,
    /// Point edge length in physical pixels.
    pub size: f32,
}

/// Line strip payload.
#[derive(Debug, Clone, PartialEq)]
pub struct LineStripCmd {
    pub vertices: Vec<Vertex>,
    /// Line width in physical pixels.
    pub width: f32,
}

/// Renderer-agnostic draw command stream.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    SetProjection(Ortho2d),
    Clear(Color),
    Points(PointsCmd),
    LineStrip(LineStripCmd),
}
