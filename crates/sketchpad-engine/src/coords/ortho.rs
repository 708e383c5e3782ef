use super::Vec2;

/// 2D orthographic projection.
///
/// Each bound is the scene coordinate shown at that window edge: `left` at the
/// left edge, `top` at the top edge, and so on. `top < bottom` gives a +Y-down
/// space (matching window pixels), `top > bottom` a conventional +Y-up plot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ortho2d {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Ortho2d {
    #[inline]
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left, right, top, bottom }
    }

    /// `[-1, 1]` on both axes with +Y down, so that points produced by
    /// [`Viewport::pixel_to_ndc`](super::Viewport::pixel_to_ndc) land under
    /// the cursor.
    #[inline]
    pub const fn normalized_y_down() -> Self {
        Self::new(-1.0, 1.0, -1.0, 1.0)
    }

    /// Degenerate projections (zero width or height) cannot be inverted.
    #[inline]
    pub fn is_valid(self) -> bool {
        let w = self.right - self.left;
        let h = self.top - self.bottom;
        w != 0.0 && h != 0.0 && w.is_finite() && h.is_finite()
    }

    /// Maps a scene-space point to clip space (`[-1, 1]`, +Y up).
    #[inline]
    pub fn to_clip(self, p: Vec2) -> Vec2 {
        Vec2::new(
            2.0 * (p.x - self.left) / (self.right - self.left) - 1.0,
            2.0 * (p.y - self.bottom) / (self.top - self.bottom) - 1.0,
        )
    }
}

impl Default for Ortho2d {
    fn default() -> Self {
        Self::normalized_y_down()
    }
}
