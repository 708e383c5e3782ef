use super::Vec2;

/// Window size in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Maps a window pixel position to normalized coordinates.
    ///
    /// `(0, 0)` maps to `(-1, -1)`, the window center to `(0, 0)` and
    /// `(width, height)` to exactly `(1, 1)`. +Y stays downward. Positions
    /// outside the window map outside `[-1, 1]`; nothing is clamped.
    #[inline]
    pub fn pixel_to_ndc(self, px: f32, py: f32) -> Vec2 {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        Vec2::new(
            2.0 * (px - half_w) / self.width,
            2.0 * (py - half_h) / self.height,
        )
    }
}
