use crate::coords::Ortho2d;
use crate::paint::Color;

use super::cmd::{DrawCmd, LineStripCmd, PointsCmd, Vertex};
use super::Canvas;

/// Recorded draw stream for a frame.
///
/// `DrawList` is the canvas handed to scene hooks. Commands are recorded in
/// call order and dropped by [`begin_frame`](Self::begin_frame); the current
/// projection survives frame boundaries.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,

    /// Projection in force at the most recent call.
    projection: Ortho2d,

    /// Projection in force when the current frame began.
    frame_projection: Ortho2d,
}

/// One visible draw with the projection that applies to it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedDraw<'a> {
    pub projection: Ortho2d,
    pub cmd: &'a DrawCmd,
}

/// A frame reduced to what reaches the screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFrame<'a> {
    /// Color of the last clear, if the frame cleared at all.
    pub clear: Option<Color>,
    /// `Points`/`LineStrip` commands after the last clear, in order.
    pub draws: Vec<ResolvedDraw<'a>>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops recorded commands, keeping allocated capacity and the projection.
    #[inline]
    pub fn begin_frame(&mut self) {
        self.items.clear();
        self.frame_projection = self.projection;
    }

    /// Returns commands in recording order.
    #[inline]
    pub fn commands(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current projection.
    #[inline]
    pub fn projection(&self) -> Ortho2d {
        self.projection
    }

    /// Resolves clears and projection changes into the visible draw list.
    pub fn resolve(&self) -> ResolvedFrame<'_> {
        let mut projection = self.frame_projection;
        let mut frame = ResolvedFrame { clear: None, draws: Vec::new() };

        for cmd in &self.items {
            match cmd {
                DrawCmd::SetProjection(p) => projection = *p,
                DrawCmd::Clear(color) => {
                    frame.clear = Some(*color);
                    frame.draws.clear();
                }
                DrawCmd::Points(_) | DrawCmd::LineStrip(_) => {
                    frame.draws.push(ResolvedDraw { projection, cmd });
                }
            }
        }

        frame
    }
}

impl Canvas for DrawList {
    fn set_projection(&mut self, projection: Ortho2d) {
        if !projection.is_valid() {
            log::warn!("ignoring degenerate projection {projection:?}");
            return;
        }
        self.projection = projection;
        self.items.push(DrawCmd::SetProjection(projection));
    }

    fn clear(&mut self, color: Color) {
        self.items.push(DrawCmd::Clear(color));
    }

    fn draw_points(&mut self, vertices: &[Vertex], size: f32) {
        if vertices.is_empty() {
            return;
        }
        self.items.push(DrawCmd::Points(PointsCmd {
            vertices: vertices.to_vec(),
            size,
        }));
    }

    fn draw_line_strip(&mut self, vertices: &[Vertex], width: f32) {
        if vertices.is_empty() {
            return;
        }
        self.items.push(DrawCmd::LineStrip(LineStripCmd {
            vertices: vertices.to_vec(),
            width,
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;

    fn v(x: f32, y: f32) -> Vertex {
        Vertex::new(Vec2::new(x, y), Color::WHITE)
    }

    // ── recording ─────────────────────────────────────────────────────────

    #[test]
    fn records_in_call_order() {
        let mut dl = DrawList::new();
        dl.clear(Color::BLACK);
        dl.draw_points(&[v(0.0, 0.0)], 5.0);
        dl.draw_line_strip(&[v(0.0, 0.0), v(1.0, 1.0)], 1.0);

        let kinds: Vec<&str> = dl
            .commands()
            .iter()
            .map(|c| match c {
                DrawCmd::SetProjection(_) => "projection",
                DrawCmd::Clear(_) => "clear",
                DrawCmd::Points(_) => "points",
                DrawCmd::LineStrip(_) => "strip",
            })
            .collect();
        assert_eq!(kinds, vec!["clear", "points", "strip"]);
    }

    #[test]
    fn empty_batches_are_not_recorded() {
        let mut dl = DrawList::new();
        dl.draw_points(&[], 5.0);
        dl.draw_line_strip(&[], 1.0);
        assert!(dl.is_empty());
    }

    #[test]
    fn begin_frame_keeps_projection() {
        let mut dl = DrawList::new();
        let plot = Ortho2d::new(0.0, 15.0, 1.5, -1.5);
        dl.set_projection(plot);
        dl.draw_points(&[v(1.0, 1.0)], 2.0);

        dl.begin_frame();

        assert!(dl.is_empty());
        assert_eq!(dl.projection(), plot);
    }

    // ── resolve ───────────────────────────────────────────────────────────

    #[test]
    fn clear_discards_earlier_draws() {
        let mut dl = DrawList::new();
        dl.draw_points(&[v(0.0, 0.0)], 5.0);
        dl.clear(Color::WHITE);
        dl.draw_line_strip(&[v(0.0, 0.0), v(1.0, 0.0)], 1.0);

        let frame = dl.resolve();
        assert_eq!(frame.clear, Some(Color::WHITE));
        assert_eq!(frame.draws.len(), 1);
        assert!(matches!(frame.draws[0].cmd, DrawCmd::LineStrip(_)));
    }

    #[test]
    fn draws_carry_projection_in_force() {
        let mut dl = DrawList::new();
        let plot = Ortho2d::new(0.0, 15.0, 1.5, -1.5);
        dl.draw_points(&[v(0.0, 0.0)], 5.0);
        dl.set_projection(plot);
        dl.draw_points(&[v(0.0, 0.0)], 5.0);

        let frame = dl.resolve();
        assert_eq!(frame.clear, None);
        assert_eq!(frame.draws[0].projection, Ortho2d::default());
        assert_eq!(frame.draws[1].projection, plot);
    }

    #[test]
    fn projection_set_in_previous_frame_applies() {
        let mut dl = DrawList::new();
        let plot = Ortho2d::new(0.0, 15.0, 1.5, -1.5);
        dl.set_projection(plot);
        dl.begin_frame();
        dl.draw_points(&[v(0.0, 0.0)], 5.0);

        assert_eq!(dl.resolve().draws[0].projection, plot);
    }

    #[test]
    fn degenerate_projection_is_ignored() {
        let mut dl = DrawList::new();
        let plot = Ortho2d::new(0.0, 15.0, 1.5, -1.5);
        dl.set_projection(plot);
        dl.set_projection(Ortho2d::new(2.0, 2.0, 1.0, -1.0));
        dl.set_projection(Ortho2d::new(0.0, 1.0, 3.0, 3.0));

        assert_eq!(dl.projection(), plot);
        assert_eq!(dl.commands(), &[DrawCmd::SetProjection(plot)]);
    }
}
