use sketchpad_engine::canvas::Canvas;
use sketchpad_engine::coords::Vec2;
use sketchpad_engine::core::{FrameCtx, Scene};
use sketchpad_engine::draw;
use sketchpad_engine::input::MouseButton;

/// Click-to-sketch polyline.
///
/// Every primary-button press appends the cursor position, converted to
/// normalized coordinates, to an append-only list. The list is drawn as point
/// markers plus a connecting line strip.
#[derive(Debug, Default, Clone)]
pub struct SketchScene {
    points: Vec<Vec2>,
}

impl SketchScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Points in click order.
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }
}

impl Scene for SketchScene {
    fn handle_input(&mut self, ctx: &FrameCtx<'_>) {
        // Minimized: there is no window to map clicks against.
        if !ctx.viewport.is_valid() {
            return;
        }

        for press in ctx.input_frame.presses(MouseButton::PRIMARY) {
            let point = ctx.viewport.pixel_to_ndc(press.x, press.y);
            log::debug!(
                "click at ({:.0}, {:.0}) -> ({:.3}, {:.3})",
                press.x,
                press.y,
                point.x,
                point.y
            );
            self.points.push(point);
        }
    }

    fn render(&mut self, canvas: &mut dyn Canvas) {
        draw::prepare_render(canvas);
        draw::draw_points(canvas, &self.points);
        draw::draw_lines(canvas, &self.points);
    }
}
