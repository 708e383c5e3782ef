use crate::canvas::Canvas;
use crate::coords::Ortho2d;
use crate::draw;

use super::ctx::FrameCtx;

/// Hooks a scene implements to be driven by the runtime.
///
/// Call order: `setup` once, then per frame `handle_input`, `update`,
/// `render`. Every hook has a default, so a unit struct is already a valid
/// (blank) scene.
pub trait Scene {
    /// Called once before the first frame. Installs the scene's projection.
    fn setup(&mut self, canvas: &mut dyn Canvas) {
        canvas.set_projection(Ortho2d::normalized_y_down());
    }

    /// Consumes this frame's input batch.
    fn handle_input(&mut self, ctx: &FrameCtx<'_>) {
        let _ = ctx;
    }

    /// Per-frame state mutation.
    fn update(&mut self, ctx: &FrameCtx<'_>) {
        let _ = ctx;
    }

    /// Records this frame's draw calls.
    fn render(&mut self, canvas: &mut dyn Canvas) {
        draw::prepare_render(canvas);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCmd, DrawList};
    use crate::paint::Color;

    struct Blank;

    impl Scene for Blank {}

    #[test]
    fn default_setup_uses_normalized_y_down() {
        let mut dl = DrawList::new();
        Blank.setup(&mut dl);
        assert_eq!(dl.projection(), Ortho2d::new(-1.0, 1.0, -1.0, 1.0));
    }

    #[test]
    fn default_render_only_clears() {
        let mut dl = DrawList::new();
        Blank.render(&mut dl);
        assert_eq!(dl.commands(), &[DrawCmd::Clear(Color::BLACK)]);
    }
}
