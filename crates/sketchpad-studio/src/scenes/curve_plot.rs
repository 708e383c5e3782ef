use sketchpad_engine::canvas::Canvas;
use sketchpad_engine::core::Scene;
use sketchpad_engine::draw;

/// Static plot of `sin` and `cos` over `[0, 15)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct CurvePlotScene;

impl CurvePlotScene {
    /// Horizontal bounds cover the sampled domain; vertical bounds leave a
    /// margin around the `[-1, 1]` range of both curves.
    pub const LEFT: f32 = 0.0;
    pub const RIGHT: f32 = 15.0;
    pub const TOP: f32 = 1.5;
    pub const BOTTOM: f32 = -1.5;
}

impl Scene for CurvePlotScene {
    fn setup(&mut self, canvas: &mut dyn Canvas) {
        draw::init_ortho(canvas, Self::LEFT, Self::RIGHT, Self::TOP, Self::BOTTOM);
    }

    fn render(&mut self, canvas: &mut dyn Canvas) {
        draw::prepare_render(canvas);
        draw::draw_graph(canvas);
    }
}
