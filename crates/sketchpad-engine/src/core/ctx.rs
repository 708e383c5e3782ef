use crate::coords::Viewport;
use crate::input::{InputFrame, InputState};
use crate::time::FrameTime;

/// Per-frame context passed to `Scene::handle_input` and `Scene::update`.
pub struct FrameCtx<'a> {
    /// Events received since the previous frame, in arrival order.
    pub input_frame: &'a InputFrame,
    /// Held buttons and pointer position.
    pub input: &'a InputState,
    pub time: FrameTime,
    /// Current window size in logical pixels.
    pub viewport: Viewport,
}
