//! Time subsystem.
//!
//! Frame timing without coupling to the runtime:
//! - one `FrameClock` per render loop
//! - call `tick()` once per presented frame to obtain `FrameTime`
//! - a clock built with `with_max_fps` blocks inside `tick()` to cap the rate

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime, FPS_WINDOW};
