//! GPU rendering subsystem.
//!
//! Renderers consume a recorded `DrawList` and issue GPU commands via wgpu.
//! Each renderer owns its GPU resources (pipelines, buffers).
//!
//! Convention:
//! - recorded geometry is in scene space
//! - scene → clip conversion happens on the CPU with the `Ortho2d` in force
//! - sizes (point size, line width) are in physical pixels

mod ctx;
pub mod primitives;

pub use ctx::{RenderCtx, RenderTarget};
