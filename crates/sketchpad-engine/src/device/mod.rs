//! GPU device + surface management.
//!
//! Responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue for the window
//! - creating & configuring the double-buffered surface
//! - acquiring frames and mapping surface errors to recovery actions

mod gpu;
mod surface;

pub use gpu::{Gpu, GpuFrame, GpuInit, SurfaceErrorAction};
