//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the single window, wires them to the GPU
//! layer, and drives a `core::Scene` once per paced frame.

mod runtime;

pub use runtime::Runtime;
