//! Core engine-facing contracts.
//!
//! Defines the interface between the runtime (platform loop) and scenes: the
//! `Scene` hooks, the per-frame context they receive, and the configuration
//! a scene is launched with.

mod config;
mod ctx;
mod scene;

pub use config::SceneConfig;
pub use ctx::FrameCtx;
pub use scene::Scene;
