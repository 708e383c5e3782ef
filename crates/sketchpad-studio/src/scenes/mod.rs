//! Scene variants.
//!
//! Both implement `sketchpad_engine::core::Scene` and differ only in the
//! coordinate space they install and what they draw.

mod curve_plot;
mod sketch;

pub use curve_plot::CurvePlotScene;
pub use sketch::SketchScene;
