//! Sketchpad studio: the concrete scenes and their launcher.

pub mod scenes;

use sketchpad_engine::core::{Scene, SceneConfig};
use sketchpad_engine::device::GpuInit;
use sketchpad_engine::logging::{init_logging, LoggingConfig};
use sketchpad_engine::window::Runtime;

/// Initializes logging, runs `scene` and converts the outcome to an exit.
///
/// Returns normally (exit code 0) when the window is closed; exits with 1
/// after logging the error chain when the runtime fails.
pub fn launch<S>(config: SceneConfig, scene: S)
where
    S: Scene + 'static,
{
    init_logging(LoggingConfig::default());

    if let Err(err) = Runtime::run(config, GpuInit::default(), scene) {
        log::error!("sketchpad runtime error: {err:#}");
        std::process::exit(1);
    }
}
