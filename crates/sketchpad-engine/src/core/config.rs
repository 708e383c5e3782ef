use anyhow::{ensure, Result};

/// Window and pacing configuration for one scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    /// Base window title; the runtime appends the measured frame rate.
    pub title: String,
    /// Initial inner size in logical pixels.
    pub width: u32,
    pub height: u32,
    /// Upper bound on frames per second.
    pub max_fps: u32,
}

impl SceneConfig {
    pub fn new(title: impl Into<String>, width: u32, height: u32, max_fps: u32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            max_fps,
        }
    }

    /// Checks the invariants the runtime relies on.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.width > 0 && self.height > 0,
            "window size must be non-zero, got {}x{}",
            self.width,
            self.height
        );
        ensure!(self.max_fps > 0, "max_fps must be positive");
        Ok(())
    }

    /// Title shown while running at `fps`.
    pub fn title_with_fps(&self, fps: f32) -> String {
        format!("{} ({:.2} fps)", self.title, fps)
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::new("sketchpad", 900, 600, 60)
    }
}
