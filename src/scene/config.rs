use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::{Canvas, Rgba};
use crate::foundation::error::{MondriError, MondriResult};
use crate::scene::palette::classic_colors;

fn default_depth() -> u32 {
    3
}

fn default_palette() -> Vec<Rgba> {
    classic_colors()
}

/// Startup configuration for scene generation.
///
/// Supplied once by the host (programmatically or as JSON);
/// [`crate::SceneController::regenerate`] reuses the same configuration.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SceneConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Base recursion depth for the top-level grid.
    #[serde(default = "default_depth")]
    pub depth: u32,
    /// Colors tiles draw their fills from.
    #[serde(default = "default_palette")]
    pub palette: Vec<Rgba>,
    /// Seed for the scene's random source; OS entropy when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            depth: default_depth(),
            palette: default_palette(),
            seed: None,
        }
    }
}

impl SceneConfig {
    /// Validate configuration invariants.
    pub fn validate(&self) -> MondriResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(MondriError::validation("width/height must be > 0"));
        }
        if self.depth == 0 {
            return Err(MondriError::validation("depth must be >= 1"));
        }
        if self.palette.is_empty() {
            return Err(MondriError::validation("palette must be non-empty"));
        }
        Ok(())
    }

    /// Load and validate a configuration from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> MondriResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read scene config '{}'", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .map_err(|e| MondriError::serde(format!("parse scene config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// The configured canvas.
    pub fn canvas(&self) -> MondriResult<Canvas> {
        Canvas::new(self.width, self.height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
