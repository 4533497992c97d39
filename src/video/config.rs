use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::{
    foundation::{
        color::Rgba8,
        core::{Canvas, Fps},
        error::{ModelPickError, ModelPickResult},
    },
    video::theme,
};

/// Fixed output configuration of the demo video.
///
/// Every field is optional in JSON; missing fields take the defaults (30 fps, 1280x720, the
/// page background colour).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct VideoConfig {
    /// Frame rate.
    pub fps: Fps,
    /// Output size in pixels.
    pub canvas: Canvas,
    /// Clear colour behind every scene.
    pub background: Rgba8,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            fps: Fps::default(),
            canvas: Canvas::default(),
            background: theme::VOID,
        }
    }
}

impl VideoConfig {
    /// Check fps and canvas.
    pub fn validate(&self) -> ModelPickResult<()> {
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(ModelPickError::validation(
                "fps must have num>0 and den>0",
            ));
        }
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ModelPickError::validation(
                "canvas width/height must be > 0",
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(s: &str) -> ModelPickResult<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_path(path: &Path) -> ModelPickResult<Self> {
        let f = File::open(path)
            .with_context(|| format!("open video config '{}'", path.display()))?;
        let config: Self = serde_json::from_reader(BufReader::new(f))?;
        config.validate()?;
        tracing::debug!(path = %path.display(), ?config, "loaded video config");
        Ok(config)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/video/config.rs"]
mod tests;
