//! Viewer configuration (shapez.yaml).
//!
//! Every field is optional; command-line flags override whatever the file
//! sets.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShapezError};
use crate::generate::DEFAULT_MAX_LAYERS;

/// The name of the configuration file.
pub const CONFIG_FILENAME: &str = "shapez.yaml";

/// Smallest and largest accepted zoom factor.
pub const MIN_SCALE: f32 = 0.25;
pub const MAX_SCALE: f32 = 1.0;

/// Configuration loaded from shapez.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Canvas edge length in pixels at full scale.
    pub size: u32,

    /// Zoom factor applied to `size`, clamped to 0.25..=1.0.
    pub scale: f32,

    /// Output directory for rendered images.
    pub output: PathBuf,

    /// Upper bound on layers for `shapez random`.
    pub layers: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: 512,
            scale: MAX_SCALE,
            output: PathBuf::from("dist"),
            layers: DEFAULT_MAX_LAYERS,
        }
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ShapezError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // serde_yaml rejects an empty document, treat it as all defaults
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| ShapezError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// Load `shapez.yaml` from `dir` if present, otherwise use defaults.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILENAME);
        if path.is_file() {
            log::debug!("loading config from {}", path.display());
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Canvas edge length after applying the clamped scale.
    pub fn canvas_size(&self) -> u32 {
        ((self.size as f32 * clamp_scale(self.scale)) as u32).max(1)
    }
}

/// Clamp a zoom factor into the supported range.
pub fn clamp_scale(scale: f32) -> f32 {
    if scale.is_nan() {
        return MAX_SCALE;
    }
    scale.clamp(MIN_SCALE, MAX_SCALE)
}
