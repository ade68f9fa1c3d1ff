//! JSON configuration for the picker.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::presets::{PresetSelector, DEFAULT_PRESETS};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// User-tunable picker settings. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HueWheelConfig {
    /// Preset colors as `#RRGGBB` strings, in segment order.
    pub presets: Vec<String>,
    /// Diameter of the handle marker.
    pub handle_diameter: f64,
    /// Width of the handle's white outline.
    pub handle_stroke_width: f64,
    /// Number of hue wedges drawn around the wheel.
    pub wedge_count: usize,
    /// Margin between the wheel bounds and the surrounding area.
    pub margin: f64,
}

impl Default for HueWheelConfig {
    fn default() -> Self {
        Self {
            presets: DEFAULT_PRESETS.iter().map(|hex| hex.to_string()).collect(),
            handle_diameter: 35.0,
            handle_stroke_width: 2.0,
            wedge_count: 360,
            margin: 16.0,
        }
    }
}

impl HueWheelConfig {
    /// Parse from a JSON string.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }

    /// Preset selector over the configured colors.
    pub fn preset_selector(&self) -> PresetSelector {
        PresetSelector::new(self.presets.clone())
    }
}
