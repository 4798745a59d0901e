use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{0}'")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse config file '{0}'")]
    Json(PathBuf, #[source] serde_json::Error),
}

/// Viewer settings, read from an optional JSON file. Missing keys take
/// their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    /// Station CSV loaded at startup.
    pub stations_path: PathBuf,
    pub window_size: [f32; 2],
    pub permanent_palette_size: usize,
    pub temporary_palette_size: usize,
    /// Start with timeline filtering switched on.
    pub timeline_enabled: bool,
    /// Network code to show alone after loading; all networks otherwise.
    pub only_network: Option<String>,
    pub marker_radius: f32,
    /// How close (in pixels) a click must land to open a station popup.
    pub pick_radius_px: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            stations_path: PathBuf::from("stations.csv"),
            window_size: [1200.0, 800.0],
            permanent_palette_size: 8,
            temporary_palette_size: 6,
            timeline_enabled: false,
            only_network: None,
            marker_radius: 4.0,
            pick_radius_px: 8.0,
        }
    }
}

impl ViewerConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        serde_json::from_str(&text).map_err(|e| ConfigError::Json(path.to_path_buf(), e))
    }
}
