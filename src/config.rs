use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for [AppConfig] loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// I/O operation error.
    #[error("I/O error: `{0}`")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for [AppConfig].
    #[error("invalid config JSON: `{0}`")]
    Json(#[from] serde_json::Error),
}

/// Tunables for the drawing session. Every field may be omitted from the
/// JSON file and falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Cells per side of the drawing grid.
    pub grid_size: usize,
    /// On-screen size of one cell, in pixels.
    pub cell_size: f32,
    /// Period of the prediction poll.
    pub poll_interval_ms: u64,
    /// Added to the cell under the pointer on each paint event.
    pub stroke: f64,
    /// Added to each of the eight surrounding cells.
    pub neighbor: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            grid_size: 28,
            cell_size: 20.0,
            poll_interval_ms: 800,
            stroke: 0.8,
            neighbor: 0.15,
        }
    }
}

impl AppConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn load_json(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg: AppConfig = serde_json::from_str(r#"{ "poll_interval_ms": 250 }"#).unwrap();
        assert_eq!(cfg.poll_interval(), Duration::from_millis(250));
        assert_eq!(cfg.grid_size, 28);
        assert_eq!(cfg.stroke, 0.8);
    }

    #[test]
    fn malformed_json_is_reported() {
        let path = std::env::temp_dir().join(format!("digit-scope-config-{}.json", std::process::id()));
        std::fs::write(&path, "{ not json").unwrap();
        let err = AppConfig::load_json(&path).unwrap_err();
        let _ = std::fs::remove_file(&path);
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
