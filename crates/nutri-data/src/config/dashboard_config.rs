//! Dashboard configuration

use std::path::{Path, PathBuf};
use serde::{Serialize, Deserialize};

use super::null_handling::NullConfig;
use crate::DataError;

/// Default location of the configuration file, relative to the working directory
pub const CONFIG_FILE_NAME: &str = "nutrivis.json";

/// Configuration for the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Path to the nutrition CSV file
    pub data_path: PathBuf,

    /// Path to the image shown on the home page
    pub image_path: PathBuf,

    /// Null handling configuration
    pub null_config: NullConfig,

    /// Number of equal-width bins in the calorie histogram
    pub histogram_bins: usize,

    /// Number of rows shown in the sample data preview
    pub preview_rows: usize,

    /// Bootstrap resamples for bar chart confidence intervals
    pub bootstrap_samples: usize,

    /// Seed for the bootstrap RNG so intervals are stable across redraws
    pub bootstrap_seed: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/cleaned_starbucks.csv"),
            image_path: PathBuf::from("assets/starbucks.png"),
            null_config: NullConfig::default(),
            histogram_bins: 20,
            preview_rows: 5,
            bootstrap_samples: 1000,
            bootstrap_seed: 0,
        }
    }
}

impl DashboardConfig {
    /// Parse a configuration from JSON text
    pub fn from_json(text: &str) -> Result<Self, DataError> {
        serde_json::from_str(text).map_err(|e| DataError::Config(e.to_string()))
    }

    /// Serialize the configuration to pretty JSON
    pub fn to_json(&self) -> Result<String, DataError> {
        serde_json::to_string_pretty(self).map_err(|e| DataError::Config(e.to_string()))
    }

    /// Load the configuration file if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> Result<Self, DataError> {
        if !path.exists() {
            tracing::debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        tracing::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Get the data file name
    pub fn data_file_name(&self) -> String {
        self.data_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown.csv")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.histogram_bins, 20);
        assert_eq!(config.preview_rows, 5);
        assert_eq!(config.data_file_name(), "cleaned_starbucks.csv");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = DashboardConfig::from_json(r#"{ "preview_rows": 10 }"#).unwrap();
        assert_eq!(config.preview_rows, 10);
        assert_eq!(config.histogram_bins, 20);
        assert_eq!(config.null_config, NullConfig::default());
    }

    #[test]
    fn test_json_round_trip() {
        let mut config = DashboardConfig::default();
        config.data_path = PathBuf::from("other.csv");
        config.bootstrap_seed = 7;
        let text = config.to_json().unwrap();
        assert_eq!(DashboardConfig::from_json(&text).unwrap(), config);
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let err = DashboardConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, DataError::Config(_)));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = DashboardConfig::load_or_default(Path::new("does/not/exist.json")).unwrap();
        assert_eq!(config, DashboardConfig::default());
    }
}
