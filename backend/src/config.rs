//! Chart configuration file support.
//!
//! Settings are read from a TOML file such as:
//!
//! ```toml
//! [monthly]
//! period_count = 12
//! default_view = "value"
//!
//! [heatmap]
//! default_view = "quantity"
//! index_threshold = 64
//! ```
//!
//! Every key is optional and falls back to the defaults shown above.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ChartError, ChartResult};
use crate::models::ViewMode;

/// Chart configuration from file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default)]
    pub monthly: MonthlyChartSettings,
    #[serde(default)]
    pub heatmap: HeatmapSettings,
}

/// Monthly bar chart settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyChartSettings {
    /// Cycle length used as the divisor of per-period averages.
    #[serde(default = "default_period_count")]
    pub period_count: u32,
    #[serde(default = "ViewMode::monthly_default")]
    pub default_view: ViewMode,
}

/// Heatmap settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapSettings {
    #[serde(default = "ViewMode::heatmap_default")]
    pub default_view: ViewMode,
    /// Cell count above which lookups go through a hash index.
    #[serde(default = "default_index_threshold")]
    pub index_threshold: usize,
}

fn default_period_count() -> u32 {
    12
}

fn default_index_threshold() -> usize {
    64
}

impl Default for MonthlyChartSettings {
    fn default() -> Self {
        Self {
            period_count: default_period_count(),
            default_view: ViewMode::monthly_default(),
        }
    }
}

impl Default for HeatmapSettings {
    fn default() -> Self {
        Self {
            default_view: ViewMode::heatmap_default(),
            index_threshold: default_index_threshold(),
        }
    }
}

impl ChartConfig {
    /// Load chart configuration from a TOML file.
    ///
    /// # Returns
    /// * `Ok(ChartConfig)` if the file was read, parsed and validated
    /// * `Err(ChartError::Configuration)` otherwise
    pub fn from_file<P: AsRef<Path>>(path: P) -> ChartResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            ChartError::configuration(format!("Failed to read config file: {}", e))
        })?;

        let config = Self::from_toml_str(&content)?;
        log::info!("Loaded chart config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Parse and validate chart configuration from TOML text.
    pub fn from_toml_str(content: &str) -> ChartResult<Self> {
        let config: ChartConfig = toml::from_str(content).map_err(|e| {
            ChartError::configuration(format!("Failed to parse config file: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Check settings the pipeline cannot work with.
    pub fn validate(&self) -> ChartResult<()> {
        if self.monthly.period_count == 0 {
            return Err(ChartError::configuration(
                "monthly.period_count must be greater than zero",
            ));
        }
        Ok(())
    }
}
