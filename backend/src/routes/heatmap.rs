use serde::{Deserialize, Serialize};

use crate::models::{HeatmapCell, ViewMode};
use crate::services::buckets::IntensityBucket;

// =========================================================
// Sales heatmap types
// =========================================================

/// One grid position of the heatmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapGridCell {
    pub period: String,
    pub category: String,
    /// Matching record, `None` when nothing was sold.
    pub record: Option<HeatmapCell>,
    /// Magnitude selected by the view mode, `None` when nothing was sold.
    pub magnitude: Option<f64>,
    pub intensity: f64,
    pub bucket: IntensityBucket,
}

impl HeatmapGridCell {
    pub fn has_sales(&self) -> bool {
        self.record.is_some()
    }
}

/// One category row across all periods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapRow {
    pub category: String,
    pub cells: Vec<HeatmapGridCell>,
}

/// Complete heatmap view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesHeatmap {
    pub view_mode: ViewMode,
    /// Column headers in caller order.
    pub periods: Vec<String>,
    pub rows: Vec<HeatmapRow>,
    pub is_empty: bool,
}

impl SalesHeatmap {
    /// Grid position at `(period, category)`, if both are on the axes.
    pub fn cell(&self, period: &str, category: &str) -> Option<&HeatmapGridCell> {
        self.rows
            .iter()
            .find(|row| row.category == category)?
            .cells
            .iter()
            .find(|cell| cell.period == period)
    }
}

/// View identifier for the heatmap payload.
pub const SALES_HEATMAP: &str = "sales_heatmap";
