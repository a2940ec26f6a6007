//! Heatmap snapshot and JSON decoding of caller-supplied payloads.

use serde::{Deserialize, Serialize};

use super::sales::{HeatmapCell, PeriodSalesRecord};
use crate::error::{ChartError, ChartResult};

/// Heatmap input: sparse cells plus the row and column axes to iterate.
///
/// The axes drive the grid independently of which cells carry data, so a
/// category with no sales still gets a row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeatmapSnapshot {
    #[serde(alias = "data")]
    pub cells: Vec<HeatmapCell>,
    #[serde(alias = "products")]
    pub categories: Vec<String>,
    #[serde(alias = "months")]
    pub periods: Vec<String>,
}

impl HeatmapSnapshot {
    pub fn new(cells: Vec<HeatmapCell>, categories: Vec<String>, periods: Vec<String>) -> Self {
        Self {
            cells,
            categories,
            periods,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Parse a JSON array of period records.
///
/// Errors carry the JSON path of the offending field, e.g. `[2].quantity`.
pub fn parse_period_records_str(json: &str) -> ChartResult<Vec<PeriodSalesRecord>> {
    let de = &mut serde_json::Deserializer::from_str(json);
    let records: Vec<PeriodSalesRecord> = serde_path_to_error::deserialize(&mut *de)?;
    de.end().map_err(|e| ChartError::parse(".", e.to_string()))?;
    log::debug!("Parsed {} period records", records.len());
    Ok(records)
}

/// Parse a JSON heatmap snapshot (`cells`, `categories`, `periods`).
pub fn parse_heatmap_snapshot_str(json: &str) -> ChartResult<HeatmapSnapshot> {
    let de = &mut serde_json::Deserializer::from_str(json);
    let snapshot: HeatmapSnapshot = serde_path_to_error::deserialize(&mut *de)?;
    de.end().map_err(|e| ChartError::parse(".", e.to_string()))?;
    log::debug!(
        "Parsed heatmap snapshot: {} cells, {} categories, {} periods",
        snapshot.cells.len(),
        snapshot.categories.len(),
        snapshot.periods.len()
    );
    Ok(snapshot)
}
