//! Category × period heatmap grid builder.

use crate::models::{HeatmapSnapshot, ViewMode};
use crate::routes::heatmap::{HeatmapGridCell, HeatmapRow, SalesHeatmap};

use super::buckets::{bucket_for_intensity, IntensityBucket};
use super::cell_lookup::CellLookup;

/// Build the category × period heatmap grid.
///
/// Rows follow `snapshot.categories` and columns follow `snapshot.periods`,
/// both in caller order, whether or not cells exist for them. Datasets larger
/// than `index_threshold` are looked up through a hash index.
pub fn build_sales_heatmap(
    snapshot: &HeatmapSnapshot,
    view_mode: ViewMode,
    index_threshold: usize,
) -> SalesHeatmap {
    let lookup = CellLookup::for_cells(&snapshot.cells, index_threshold);

    let rows = snapshot
        .categories
        .iter()
        .map(|category| HeatmapRow {
            category: category.clone(),
            cells: snapshot
                .periods
                .iter()
                .map(|period| match lookup.get(period, category) {
                    Some(record) => HeatmapGridCell {
                        period: period.clone(),
                        category: category.clone(),
                        record: Some(record.clone()),
                        magnitude: Some(view_mode.magnitude(record)),
                        intensity: record.intensity,
                        bucket: bucket_for_intensity(record.intensity),
                    },
                    None => HeatmapGridCell {
                        period: period.clone(),
                        category: category.clone(),
                        record: None,
                        magnitude: None,
                        intensity: 0.0,
                        bucket: IntensityBucket::NoActivity,
                    },
                })
                .collect(),
        })
        .collect();

    log::debug!(
        "Built sales heatmap: {} categories x {} periods from {} cells (indexed={})",
        snapshot.categories.len(),
        snapshot.periods.len(),
        snapshot.cells.len(),
        lookup.is_indexed()
    );

    SalesHeatmap {
        view_mode,
        periods: snapshot.periods.clone(),
        rows,
        is_empty: snapshot.is_empty(),
    }
}
