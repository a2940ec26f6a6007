//! Public API surface of the pipeline.
//!
//! Input snapshots, output views and the primitives a rendering layer calls
//! directly. All data types derive Serialize/Deserialize.

pub use crate::config::ChartConfig;
pub use crate::error::{ChartError, ChartResult};
pub use crate::models::{HeatmapCell, HeatmapSnapshot, Magnitudes, PeriodSalesRecord, ViewMode};
pub use crate::routes::heatmap::{HeatmapGridCell, HeatmapRow, SalesHeatmap};
pub use crate::routes::monthly_sales::{MonthlyBar, MonthlySalesChart, PeriodAverages, SalesTotals};
pub use crate::services::buckets::{IntensityBucket, ACTIVE_BUCKETS, ACTIVE_BUCKET_COUNT};
pub use crate::services::cell_lookup::{CellIndex, CellLookup};
pub use crate::services::scaling::LinearScale;
pub use crate::services::validation::ValidationResult;

use crate::services::{heatmap, monthly_sales};

/// Build the monthly chart with the configured cycle length.
pub fn monthly_sales_chart(
    records: &[PeriodSalesRecord],
    view_mode: ViewMode,
    config: &ChartConfig,
) -> MonthlySalesChart {
    monthly_sales::build_monthly_sales_chart(records, view_mode, config.monthly.period_count)
}

/// Build the heatmap with the configured lookup threshold.
pub fn sales_heatmap(
    snapshot: &HeatmapSnapshot,
    view_mode: ViewMode,
    config: &ChartConfig,
) -> SalesHeatmap {
    heatmap::build_sales_heatmap(snapshot, view_mode, config.heatmap.index_threshold)
}
