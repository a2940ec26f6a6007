//! Input snapshots supplied to the pipeline on every render cycle.

pub mod sales;
pub mod snapshot;


pub use sales::{HeatmapCell, Magnitudes, PeriodSalesRecord, ViewMode};
pub use snapshot::{parse_heatmap_snapshot_str, parse_period_records_str, HeatmapSnapshot};
