//! Service layer for the visual-encoding pipeline.
//!
//! The primitives ([`aggregation`], [`scaling`], [`buckets`], [`cell_lookup`])
//! are pure and stateless. The view builders ([`monthly_sales`], [`heatmap`])
//! compose them into the data a rendering layer consumes.

pub mod aggregation;
pub mod buckets;
pub mod cell_lookup;
pub mod heatmap;
pub mod intensity;
pub mod monthly_sales;
pub mod scaling;
pub mod validation;



pub use aggregation::{compute_period_averages, compute_sales_totals};
pub use buckets::{bucket_for_intensity, IntensityBucket};
pub use cell_lookup::{find_cell, CellIndex, CellLookup};
pub use heatmap::build_sales_heatmap;
pub use intensity::normalize_by_category_max;
pub use monthly_sales::build_monthly_sales_chart;
pub use scaling::{scale_max, scale_percentage, LinearScale};
pub use validation::{validate_heatmap_snapshot, validate_period_records, ValidationResult};
