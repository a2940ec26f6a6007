//! # Sales Visualization Backend
//!
//! Data-to-visual-encoding pipeline for the sales dashboard charts.
//!
//! This crate turns precomputed sales aggregates into the raw numbers a
//! rendering layer needs to draw two views: a monthly bar chart and a
//! category × period sales heatmap. It owns no presentation concerns
//! (layout, hover state, formatting); it only returns bar percentages,
//! intensity buckets, aggregate totals and per-cell lookups.
//!
//! ## Architecture
//!
//! - [`models`]: Input snapshots (period records, heatmap cells) and JSON parsing
//! - [`services`]: Aggregation, linear scaling, bucketing, cell lookup and view builders
//! - [`routes`]: Output view types consumed by the rendering layer
//! - [`api`]: Re-exports of the public types
//! - [`config`]: TOML chart configuration
//! - [`error`]: Error types for the configuration and parsing boundary
//!
//! ## Example
//!
//! ```
//! use sales_viz::api::{PeriodSalesRecord, ViewMode};
//! use sales_viz::services::monthly_sales::build_monthly_sales_chart;
//!
//! let records = vec![
//!     PeriodSalesRecord::new("Jan", 10.0, 100.0, 2),
//!     PeriodSalesRecord::new("Feb", 20.0, 200.0, 3),
//! ];
//! let chart = build_monthly_sales_chart(&records, ViewMode::Value, 12);
//!
//! assert_eq!(chart.bars[1].percentage, 100.0);
//! assert_eq!(chart.totals.average_order_value, 60.0);
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
