use serde::{Deserialize, Serialize};

use crate::models::ViewMode;

// =========================================================
// Monthly sales chart types
// =========================================================

/// Totals over all records of a monthly chart.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SalesTotals {
    pub total_quantity: f64,
    pub total_value: f64,
    pub total_orders: u64,
    /// `total_value / total_orders`, or 0 without orders.
    pub average_order_value: f64,
}

/// Rates across a full cycle of periods.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PeriodAverages {
    pub period_count: u32,
    pub value_per_period: f64,
    pub quantity_per_period: f64,
}

/// One bar of the monthly chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyBar {
    pub period: String,
    pub quantity: f64,
    pub value: f64,
    pub order_count: u64,
    /// Magnitude selected by the chart's view mode.
    pub magnitude: f64,
    /// Bar length in `[0, 100]`.
    pub percentage: f64,
}

/// Complete monthly chart view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySalesChart {
    pub view_mode: ViewMode,
    pub bars: Vec<MonthlyBar>,
    pub totals: SalesTotals,
    pub averages: PeriodAverages,
    pub is_empty: bool,
}

/// View identifier for the monthly chart payload.
pub const MONTHLY_SALES_CHART: &str = "monthly_sales_chart";
