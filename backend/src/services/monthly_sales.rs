//! Monthly bar chart view builder.

use crate::models::{PeriodSalesRecord, ViewMode};
use crate::routes::monthly_sales::{MonthlyBar, MonthlySalesChart};

use super::aggregation::{compute_period_averages, compute_sales_totals};
use super::scaling::LinearScale;

/// Build the monthly bar chart view for one view mode.
///
/// Bars keep the caller's record order. Averages divide by `period_count`
/// (the cycle length) rather than by the number of records.
pub fn build_monthly_sales_chart(
    records: &[PeriodSalesRecord],
    view_mode: ViewMode,
    period_count: u32,
) -> MonthlySalesChart {
    let scale = LinearScale::for_view(records, view_mode);

    let bars = records
        .iter()
        .map(|record| {
            let magnitude = view_mode.magnitude(record);
            MonthlyBar {
                period: record.period.clone(),
                quantity: record.quantity,
                value: record.value,
                order_count: record.order_count,
                magnitude,
                percentage: scale.percentage(magnitude),
            }
        })
        .collect();

    let totals = compute_sales_totals(records);
    let averages = compute_period_averages(&totals, period_count);

    log::debug!(
        "Built monthly sales chart: {} bars, view={}, scale_max={}",
        records.len(),
        view_mode,
        scale.max()
    );

    MonthlySalesChart {
        view_mode,
        bars,
        totals,
        averages,
        is_empty: records.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<PeriodSalesRecord> {
        vec![
            PeriodSalesRecord::new("Jan", 10.0, 100.0, 2),
            PeriodSalesRecord::new("Feb", 40.0, 200.0, 3),
            PeriodSalesRecord::new("Mar", 20.0, 0.0, 0),
        ]
    }

    #[test]
    fn test_build_chart_value_mode() {
        let chart = build_monthly_sales_chart(&sample_records(), ViewMode::Value, 12);

        assert_eq!(chart.view_mode, ViewMode::Value);
        assert!(!chart.is_empty);
        let percentages: Vec<f64> = chart.bars.iter().map(|b| b.percentage).collect();
        assert_eq!(percentages, vec![50.0, 100.0, 0.0]);
        assert_eq!(chart.totals.total_value, 300.0);
        assert_eq!(chart.totals.average_order_value, 60.0);
        assert_eq!(chart.averages.value_per_period, 25.0);
    }

    #[test]
    fn test_build_chart_quantity_mode() {
        let chart = build_monthly_sales_chart(&sample_records(), ViewMode::Quantity, 12);

        let percentages: Vec<f64> = chart.bars.iter().map(|b| b.percentage).collect();
        assert_eq!(percentages, vec![25.0, 100.0, 50.0]);
        assert_eq!(chart.bars[1].magnitude, 40.0);
        assert_eq!(chart.averages.quantity_per_period, 70.0 / 12.0);
    }

    #[test]
    fn test_build_chart_preserves_order() {
        let records = vec![
            PeriodSalesRecord::new("Dec", 1.0, 1.0, 1),
            PeriodSalesRecord::new("Jan", 2.0, 2.0, 1),
        ];
        let chart = build_monthly_sales_chart(&records, ViewMode::Value, 12);

        assert_eq!(chart.bars[0].period, "Dec");
        assert_eq!(chart.bars[1].period, "Jan");
    }

    #[test]
    fn test_build_chart_empty() {
        let chart = build_monthly_sales_chart(&[], ViewMode::Value, 12);

        assert!(chart.is_empty);
        assert!(chart.bars.is_empty());
        assert_eq!(chart.totals.total_orders, 0);
        assert_eq!(chart.averages.value_per_period, 0.0);
    }

    #[test]
    fn test_build_chart_all_zero_values() {
        let records = vec![
            PeriodSalesRecord::new("Jan", 0.0, 0.0, 0),
            PeriodSalesRecord::new("Feb", 0.0, 0.0, 0),
        ];
        let chart = build_monthly_sales_chart(&records, ViewMode::Value, 12);

        assert!(chart.bars.iter().all(|b| b.percentage == 0.0));
        assert_eq!(chart.totals.average_order_value, 0.0);
    }
}
