//! Aggregator: totals and averages over period records.

use crate::models::PeriodSalesRecord;
use crate::routes::monthly_sales::{PeriodAverages, SalesTotals};

/// Compute totals and the average order value over a sequence of period records.
///
/// Empty input yields all-zero totals. The average order value falls back to
/// `0.0` when no orders were recorded.
pub fn compute_sales_totals(records: &[PeriodSalesRecord]) -> SalesTotals {
    let total_quantity: f64 = records.iter().map(|r| r.quantity).sum();
    let total_value: f64 = records.iter().map(|r| r.value).sum();
    let total_orders = records
        .iter()
        .map(|r| r.order_count)
        .fold(0u64, u64::saturating_add);

    let average_order_value = if total_orders > 0 {
        total_value / total_orders as f64
    } else {
        0.0
    };

    SalesTotals {
        total_quantity,
        total_value,
        total_orders,
        average_order_value,
    }
}

/// Average the totals over a full cycle of `period_count` periods.
///
/// The divisor is the cycle length (e.g. 12 months), not the number of
/// records, so a partial year is still averaged over the whole year.
/// A zero `period_count` yields zero averages.
pub fn compute_period_averages(totals: &SalesTotals, period_count: u32) -> PeriodAverages {
    if period_count == 0 {
        return PeriodAverages {
            period_count,
            value_per_period: 0.0,
            quantity_per_period: 0.0,
        };
    }

    let divisor = period_count as f64;
    PeriodAverages {
        period_count,
        value_per_period: totals.total_value / divisor,
        quantity_per_period: totals.total_quantity / divisor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_sales_totals_empty() {
        let totals = compute_sales_totals(&[]);

        assert_eq!(totals.total_quantity, 0.0);
        assert_eq!(totals.total_value, 0.0);
        assert_eq!(totals.total_orders, 0);
        assert_eq!(totals.average_order_value, 0.0);
    }

    #[test]
    fn test_compute_sales_totals_average_order_value() {
        let records = vec![
            PeriodSalesRecord::new("Jan", 1.0, 100.0, 2),
            PeriodSalesRecord::new("Feb", 2.5, 200.0, 3),
        ];

        let totals = compute_sales_totals(&records);
        assert_eq!(totals.total_quantity, 3.5);
        assert_eq!(totals.total_value, 300.0);
        assert_eq!(totals.total_orders, 5);
        assert_eq!(totals.average_order_value, 60.0);
    }

    #[test]
    fn test_compute_sales_totals_zero_orders() {
        let records = vec![PeriodSalesRecord::new("Jan", 4.0, 250.0, 0)];

        let totals = compute_sales_totals(&records);
        assert_eq!(totals.total_value, 250.0);
        assert_eq!(totals.average_order_value, 0.0);
    }

    #[test]
    fn test_compute_sales_totals_saturates_order_count() {
        let records = vec![
            PeriodSalesRecord::new("Jan", 1.0, 100.0, u64::MAX),
            PeriodSalesRecord::new("Feb", 1.0, 100.0, 5),
        ];

        let totals = compute_sales_totals(&records);
        assert_eq!(totals.total_orders, u64::MAX);
        assert!(totals.average_order_value.is_finite());
    }

    #[test]
    fn test_compute_period_averages_uses_cycle_length() {
        let records = vec![
            PeriodSalesRecord::new("Jan", 6.0, 100.0, 1),
            PeriodSalesRecord::new("Feb", 6.0, 100.0, 1),
            PeriodSalesRecord::new("Mar", 12.0, 100.0, 1),
        ];

        let averages = compute_period_averages(&compute_sales_totals(&records), 12);
        assert_eq!(averages.period_count, 12);
        assert_eq!(averages.value_per_period, 25.0);
        assert_eq!(averages.quantity_per_period, 2.0);
    }

    #[test]
    fn test_compute_period_averages_zero_period_count() {
        let records = vec![PeriodSalesRecord::new("Jan", 6.0, 100.0, 1)];

        let averages = compute_period_averages(&compute_sales_totals(&records), 0);
        assert_eq!(averages.value_per_period, 0.0);
        assert_eq!(averages.quantity_per_period, 0.0);
    }
}
