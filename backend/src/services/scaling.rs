//! Linear scaling of magnitudes onto a 0–100 % bar length.

use crate::models::{Magnitudes, ViewMode};

/// Floor applied to the scale maximum so an empty or all-zero dataset never
/// divides by zero.
pub const MIN_SCALE_MAX: f64 = 1.0;

/// Largest magnitude of a dataset, floored at [`MIN_SCALE_MAX`].
pub fn scale_max<I>(magnitudes: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    magnitudes.into_iter().fold(MIN_SCALE_MAX, f64::max)
}

/// Express `magnitude` as a percentage of `max`.
///
/// Stays within `[0, 100]` whenever `0 <= magnitude <= max`, which holds for
/// any magnitude of the dataset `max` was computed from.
pub fn scale_percentage(magnitude: f64, max: f64) -> f64 {
    magnitude / max * 100.0
}

/// A linear scale fixed to one dataset and one view mode.
///
/// Quantity and value views each get their own scale; a maximum is never
/// shared across modes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LinearScale {
    max: f64,
}

impl LinearScale {
    pub fn from_magnitudes<I>(magnitudes: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        Self {
            max: scale_max(magnitudes),
        }
    }

    /// Build the scale for `mode` over a set of records.
    pub fn for_view<M: Magnitudes>(items: &[M], mode: ViewMode) -> Self {
        Self::from_magnitudes(items.iter().map(|item| mode.magnitude(item)))
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn percentage(&self, magnitude: f64) -> f64 {
        scale_percentage(magnitude, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PeriodSalesRecord;

    #[test]
    fn test_scale_max_empty_is_floored() {
        assert_eq!(scale_max(Vec::<f64>::new()), 1.0);
    }

    #[test]
    fn test_scale_max_all_zero_is_floored() {
        assert_eq!(scale_max(vec![0.0, 0.0, 0.0]), 1.0);
    }

    #[test]
    fn test_scale_max_below_floor() {
        assert_eq!(scale_max(vec![0.25, 0.5]), 1.0);
    }

    #[test]
    fn test_scale_max_picks_largest() {
        assert_eq!(scale_max(vec![3.0, 42.0, 7.5]), 42.0);
    }

    #[test]
    fn test_scale_percentage_at_max_is_exactly_100() {
        assert_eq!(scale_percentage(42.0, 42.0), 100.0);
        assert_eq!(scale_percentage(0.3, 0.3), 100.0);
    }

    #[test]
    fn test_scale_percentage_half() {
        assert_eq!(scale_percentage(50.0, 200.0), 25.0);
    }

    #[test]
    fn test_empty_dataset_percentage_is_finite() {
        let scale = LinearScale::from_magnitudes(Vec::<f64>::new());
        let pct = scale.percentage(0.0);
        assert!(pct.is_finite());
        assert_eq!(pct, 0.0);
    }

    #[test]
    fn test_for_view_uses_separate_maxima() {
        let records = vec![
            PeriodSalesRecord::new("Jan", 10.0, 5000.0, 1),
            PeriodSalesRecord::new("Feb", 40.0, 1000.0, 1),
        ];

        let by_quantity = LinearScale::for_view(&records, ViewMode::Quantity);
        let by_value = LinearScale::for_view(&records, ViewMode::Value);

        assert_eq!(by_quantity.max(), 40.0);
        assert_eq!(by_value.max(), 5000.0);
        assert_eq!(by_quantity.percentage(10.0), 25.0);
        assert_eq!(by_value.percentage(1000.0), 20.0);
    }
}
