//! Optional upstream derivation of heatmap intensities.
//!
//! The bucketizer consumes intensities as given. Callers that only hold raw
//! magnitudes can derive them here: each cell's magnitude divided by the
//! largest magnitude of its category across all periods.

use std::collections::HashMap;

use crate::models::{HeatmapCell, ViewMode};

/// Return a copy of `cells` with intensities normalized per category.
///
/// A category whose largest magnitude is 0 (or lower) gets intensity 0 for
/// every cell. Cell order is preserved.
pub fn normalize_by_category_max(cells: &[HeatmapCell], view_mode: ViewMode) -> Vec<HeatmapCell> {
    let mut category_max: HashMap<&str, f64> = HashMap::new();
    for cell in cells {
        let magnitude = view_mode.magnitude(cell);
        let entry = category_max.entry(cell.category.as_str()).or_insert(0.0);
        *entry = entry.max(magnitude);
    }

    cells
        .iter()
        .map(|cell| {
            let max = category_max
                .get(cell.category.as_str())
                .copied()
                .unwrap_or(0.0);
            let intensity = if max > 0.0 {
                (view_mode.magnitude(cell) / max).clamp(0.0, 1.0)
            } else {
                0.0
            };
            HeatmapCell {
                intensity,
                ..cell.clone()
            }
        })
        .collect()
}
