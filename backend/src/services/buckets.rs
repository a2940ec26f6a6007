//! Discrete intensity buckets for heatmap cell colouring.

use serde::{Deserialize, Serialize};

/// Number of buckets that represent non-zero activity.
pub const ACTIVE_BUCKET_COUNT: usize = 5;

/// Ordinal severity bucket of a heatmap cell.
///
/// `NoActivity` is reserved for an intensity of exactly zero and is kept
/// distinct from `VeryLow` (low but non-zero).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntensityBucket {
    NoActivity = 0,
    VeryLow = 1,
    Low = 2,
    Medium = 3,
    High = 4,
    VeryHigh = 5,
}

/// The active buckets from lowest to highest, in legend order.
pub const ACTIVE_BUCKETS: [IntensityBucket; ACTIVE_BUCKET_COUNT] = [
    IntensityBucket::VeryLow,
    IntensityBucket::Low,
    IntensityBucket::Medium,
    IntensityBucket::High,
    IntensityBucket::VeryHigh,
];

impl IntensityBucket {
    /// Bucket number: 0 for no activity, 1..=5 otherwise.
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Intensity interval `[lower, upper)` covered by this bucket.
    ///
    /// The top bucket also includes `1.0`. `NoActivity` covers only the
    /// single point `0.0` and reports `(0.0, 0.0)`.
    pub fn range(&self) -> (f64, f64) {
        match self {
            IntensityBucket::NoActivity => (0.0, 0.0),
            active => {
                let step = 1.0 / ACTIVE_BUCKET_COUNT as f64;
                let position = (active.index() - 1) as f64;
                (position * step, (position + 1.0) * step)
            }
        }
    }

    pub fn is_active(&self) -> bool {
        *self != IntensityBucket::NoActivity
    }
}

/// Map a normalized intensity in `[0, 1]` to its bucket.
///
/// `[0, 0.2) -> 1`, `[0.2, 0.4) -> 2`, ... `[0.8, 1.0] -> 5`, with exact zero
/// mapped to [`IntensityBucket::NoActivity`]. The index is clamped to the last
/// bucket so `1.0` lands in the top bucket. NaN carries no intensity and maps
/// to `NoActivity`.
pub fn bucket_for_intensity(intensity: f64) -> IntensityBucket {
    if intensity == 0.0 || intensity.is_nan() {
        return IntensityBucket::NoActivity;
    }

    // Negative intensities saturate to 0 on the cast.
    let index = ((intensity * ACTIVE_BUCKET_COUNT as f64).floor() as usize)
        .min(ACTIVE_BUCKET_COUNT - 1);
    ACTIVE_BUCKETS[index]
}
