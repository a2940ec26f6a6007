use serde::{Deserialize, Serialize};

/// Sales recorded for one calendar period (monthly chart input).
///
/// Records are supplied in chronological order by the caller and are never
/// re-sorted by the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSalesRecord {
    #[serde(alias = "month")]
    pub period: String,
    pub quantity: f64,
    pub value: f64,
    #[serde(alias = "ordersCount")]
    pub order_count: u64,
}

impl PeriodSalesRecord {
    pub fn new(period: impl Into<String>, quantity: f64, value: f64, order_count: u64) -> Self {
        Self {
            period: period.into(),
            quantity,
            value,
            order_count,
        }
    }
}

/// Sales for one (period, category) pair of the heatmap.
///
/// `intensity` is pre-normalized to `[0, 1]` upstream. A missing pair in the
/// dataset means zero activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapCell {
    #[serde(alias = "month")]
    pub period: String,
    #[serde(alias = "productName")]
    pub category: String,
    pub quantity: f64,
    pub value: f64,
    pub intensity: f64,
}

impl HeatmapCell {
    pub fn new(
        period: impl Into<String>,
        category: impl Into<String>,
        quantity: f64,
        value: f64,
        intensity: f64,
    ) -> Self {
        Self {
            period: period.into(),
            category: category.into(),
            quantity,
            value,
            intensity,
        }
    }
}

/// Access to the two magnitudes a chart can be scaled on.
pub trait Magnitudes {
    fn quantity(&self) -> f64;
    fn value(&self) -> f64;
}

impl Magnitudes for PeriodSalesRecord {
    fn quantity(&self) -> f64 {
        self.quantity
    }

    fn value(&self) -> f64 {
        self.value
    }
}

impl Magnitudes for HeatmapCell {
    fn quantity(&self) -> f64 {
        self.quantity
    }

    fn value(&self) -> f64 {
        self.value
    }
}

/// Which magnitude drives a view.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Quantity,
    Value,
}

impl ViewMode {
    /// Select the magnitude this mode displays.
    pub fn magnitude<M: Magnitudes + ?Sized>(&self, item: &M) -> f64 {
        match self {
            ViewMode::Quantity => item.quantity(),
            ViewMode::Value => item.value(),
        }
    }

    /// Default mode of the monthly bar chart.
    pub fn monthly_default() -> Self {
        ViewMode::Value
    }

    /// Default mode of the sales heatmap.
    pub fn heatmap_default() -> Self {
        ViewMode::Quantity
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Quantity => "quantity",
            ViewMode::Value => "value",
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quantity" => Ok(ViewMode::Quantity),
            "value" => Ok(ViewMode::Value),
            other => Err(format!("Unknown view mode: {}", other)),
        }
    }
}
