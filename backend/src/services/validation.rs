//! Optional contract checks for input snapshots.
//!
//! The pipeline does not require well-formedness checks to run; these
//! helpers let a caller inspect a snapshot before rendering it. Errors mark
//! values that break the input contract, warnings mark data that renders
//! but is probably not what the caller meant.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::{HeatmapSnapshot, PeriodSalesRecord};

/// Outcome of validating a snapshot.
///
/// Errors make `is_valid` false; warnings are informational.
///
/// # Examples
///
/// ```
/// use sales_viz::services::validation::ValidationResult;
///
/// let mut result = ValidationResult::new();
/// result.add_warning("Duplicate period label 'Jan'".to_string());
/// assert!(result.is_valid);
///
/// result.add_error("Record 'Feb' has negative quantity -1".to_string());
/// assert!(!result.is_valid);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Add an error and mark the result as invalid.
    pub fn add_error(&mut self, error: String) {
        log::warn!("Validation error: {}", error);
        self.is_valid = false;
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: String) {
        log::warn!("Validation warning: {}", warning);
        self.warnings.push(warning);
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

fn check_magnitude(result: &mut ValidationResult, subject: &str, field: &str, value: f64) {
    if !value.is_finite() {
        result.add_error(format!("{} has non-finite {} {}", subject, field, value));
    } else if value < 0.0 {
        result.add_error(format!("{} has negative {} {}", subject, field, value));
    }
}

/// Validate monthly chart records.
///
/// Errors: negative or non-finite quantity/value.
/// Warnings: a period label that appears more than once.
pub fn validate_period_records(records: &[PeriodSalesRecord]) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for record in records {
        let subject = format!("Record '{}'", record.period);
        check_magnitude(&mut result, &subject, "quantity", record.quantity);
        check_magnitude(&mut result, &subject, "value", record.value);

        if !seen.insert(record.period.as_str()) {
            result.add_warning(format!("Duplicate period label '{}'", record.period));
        }
    }

    result
}

/// Validate a heatmap snapshot.
///
/// Errors: negative or non-finite quantity/value, intensity outside `[0, 1]`.
/// Warnings: duplicate `(period, category)` keys (only the first is
/// rendered), cells whose period or category is not on the axes (never
/// rendered).
pub fn validate_heatmap_snapshot(snapshot: &HeatmapSnapshot) -> ValidationResult {
    let mut result = ValidationResult::new();
    let periods: HashSet<&str> = snapshot.periods.iter().map(String::as_str).collect();
    let categories: HashSet<&str> = snapshot.categories.iter().map(String::as_str).collect();
    let mut seen: HashSet<(&str, &str)> = HashSet::new();

    for cell in &snapshot.cells {
        let subject = format!("Cell '{}'/'{}'", cell.category, cell.period);
        check_magnitude(&mut result, &subject, "quantity", cell.quantity);
        check_magnitude(&mut result, &subject, "value", cell.value);

        if !(0.0..=1.0).contains(&cell.intensity) {
            result.add_error(format!(
                "{} has intensity {} outside [0, 1]",
                subject, cell.intensity
            ));
        }

        if !seen.insert((cell.period.as_str(), cell.category.as_str())) {
            result.add_warning(format!("{} appears more than once", subject));
        }

        if !periods.contains(cell.period.as_str()) {
            result.add_warning(format!(
                "{} references unknown period '{}'",
                subject, cell.period
            ));
        }
        if !categories.contains(cell.category.as_str()) {
            result.add_warning(format!(
                "{} references unknown category '{}'",
                subject, cell.category
            ));
        }
    }

    result
}
