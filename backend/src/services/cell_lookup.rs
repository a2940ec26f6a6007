//! Resolution of `(period, category)` pairs against a sparse heatmap dataset.
//!
//! A missing pair is a normal outcome meaning "no sales", reported as `None`.
//! Both strategies below return identical results: on duplicate keys the
//! first cell in dataset order wins.

use std::collections::HashMap;

use crate::models::HeatmapCell;

/// Find the cell for `(period, category)` with a linear scan.
pub fn find_cell<'a>(
    cells: &'a [HeatmapCell],
    period: &str,
    category: &str,
) -> Option<&'a HeatmapCell> {
    cells
        .iter()
        .find(|cell| cell.period == period && cell.category == category)
}

/// Hash index over a borrowed dataset keyed by `(period, category)`.
#[derive(Debug, Clone, Default)]
pub struct CellIndex<'a> {
    cells: HashMap<(&'a str, &'a str), &'a HeatmapCell>,
}

impl<'a> CellIndex<'a> {
    pub fn build(cells: &'a [HeatmapCell]) -> Self {
        let mut index = HashMap::with_capacity(cells.len());
        for cell in cells {
            index
                .entry((cell.period.as_str(), cell.category.as_str()))
                .or_insert(cell);
        }
        Self { cells: index }
    }

    pub fn get(&self, period: &str, category: &str) -> Option<&'a HeatmapCell> {
        // Narrow the key lifetimes (HashMap is covariant in K) so borrowed
        // query strings can be used as the key.
        let cells: &HashMap<(&str, &str), &'a HeatmapCell> = &self.cells;
        cells.get(&(period, category)).copied()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Lookup strategy chosen from the dataset size.
#[derive(Debug, Clone)]
pub enum CellLookup<'a> {
    Scan(&'a [HeatmapCell]),
    Indexed(CellIndex<'a>),
}

impl<'a> CellLookup<'a> {
    /// Scan small datasets, index datasets larger than `index_threshold`.
    pub fn for_cells(cells: &'a [HeatmapCell], index_threshold: usize) -> Self {
        if cells.len() > index_threshold {
            CellLookup::Indexed(CellIndex::build(cells))
        } else {
            CellLookup::Scan(cells)
        }
    }

    pub fn get(&self, period: &str, category: &str) -> Option<&'a HeatmapCell> {
        match self {
            CellLookup::Scan(cells) => find_cell(*cells, period, category),
            CellLookup::Indexed(index) => index.get(period, category),
        }
    }

    pub fn is_indexed(&self) -> bool {
        matches!(self, CellLookup::Indexed(_))
    }
}
