use std::collections::BTreeMap;

use super::model::{Cell, EnergyDataset, YearRecord};

// ---------------------------------------------------------------------------
// Range filter: inclusive year bounds plus optional column projection
// ---------------------------------------------------------------------------

/// Year bounds and projection to apply to a dataset.
///
/// Every part is optional; an empty filter returns an unchanged copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeFilter {
    pub start: Option<i64>,
    pub end: Option<i64>,
    pub column: Option<String>,
}

impl RangeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inclusive lower bound.
    pub fn from_year(mut self, year: i64) -> Self {
        self.start = Some(year);
        self
    }

    /// Inclusive upper bound.
    pub fn to_year(mut self, year: i64) -> Self {
        self.end = Some(year);
        self
    }

    /// Keep only `Year` and `column`.
    pub fn column(mut self, column: &str) -> Self {
        self.column = Some(column.to_string());
        self
    }

    fn keeps(&self, year: i64) -> bool {
        self.start.map_or(true, |s| year >= s) && self.end.map_or(true, |e| year <= e)
    }

    /// Produce the filtered dataset. Bounds are evaluated before projection.
    ///
    /// Projecting a column the dataset lacks yields rows where that column
    /// is [`Cell::Missing`].
    pub fn apply(&self, dataset: &EnergyDataset) -> EnergyDataset {
        let rows = dataset.records().iter().filter(|r| self.keeps(r.year));

        match &self.column {
            None => {
                EnergyDataset::from_sorted(dataset.columns().to_vec(), rows.cloned().collect())
            }
            Some(column) => {
                let records = rows
                    .map(|r| {
                        let cell = r.values.get(column).cloned().unwrap_or(Cell::Missing);
                        let mut values = BTreeMap::new();
                        values.insert(column.clone(), cell);
                        YearRecord { year: r.year, values }
                    })
                    .collect();
                EnergyDataset::from_sorted(vec![column.clone()], records)
            }
        }
    }
}

/// Convenience form of [`RangeFilter`].
pub fn filter(
    dataset: &EnergyDataset,
    year_start: Option<i64>,
    year_end: Option<i64>,
    column: Option<&str>,
) -> EnergyDataset {
    RangeFilter {
        start: year_start,
        end: year_end,
        column: column.map(str::to_string),
    }
    .apply(dataset)
}
