use std::collections::BTreeMap;
use std::fmt;

use crate::error::{AnalysisError, Result};

/// Name of the index column every dataset must carry.
pub const YEAR_COLUMN: &str = "Year";

// ---------------------------------------------------------------------------
// Cell – a single value in a source column
// ---------------------------------------------------------------------------

/// A dynamically-typed cell, as read from the CSV.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    /// Anything that did not parse as a number; kept so errors can quote it.
    Text(String),
    Missing,
}

static MISSING: Cell = Cell::Missing;

impl Cell {
    /// Interpret a raw CSV field.
    ///
    /// Empty fields and the usual NA spellings become [`Cell::Missing`].
    pub fn parse(raw: &str) -> Self {
        let s = raw.trim();
        if s.is_empty() {
            return Cell::Missing;
        }
        match s {
            "NaN" | "nan" | "NA" | "N/A" | "null" | "NULL" => return Cell::Missing,
            _ => {}
        }
        match s.parse::<f64>() {
            Ok(v) if v.is_nan() => Cell::Missing,
            Ok(v) => Cell::Number(v),
            Err(_) => Cell::Text(s.to_string()),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Number(v) => write!(f, "{v}"),
            Cell::Text(s) => write!(f, "{s}"),
            Cell::Missing => write!(f, "<missing>"),
        }
    }
}

// ---------------------------------------------------------------------------
// YearRecord – one row of the table
// ---------------------------------------------------------------------------

/// One row: the year plus every other column of that row.
#[derive(Debug, Clone, PartialEq)]
pub struct YearRecord {
    pub year: i64,
    /// column_name → value, `Year` excluded.
    pub values: BTreeMap<String, Cell>,
}

impl YearRecord {
    pub fn new(year: i64) -> Self {
        YearRecord {
            year,
            values: BTreeMap::new(),
        }
    }

    /// Builder-style insert, handy for fixtures.
    pub fn with(mut self, column: &str, cell: Cell) -> Self {
        self.values.insert(column.to_string(), cell);
        self
    }

    /// Value of `column`, or [`Cell::Missing`] if the row has no such column.
    pub fn get(&self, column: &str) -> &Cell {
        self.values.get(column).unwrap_or(&MISSING)
    }
}

// ---------------------------------------------------------------------------
// EnergyDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// Year-indexed table, sorted ascending by year with one row per year.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EnergyDataset {
    records: Vec<YearRecord>,
    /// Ordered value column names (excludes `Year`).
    columns: Vec<String>,
}

impl EnergyDataset {
    /// Build a dataset, sorting the rows by year.
    ///
    /// Fails if two rows share a year.
    pub fn from_records(columns: Vec<String>, mut records: Vec<YearRecord>) -> Result<Self> {
        records.sort_by_key(|r| r.year);
        if let Some(pair) = records.windows(2).find(|w| w[0].year == w[1].year) {
            return Err(AnalysisError::DataFormat(format!(
                "year {} appears more than once",
                pair[0].year
            )));
        }
        Ok(EnergyDataset { records, columns })
    }

    /// Caller guarantees `records` is already sorted and unique, e.g. a
    /// subset of another dataset.
    pub(crate) fn from_sorted(columns: Vec<String>, records: Vec<YearRecord>) -> Self {
        debug_assert!(records.windows(2).all(|w| w[0].year < w[1].year));
        EnergyDataset { records, columns }
    }

    pub fn records(&self) -> &[YearRecord] {
        &self.records
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    pub fn years(&self) -> impl Iterator<Item = i64> + '_ {
        self.records.iter().map(|r| r.year)
    }

    pub fn min_year(&self) -> Option<i64> {
        self.records.first().map(|r| r.year)
    }

    pub fn max_year(&self) -> Option<i64> {
        self.records.last().map(|r| r.year)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
