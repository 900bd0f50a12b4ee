use crate::data::model::{Cell, EnergyDataset};
use crate::error::{AnalysisError, Result};

/// Percentage change of `column` between its first and last observed values.
///
/// Missing cells are skipped. Returns `Ok(None)` when fewer than two values
/// remain. A zero starting value is an error rather than an infinite growth.
pub fn growth_percent(dataset: &EnergyDataset, column: &str) -> Result<Option<f64>> {
    let mut points: Vec<(i64, f64)> = Vec::new();
    for record in dataset.records() {
        match record.get(column) {
            Cell::Missing => {}
            Cell::Number(v) => points.push((record.year, *v)),
            Cell::Text(s) => {
                return Err(AnalysisError::NonNumeric {
                    column: column.to_string(),
                    year: record.year,
                    value: s.clone(),
                })
            }
        }
    }

    if points.len() < 2 {
        return Ok(None);
    }
    let (first_year, first) = points[0];
    let (_, last) = points[points.len() - 1];

    if first == 0.0 {
        return Err(AnalysisError::DivisionByZero {
            column: column.to_string(),
            year: first_year,
        });
    }
    Ok(Some((last - first) / first * 100.0))
}
