use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, info, warn};

use super::model::{Cell, EnergyDataset, YearRecord, YEAR_COLUMN};
use crate::config::ColumnMap;
use crate::error::{AnalysisError, Result};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a CSV export and normalize its columns.
///
/// See [`load_from_reader`] for the cleaning steps.
pub fn load_and_clean(path: &Path, columns: &ColumnMap) -> Result<EnergyDataset> {
    let file = File::open(path)?;
    let dataset = load_from_reader(file, columns)?;
    info!(
        "loaded {} rows ({:?}..={:?}) from {}",
        dataset.len(),
        dataset.min_year(),
        dataset.max_year(),
        path.display()
    );
    Ok(dataset)
}

/// Parse CSV from any reader.
///
/// Steps:
/// 1. repeated header names get a `.1`, `.2`, ... suffix;
/// 2. headers found in `columns.renames` take their canonical name;
/// 3. canonical names listed in `columns.drop` are discarded;
/// 4. rows are sorted by `Year`.
///
/// Expected columns that are absent only produce a warning.
pub fn load_from_reader<R: Read>(reader: R, columns: &ColumnMap) -> Result<EnergyDataset> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let raw_headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    let headers = disambiguate_headers(&raw_headers);

    for rename in &columns.renames {
        if !headers.contains(&rename.raw) {
            warn!(
                "expected column '{}' not found, '{}' will be absent",
                rename.raw, rename.canonical
            );
        }
    }

    let canonical: Vec<String> = headers
        .iter()
        .map(|h| columns.canonical_name(h).to_string())
        .collect();

    for dropped in &columns.drop {
        if !canonical.contains(dropped) {
            warn!("column '{dropped}' scheduled for removal is not present");
        }
    }

    let year_idx = canonical
        .iter()
        .position(|h| h == YEAR_COLUMN)
        .ok_or(AnalysisError::MissingYearColumn)?;

    let kept: Vec<(usize, String)> = canonical
        .iter()
        .enumerate()
        .filter(|(i, name)| *i != year_idx && !columns.is_dropped(name))
        .map(|(i, name)| (i, name.clone()))
        .collect();
    debug!(
        "keeping columns {:?}",
        kept.iter().map(|(_, n)| n.as_str()).collect::<Vec<_>>()
    );

    let mut records = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result?;
        // header is line 1
        let line = row_no + 2;

        let year = parse_year(record.get(year_idx).unwrap_or(""), line)?;

        let mut values = BTreeMap::new();
        for (col_idx, name) in &kept {
            values.insert(name.clone(), Cell::parse(record.get(*col_idx).unwrap_or("")));
        }
        records.push(YearRecord { year, values });
    }

    let column_names = kept.into_iter().map(|(_, name)| name).collect();
    EnergyDataset::from_records(column_names, records)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Suffix repeated header names with their occurrence number, so
/// `a,b,a,a` becomes `a,b,a.1,a.2`.
fn disambiguate_headers(headers: &[String]) -> Vec<String> {
    let mut seen: BTreeMap<&str, usize> = BTreeMap::new();
    headers
        .iter()
        .map(|h| {
            let count = seen.entry(h.as_str()).or_insert(0);
            let name = if *count == 0 {
                h.clone()
            } else {
                format!("{h}.{count}")
            };
            *count += 1;
            name
        })
        .collect()
}

/// Years must be integral; `1990.0` is tolerated.
fn parse_year(raw: &str, line: usize) -> Result<i64> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(AnalysisError::DataFormat(format!(
            "line {line}: missing {YEAR_COLUMN}"
        )));
    }
    if let Ok(year) = s.parse::<i64>() {
        return Ok(year);
    }
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() && v.fract() == 0.0 => Ok(v as i64),
        _ => Err(AnalysisError::DataFormat(format!(
            "line {line}: {YEAR_COLUMN} '{s}' is not an integer"
        ))),
    }
}
