use std::collections::BTreeMap;
use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use super::growth::growth_percent;
use crate::data::filter::RangeFilter;
use crate::data::model::EnergyDataset;
use crate::error::Result;

/// Which bucket starts are generated: `first_start`, `first_start + width`,
/// ... up to `last_start` (and never past the dataset's last year).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecadeWindow {
    pub first_start: i64,
    pub last_start: i64,
    pub width: i64,
}

impl Default for DecadeWindow {
    fn default() -> Self {
        DecadeWindow {
            first_start: 1990,
            last_start: 2020,
            width: 10,
        }
    }
}

/// Inclusive `[start, end]` year range; ordered by `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DecadeBucket {
    pub start: i64,
    pub end: i64,
}

impl fmt::Display for DecadeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Buckets covering `dataset`, the last one clipped to its final year.
pub fn buckets(dataset: &EnergyDataset, window: &DecadeWindow) -> Vec<DecadeBucket> {
    let Some(max_year) = dataset.max_year() else {
        return Vec::new();
    };
    if window.width <= 0 {
        return Vec::new();
    }

    let last_start = window
        .last_start
        .min(max_year.div_euclid(window.width) * window.width);

    let mut out = Vec::new();
    let mut start = window.first_start;
    while start <= last_start {
        out.push(DecadeBucket {
            start,
            end: (start + window.width - 1).min(max_year),
        });
        start += window.width;
    }
    out
}

/// Growth of `column` inside each bucket.
///
/// Buckets holding at most one year, or without two observed values, are
/// left out of the map rather than reported as empty.
pub fn growth_by_decade(
    dataset: &EnergyDataset,
    column: &str,
    window: &DecadeWindow,
) -> Result<BTreeMap<DecadeBucket, f64>> {
    let mut out = BTreeMap::new();

    for bucket in buckets(dataset, window) {
        let slice = RangeFilter::new()
            .from_year(bucket.start)
            .to_year(bucket.end)
            .column(column)
            .apply(dataset);

        if slice.len() <= 1 {
            debug!("{column} {bucket}: {} row(s), skipped", slice.len());
            continue;
        }
        match growth_percent(&slice, column)? {
            Some(growth) => {
                out.insert(bucket, growth);
            }
            None => debug!("{column} {bucket}: fewer than two observations"),
        }
    }
    Ok(out)
}
