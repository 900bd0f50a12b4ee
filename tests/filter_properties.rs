//! Property-based tests for the range filter and growth calculator.

use energy_growth::data::filter::filter;
use energy_growth::data::model::{Cell, EnergyDataset, YearRecord};
use energy_growth::stats::{growth_by_decade, growth_percent, DecadeWindow};
use proptest::prelude::*;

/// Strategy for a dataset with unique years and an optionally-missing
/// positive series in column `X`.
fn dataset_strategy() -> impl Strategy<Value = EnergyDataset> {
    prop::collection::btree_map(1970i64..2040, prop::option::of(1.0..1000.0_f64), 0..40).prop_map(
        |points| {
            let records = points
                .into_iter()
                .map(|(year, v)| {
                    YearRecord::new(year)
                        .with("X", v.map_or(Cell::Missing, Cell::Number))
                        .with("Y", Cell::Number(year as f64))
                })
                .collect();
            EnergyDataset::from_records(vec!["X".into(), "Y".into()], records).unwrap()
        },
    )
}

proptest! {
    #[test]
    fn filter_is_idempotent(
        ds in dataset_strategy(),
        start in prop::option::of(1960i64..2050),
        end in prop::option::of(1960i64..2050),
        project in any::<bool>(),
    ) {
        let column = if project { Some("X") } else { None };
        let once = filter(&ds, start, end, column);
        let twice = filter(&once, start, end, column);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn filtered_years_stay_in_bounds(
        ds in dataset_strategy(),
        start in 1960i64..2050,
        span in 0i64..40,
    ) {
        let end = start + span;
        let out = filter(&ds, Some(start), Some(end), None);
        prop_assert!(out.years().all(|y| y >= start && y <= end));
        let expected = ds.years().filter(|&y| y >= start && y <= end).count();
        prop_assert_eq!(out.len(), expected);
    }

    #[test]
    fn decade_buckets_never_hold_a_single_year(ds in dataset_strategy()) {
        let map = growth_by_decade(&ds, "X", &DecadeWindow::default()).unwrap();
        for bucket in map.keys() {
            prop_assert!(bucket.start <= bucket.end);
            let rows = ds.years().filter(|&y| y >= bucket.start && y <= bucket.end).count();
            prop_assert!(rows > 1);
        }
    }

    #[test]
    fn growth_needs_two_observations(ds in dataset_strategy()) {
        let observed = ds.records().iter().filter(|r| !r.get("X").is_missing()).count();
        let growth = growth_percent(&ds, "X").unwrap();
        prop_assert_eq!(growth.is_some(), observed >= 2);
    }
}
