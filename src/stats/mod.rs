/// Growth statistics over a loaded dataset.
///
/// ```text
///   EnergyDataset
///        │
///        ├──▶ growth   first/last non-missing value → % change
///        │
///        └──▶ decade   split years into buckets → growth per bucket
/// ```

pub mod decade;
pub mod growth;

pub use decade::{buckets, growth_by_decade, DecadeBucket, DecadeWindow};
pub use growth::growth_percent;
