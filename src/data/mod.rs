/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  raw .csv export
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse, rename, drop alternates → EnergyDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ EnergyDataset │  Vec<YearRecord>, sorted by year
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  year bounds + column projection → new EnergyDataset
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
