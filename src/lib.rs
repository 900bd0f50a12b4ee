//! Energy Growth - total and per-decade growth of yearly electricity
//! generation series (renewable, fossil, nuclear) read from a CSV export.

pub mod config;
pub mod data;
pub mod error;
pub mod report;
pub mod stats;

pub use config::AnalysisConfig;
pub use error::{AnalysisError, Result};
pub use report::{Report, Reporter};

use data::filter::RangeFilter;
use data::loader::load_and_clean;

/// Full pipeline: load the configured input, restrict it to the reporting
/// window and build the report.
pub fn analyze(config: &AnalysisConfig) -> Result<Report> {
    config.validate()?;
    let dataset = load_and_clean(&config.input, &config.columns)?;
    let windowed = RangeFilter::new()
        .from_year(config.window.start)
        .to_year(config.window.end)
        .apply(&dataset);
    log::debug!(
        "{} of {} rows inside {}-{}",
        windowed.len(),
        dataset.len(),
        config.window.start,
        config.window.end
    );
    Reporter::from_config(config).build(&windowed)
}
