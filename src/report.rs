use std::fmt;

use log::info;
use serde::Serialize;

use crate::config::{AnalysisConfig, EnergySource, Language, YearWindow};
use crate::data::model::EnergyDataset;
use crate::error::Result;
use crate::stats::{growth_by_decade, growth_percent, DecadeWindow};

// ---------------------------------------------------------------------------
// Report data
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotalGrowth {
    pub percent: f64,
    pub from: i64,
    pub to: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecadeGrowth {
    /// `"<start>-<end>"`
    pub decade: String,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceReport {
    pub column: String,
    pub label: String,
    /// `None` when the series has fewer than two observations.
    pub total: Option<TotalGrowth>,
    pub decades: Vec<DecadeGrowth>,
}

/// Growth figures for every configured source, in configuration order.
///
/// `Display` renders the terminal text; `Serialize` gives the JSON form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub language: Language,
    pub sources: Vec<SourceReport>,
}

// ---------------------------------------------------------------------------
// Reporter
// ---------------------------------------------------------------------------

pub struct Reporter {
    sources: Vec<EnergySource>,
    window: YearWindow,
    decades: DecadeWindow,
    language: Language,
}

impl Reporter {
    pub fn new(
        sources: Vec<EnergySource>,
        window: YearWindow,
        decades: DecadeWindow,
        language: Language,
    ) -> Self {
        Reporter {
            sources,
            window,
            decades,
            language,
        }
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Reporter::new(
            config.sources.clone(),
            config.window,
            config.decades,
            config.language,
        )
    }

    /// Compute total and per-decade growth for each source.
    ///
    /// `dataset` is expected to be restricted to the reporting window already;
    /// the total range is printed as window start to the last year present.
    pub fn build(&self, dataset: &EnergyDataset) -> Result<Report> {
        let mut sources = Vec::with_capacity(self.sources.len());

        for source in &self.sources {
            let total = match (growth_percent(dataset, &source.column)?, dataset.max_year()) {
                (Some(percent), Some(to)) => Some(TotalGrowth {
                    percent,
                    from: self.window.start,
                    to,
                }),
                _ => None,
            };

            let decades = growth_by_decade(dataset, &source.column, &self.decades)?
                .into_iter()
                .map(|(bucket, percent)| DecadeGrowth {
                    decade: bucket.to_string(),
                    percent,
                })
                .collect::<Vec<_>>();

            info!(
                "{}: total {:?}, {} decade bucket(s)",
                source.column,
                total.as_ref().map(|t| t.percent),
                decades.len()
            );

            sources.push(SourceReport {
                column: source.column.clone(),
                label: source.display_label(self.language),
                total,
                decades,
            });
        }

        Ok(Report {
            language: self.language,
            sources,
        })
    }
}

// ---------------------------------------------------------------------------
// Text rendering
// ---------------------------------------------------------------------------

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.language {
            Language::Pt => writeln!(f, "Crescimento da geração de energia no Brasil (em TWh):")?,
            Language::En => writeln!(f, "Energy generation growth in Brazil (TWh):")?,
        }

        for source in &self.sources {
            writeln!(f)?;
            let label = &source.label;
            match (&source.total, self.language) {
                (Some(t), Language::Pt) => writeln!(
                    f,
                    "- {label}: {:.2}% de crescimento total ({}-{}).",
                    t.percent, t.from, t.to
                )?,
                (Some(t), Language::En) => writeln!(
                    f,
                    "- {label}: {:.2}% total growth ({}-{}).",
                    t.percent, t.from, t.to
                )?,
                (None, Language::Pt) => writeln!(
                    f,
                    "- {label}: Não há dados suficientes para calcular o crescimento total."
                )?,
                (None, Language::En) => {
                    writeln!(f, "- {label}: Not enough data to compute total growth.")?
                }
            }

            for d in &source.decades {
                match self.language {
                    Language::Pt => {
                        writeln!(f, "  - {}: {:.2}% de crescimento.", d.decade, d.percent)?
                    }
                    Language::En => writeln!(f, "  - {}: {:.2}% growth.", d.decade, d.percent)?,
                }
            }
        }
        Ok(())
    }
}
