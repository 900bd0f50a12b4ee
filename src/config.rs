//! Run configuration.
//!
//! Every field has a built-in default reproducing the stock Brazilian
//! electricity export, so a JSON config file only needs the keys it changes:
//!
//! ```json
//! { "language": "en", "window": { "start": 2000, "end": 2020 } }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};
use crate::stats::DecadeWindow;

pub const RENEWABLE: &str = "Renewable_TWh";
pub const NUCLEAR: &str = "Nuclear_TWh";
pub const FOSSIL: &str = "Fossil_TWh";

const RAW_RENEWABLE: &str = "renewable_generation__twh_chart_elec_fossil_nuclear_renewables";
const RAW_NUCLEAR: &str = "nuclear_generation__twh_chart_elec_fossil_nuclear_renewables";
const RAW_FOSSIL: &str = "fossil_generation__twh_chart_elec_fossil_nuclear_renewables";

// ---------------------------------------------------------------------------
// Column normalization table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRename {
    /// Header as it appears in the file, after duplicate disambiguation.
    pub raw: String,
    pub canonical: String,
}

impl ColumnRename {
    fn new(raw: &str, canonical: &str) -> Self {
        ColumnRename {
            raw: raw.to_string(),
            canonical: canonical.to_string(),
        }
    }
}

/// Raw header → canonical name table, plus the canonical columns to discard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMap {
    pub renames: Vec<ColumnRename>,
    pub drop: Vec<String>,
}

impl Default for ColumnMap {
    fn default() -> Self {
        ColumnMap {
            renames: vec![
                ColumnRename::new(RAW_RENEWABLE, RENEWABLE),
                ColumnRename::new(RAW_NUCLEAR, NUCLEAR),
                ColumnRename::new(RAW_FOSSIL, FOSSIL),
                ColumnRename::new(&format!("{RAW_RENEWABLE}.1"), "Renewable_TWh_Alt"),
                ColumnRename::new(&format!("{RAW_NUCLEAR}.1"), "Nuclear_TWh_Alt"),
                ColumnRename::new(&format!("{RAW_FOSSIL}.1"), "Fossil_TWh_Alt"),
            ],
            drop: vec![
                "Renewable_TWh_Alt".into(),
                "Nuclear_TWh_Alt".into(),
                "Fossil_TWh_Alt".into(),
            ],
        }
    }
}

impl ColumnMap {
    /// Canonical name for a raw header; unknown headers map to themselves.
    pub fn canonical_name<'a>(&'a self, raw: &'a str) -> &'a str {
        self.renames
            .iter()
            .find(|r| r.raw == raw)
            .map(|r| r.canonical.as_str())
            .unwrap_or(raw)
    }

    pub fn is_dropped(&self, canonical: &str) -> bool {
        self.drop.iter().any(|d| d == canonical)
    }
}

// ---------------------------------------------------------------------------
// Reporting setup
// ---------------------------------------------------------------------------

/// Output language of the text report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Pt,
    En,
}

impl Language {
    /// Display label for the stock canonical columns.
    pub fn builtin_label(self, column: &str) -> Option<&'static str> {
        let label = match (self, column) {
            (Language::Pt, RENEWABLE) => "Energia Renovável",
            (Language::Pt, FOSSIL) => "Energia Fóssil",
            (Language::Pt, NUCLEAR) => "Energia Nuclear",
            (Language::En, RENEWABLE) => "Renewable Energy",
            (Language::En, FOSSIL) => "Fossil Energy",
            (Language::En, NUCLEAR) => "Nuclear Energy",
            _ => return None,
        };
        Some(label)
    }
}

/// One series to report on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergySource {
    pub column: String,
    /// Overrides the language's built-in label.
    #[serde(default)]
    pub label: Option<String>,
}

impl EnergySource {
    pub fn new(column: &str) -> Self {
        EnergySource {
            column: column.to_string(),
            label: None,
        }
    }

    pub fn labelled(column: &str, label: &str) -> Self {
        EnergySource {
            column: column.to_string(),
            label: Some(label.to_string()),
        }
    }

    pub fn display_label(&self, language: Language) -> String {
        self.label
            .clone()
            .or_else(|| language.builtin_label(&self.column).map(str::to_string))
            .unwrap_or_else(|| self.column.clone())
    }
}

pub fn default_sources() -> Vec<EnergySource> {
    vec![
        EnergySource::new(RENEWABLE),
        EnergySource::new(FOSSIL),
        EnergySource::new(NUCLEAR),
    ]
}

/// Inclusive year range the report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct YearWindow {
    pub start: i64,
    pub end: i64,
}

impl Default for YearWindow {
    fn default() -> Self {
        YearWindow {
            start: 1990,
            end: 2020,
        }
    }
}

// ---------------------------------------------------------------------------
// AnalysisConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub input: PathBuf,
    pub columns: ColumnMap,
    pub sources: Vec<EnergySource>,
    pub window: YearWindow,
    pub decades: DecadeWindow,
    pub language: Language,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            input: PathBuf::from("uso_energia_no_brasil.csv"),
            columns: ColumnMap::default(),
            sources: default_sources(),
            window: YearWindow::default(),
            decades: DecadeWindow::default(),
            language: Language::default(),
        }
    }
}

impl AnalysisConfig {
    /// Read a JSON config file; missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: AnalysisConfig = serde_json::from_str(&text)
            .map_err(|e| AnalysisError::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.window.start > self.window.end {
            return Err(AnalysisError::Config(format!(
                "window start {} is after window end {}",
                self.window.start, self.window.end
            )));
        }
        if self.decades.width <= 0 {
            return Err(AnalysisError::Config(format!(
                "decade width must be positive, got {}",
                self.decades.width
            )));
        }
        if self.decades.first_start > self.decades.last_start {
            return Err(AnalysisError::Config(format!(
                "first decade {} is after last decade {}",
                self.decades.first_start, self.decades.last_start
            )));
        }
        if self.sources.is_empty() {
            return Err(AnalysisError::Config("no energy sources configured".into()));
        }
        Ok(())
    }
}
