//! End-to-end runs over CSV files written to a temporary directory.

use std::io::Write;
use std::path::Path;

use approx::assert_relative_eq;
use energy_growth::config::{ColumnMap, ColumnRename, Language, FOSSIL, NUCLEAR, RENEWABLE};
use energy_growth::data::loader::load_and_clean;
use energy_growth::{analyze, AnalysisConfig, AnalysisError};
use tempfile::NamedTempFile;

const R: &str = "renewable_generation__twh_chart_elec_fossil_nuclear_renewables";
const N: &str = "nuclear_generation__twh_chart_elec_fossil_nuclear_renewables";
const F: &str = "fossil_generation__twh_chart_elec_fossil_nuclear_renewables";

fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Raw export: Entity, Year, three sources, then the same three again.
fn raw_export(rows: &[(i64, &str, &str, &str)]) -> NamedTempFile {
    let mut csv = format!("Entity,Year,{R},{N},{F},{R},{N},{F}\n");
    for (year, r, n, f) in rows {
        csv.push_str(&format!("Brazil,{year},{r},{n},{f},0,0,0\n"));
    }
    write_csv(&csv)
}

fn config_for(path: &Path) -> AnalysisConfig {
    AnalysisConfig {
        input: path.to_path_buf(),
        ..AnalysisConfig::default()
    }
}

#[test]
fn full_report_from_raw_export() {
    let file = raw_export(&[
        (1985, "10", "", "5"),
        (1990, "50", "", "20"),
        (1995, "70", "", ""),
        (2000, "80", "4", "25"),
        (2005, "90", "", "30"),
        (2010, "100", "", ""),
        (2015, "120", "", "40"),
        (2020, "150", "", "20"),
        (2021, "500", "", "1"),
    ]);

    let report = analyze(&config_for(file.path())).unwrap();
    let text = report.to_string();

    assert!(text.contains("- Energia Renovável: 200.00% de crescimento total (1990-2020).\n"));
    assert!(text.contains("  - 1990-1999: 40.00% de crescimento.\n"));
    assert!(text.contains("  - 2000-2009: 12.50% de crescimento.\n"));
    assert!(text.contains("  - 2010-2019: 20.00% de crescimento.\n"));
    assert!(!text.contains("2020-2020"));
    assert!(text.contains("- Energia Fóssil: 0.00% de crescimento total (1990-2020).\n"));
    assert!(text.contains(
        "- Energia Nuclear: Não há dados suficientes para calcular o crescimento total.\n"
    ));

    let order: Vec<&str> = report.sources.iter().map(|s| s.column.as_str()).collect();
    assert_eq!(order, vec![RENEWABLE, FOSSIL, NUCLEAR]);
}

#[test]
fn normalization_leaves_only_canonical_names() {
    let file = raw_export(&[(1990, "1", "2", "3")]);
    let ds = load_and_clean(file.path(), &ColumnMap::default()).unwrap();

    assert_eq!(ds.columns(), &["Entity", RENEWABLE, NUCLEAR, FOSSIL]);
    for long in [R, N, F] {
        assert!(ds.columns().iter().all(|c| !c.starts_with(long)));
    }
    for alt in ["Renewable_TWh_Alt", "Nuclear_TWh_Alt", "Fossil_TWh_Alt"] {
        assert!(!ds.has_column(alt));
    }
}

#[test]
fn config_file_overrides_schema_and_language() {
    let data = write_csv("Year,solar,wind\n2000,1,2\n2004,2,2\n2009,4,3\n");
    let config_json = format!(
        r#"{{
            "input": {input:?},
            "language": "en",
            "columns": {{
                "renames": [ {{ "raw": "solar", "canonical": "Solar_TWh" }} ],
                "drop": []
            }},
            "sources": [ {{ "column": "Solar_TWh", "label": "Solar" }} ],
            "window": {{ "start": 2000, "end": 2010 }}
        }}"#,
        input = data.path().display().to_string()
    );
    let config_file = write_csv(&config_json);

    let config = AnalysisConfig::from_file(config_file.path()).unwrap();
    assert_eq!(config.language, Language::En);
    assert_eq!(
        config.columns.renames,
        vec![ColumnRename {
            raw: "solar".into(),
            canonical: "Solar_TWh".into()
        }]
    );

    let report = analyze(&config).unwrap();
    let solar = &report.sources[0];
    assert_eq!(solar.label, "Solar");
    let total = solar.total.as_ref().unwrap();
    assert_relative_eq!(total.percent, 300.0);
    assert_eq!((total.from, total.to), (2000, 2009));
    assert!(report
        .to_string()
        .contains("- Solar: 300.00% total growth (2000-2009).\n"));
}

#[test]
fn zero_first_value_fails_the_run() {
    let file = raw_export(&[(1990, "0", "", ""), (1991, "5", "", "")]);
    let err = analyze(&config_for(file.path())).unwrap_err();
    assert!(matches!(
        err,
        AnalysisError::DivisionByZero { ref column, year: 1990 } if column == RENEWABLE
    ));
}

#[test]
fn missing_input_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir.path().join("absent.csv"));
    assert!(matches!(analyze(&config), Err(AnalysisError::Io(_))));
}

#[test]
fn input_without_year_is_rejected() {
    let file = write_csv(&format!("Entity,{R}\nBrazil,1\n"));
    assert!(matches!(
        analyze(&config_for(file.path())),
        Err(AnalysisError::MissingYearColumn)
    ));
}

#[test]
fn invalid_config_is_reported() {
    let file = write_csv(r#"{ "decades": { "width": 0 } }"#);
    assert!(matches!(
        AnalysisConfig::from_file(file.path()),
        Err(AnalysisError::Config(_))
    ));

    let file = write_csv("not json");
    assert!(matches!(
        AnalysisConfig::from_file(file.path()),
        Err(AnalysisError::Config(_))
    ));
}
