use thiserror::Error;

/// Result alias used across the pipeline.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Everything that can abort a growth analysis.
///
/// "Not enough points" is not in here: the growth calculator reports it as
/// `Ok(None)` and the decade aggregator drops the bucket.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed data: {0}")]
    DataFormat(String),

    #[error("Input has no 'Year' column")]
    MissingYearColumn,

    #[error("Growth of '{column}' is undefined: first value ({year}) is zero")]
    DivisionByZero { column: String, year: i64 },

    #[error("Column '{column}' holds non-numeric value '{value}' in {year}")]
    NonNumeric {
        column: String,
        year: i64,
        value: String,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_column() {
        let err = AnalysisError::DivisionByZero {
            column: "Nuclear_TWh".into(),
            year: 1990,
        };
        assert_eq!(
            err.to_string(),
            "Growth of 'Nuclear_TWh' is undefined: first value (1990) is zero"
        );

        let err = AnalysisError::NonNumeric {
            column: "Fossil_TWh".into(),
            year: 2001,
            value: "n/d".into(),
        };
        assert_eq!(
            err.to_string(),
            "Column 'Fossil_TWh' holds non-numeric value 'n/d' in 2001"
        );

        assert_eq!(
            AnalysisError::MissingYearColumn.to_string(),
            "Input has no 'Year' column"
        );
    }
}
