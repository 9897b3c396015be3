// crates/trendlens-core/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("required column '{column}' is missing from the input")]
    MissingField { column: &'static str },

    #[error("row {row}: malformed {field} value '{value}'")]
    MalformedInput {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Polars operation failed: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
