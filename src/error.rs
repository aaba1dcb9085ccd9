//! Error types for projection inputs and rate conversion

use thiserror::Error;

/// Errors raised before any projection output is produced
#[derive(Debug, Error)]
pub enum ProjectionError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),

    /// `1 + annual/100` is negative, so the twelfth root has no real value
    #[error("annual rate {annual_pct}% has no real monthly equivalent")]
    NumericDomain { annual_pct: f64 },

    #[error("date for period {period} is out of range")]
    DateOutOfRange { period: u32 },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ProjectionError>;
