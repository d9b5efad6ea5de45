use thiserror::Error;

use hicsig_core::ModelError;

#[derive(Error, Debug, PartialEq)]
pub enum StatsError {
    #[error("p-values must be sorted ascending: p-value at index {index} is smaller than its predecessor")]
    PValuesNotSorted { index: usize },

    #[error("Invalid p-value at index {index}: {value}")]
    InvalidPValue { index: usize, value: f64 },

    #[error("Total test count {n} is smaller than the number of p-values {d}")]
    TestCountTooSmall { n: u64, d: usize },

    #[error("alpha must be in (0, 1], got {0}")]
    InvalidAlpha(f64),

    #[error("FDR threshold must be in [0, 1], got {0}")]
    InvalidFdr(f64),

    #[error(transparent)]
    Model(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, StatsError>;
