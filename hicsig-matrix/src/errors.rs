use thiserror::Error;

use hicsig_core::ModelError;

#[derive(Error, Debug, PartialEq)]
pub enum MatrixError {
    #[error(
        "Region at {position} maps to bin {index}, whose pooling neighborhood of radius {radius} falls outside a fine matrix of {size} bins"
    )]
    FineIndexOutOfBounds {
        position: u32,
        index: usize,
        radius: usize,
        size: usize,
    },

    #[error("Region at {position} maps to coarse bin {index:?}, outside a coarse matrix of {size} bins")]
    CoarseIndexOutOfBounds {
        position: u32,
        index: Option<usize>,
        size: usize,
    },

    #[error("Expected a {expected}bp matrix, got {found}bp")]
    ResolutionMismatch { expected: u32, found: u32 },

    #[error("Downsampling factor must be odd and at least 1, got {0}")]
    InvalidFactor(u32),

    #[error("Coarse resolution {fine_resolution}bp x {factor} does not fit in 32 bits")]
    ResolutionOverflow { fine_resolution: u32, factor: u32 },

    #[error("Contact matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error(transparent)]
    Model(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, MatrixError>;
