use std::io;
use thiserror::Error;

use hicsig_core::ModelError;

/// Error type for hicsig-io operations.
#[derive(Error, Debug)]
pub enum HicsigIoError {
    /// IO error occurred during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The file has no header line.
    #[error("File is empty: {0}")]
    EmptyFile(String),

    /// A required column is absent from the header.
    #[error("Missing required column `{0}` in header")]
    MissingColumn(String),

    /// A field could not be parsed.
    #[error("Line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Failed to read npy file: {0}")]
    ReadNpy(#[from] ndarray_npy::ReadNpyError),

    #[error("Failed to write npy file: {0}")]
    WriteNpy(#[from] ndarray_npy::WriteNpyError),

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Result type alias for hicsig-io operations.
pub type Result<T> = std::result::Result<T, HicsigIoError>;
