use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ModelError {
    #[error("Invalid distance band: min distance {min} is greater than max distance {max}")]
    InvalidBand { min: u32, max: u32 },

    #[error("Bin size must be greater than zero")]
    ZeroBinSize,

    #[error("Position {position} is not a midpoint of the {bin_size}bp bin grid")]
    Misaligned { position: u32, bin_size: u32 },

    #[error("Contact matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Can't read config file: {0}")]
    ConfigRead(String),

    #[error("Can't parse config file: {0}")]
    ConfigParse(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
