//! # Core models for Hi-C contact significance and matrix analysis.
//!
//! This crate holds the plain data shared by the other `hicsig` crates:
//! region midpoints (optionally validated against a bin grid), distance bands,
//! contact tables carrying p-values and q-values, and dense square contact matrices.
//! It also provides the TOML configuration consumed by the command line tool.
//!
pub mod config;
pub mod errors;
pub mod models;

// re-exports
pub use config::HicsigConfig;
pub use errors::{ModelError, Result};
pub use models::{AlignedMidpoint, Contact, ContactMatrix, ContactTable, DistanceBand, Region};
