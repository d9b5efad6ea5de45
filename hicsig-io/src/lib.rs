//! # Input/Output utilities for hicsig.
//!
//! Reading and writing of the plain data consumed and produced by the hicsig
//! engine: tab-separated contact tables (optionally gzipped), region midpoint
//! lists, dense `.npy` contact matrices and bedGraph score tracks.
//!
pub mod bedgraph;
pub mod consts;
pub mod contacts;
pub mod error;
pub mod matrix;
pub mod regions;
pub mod utils;

// re-expose core functions
pub use bedgraph::*;
pub use consts::*;
pub use contacts::*;
pub use error::*;
pub use matrix::*;
pub use regions::*;
