//! Structural signals derived from dense contact matrices.
//!
//! - [`Downsampler`] max-pools a fine-resolution matrix (1kb by default) into a
//!   coarse one (5kb by default), restricted to region pairs inside a distance band.
//! - [`insulation_scores`] computes a per-bin triangular window sum used to find
//!   domain boundaries.

pub mod downsample;
pub mod errors;
pub mod insulation;

// re-exports
pub use downsample::Downsampler;
pub use errors::{MatrixError, Result};
pub use insulation::{DEFAULT_WINDOW, insulation_scores};
