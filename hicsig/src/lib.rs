#[cfg(feature = "core")]
#[doc(inline)]
pub use hicsig_core as core;

#[cfg(feature = "stats")]
#[doc(inline)]
pub use hicsig_stats as stats;

#[cfg(feature = "matrix")]
#[doc(inline)]
pub use hicsig_matrix as matrix;

#[cfg(feature = "io")]
#[doc(inline)]
pub use hicsig_io as io;
