pub mod band;
pub mod contact;
pub mod matrix;
pub mod region;

// re-export for cleaner imports
pub use self::band::DistanceBand;
pub use self::contact::{Contact, ContactTable};
pub use self::matrix::ContactMatrix;
pub use self::region::{AlignedMidpoint, Region};
