//! Statistical validation of pairwise genomic contacts.
//!
//! This crate reduces a contact table to a statistically validated subset:
//!
//! - [`filter_contacts`] keeps rows passing a p-value cutoff inside a distance band
//! - [`count_pairs_in_band`] counts the region pairs tested inside that band
//! - [`benjamini_hochberg`] turns sorted p-values into monotone q-values
//!
//! [`call_significant_contacts`] chains the three steps.
//!
//! # Example
//!
//! ```
//! use hicsig_core::models::{Contact, ContactTable};
//! use hicsig_stats::{call_significant_contacts, SignificanceParams};
//!
//! let table = ContactTable::from(vec![
//!     Contact::new("chr1", 500, "chr1", 60_500, 0.001),
//!     Contact::new("chr1", 500, "chr1", 120_500, 0.2),
//! ]);
//!
//! let called = call_significant_contacts(&table, &SignificanceParams::default()).unwrap();
//! assert_eq!(called.contacts.len(), 1);
//! ```

pub mod errors;
pub mod fdr;
pub mod filter;
pub mod pairs;
pub mod pipeline;

// re-exports
pub use errors::{Result, StatsError};
pub use fdr::{adjust_contacts, benjamini_hochberg};
pub use filter::{FilterParams, FilteredContacts, filter_contacts};
pub use pairs::{count_pairs_in_band, count_pairs_per_chromosome};
pub use pipeline::{SignificanceParams, SignificantContacts, call_significant_contacts};
