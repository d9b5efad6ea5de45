use std::collections::BTreeMap;

use log::info;
use serde::Serialize;

use hicsig_core::config::SignificanceConfig;
use hicsig_core::models::{ContactTable, DistanceBand};

use crate::errors::{Result, StatsError};
use crate::fdr::adjust_contacts;
use crate::filter::{FilterParams, filter_contacts};
use crate::pairs::count_pairs_per_chromosome;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SignificanceParams {
    pub filter: FilterParams,
    /// Keep only rows with `q_value <= fdr` after correction.
    pub fdr: Option<f64>,
}

impl TryFrom<&SignificanceConfig> for SignificanceParams {
    type Error = StatsError;

    fn try_from(config: &SignificanceConfig) -> Result<Self> {
        let band = DistanceBand::new(config.min_distance, config.max_distance)?;
        Ok(SignificanceParams {
            filter: FilterParams::new(config.alpha, band)?,
            fdr: config.fdr,
        })
    }
}

/// Result of [`call_significant_contacts`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SignificantContacts {
    /// Retained contacts, sorted by ascending p-value, with q-values set.
    pub contacts: ContactTable,
    /// Regions touched by the contacts passing the p-value and distance filter,
    /// keyed by chromosome.
    pub regions: BTreeMap<String, Vec<u32>>,
    /// Number of same-chromosome region pairs tested inside the distance band.
    pub n_tests: u64,
}

///
/// Filter contacts by p-value and distance, count the tests performed inside
/// the band, and attach Benjamini-Hochberg q-values.
///
/// The test count is taken over the regions retained by the filter, so it is
/// computed before the optional FDR cutoff is applied.
///
pub fn call_significant_contacts(
    table: &ContactTable,
    params: &SignificanceParams,
) -> Result<SignificantContacts> {
    if let Some(fdr) = params.fdr {
        if !(0.0..=1.0).contains(&fdr) {
            return Err(StatsError::InvalidFdr(fdr));
        }
    }

    let filtered = filter_contacts(table, &params.filter)?;
    let n_tests = count_pairs_per_chromosome(&filtered.regions, &params.filter.band);
    let region_count = filtered.region_count();

    let mut contacts = filtered.contacts;
    adjust_contacts(&mut contacts, n_tests)?;

    if let Some(fdr) = params.fdr {
        contacts
            .contacts
            .retain(|c| c.q_value.is_some_and(|q| q <= fdr));
    }

    info!(
        "{} significant contacts over {} regions on {} chromosomes ({} tests in band)",
        contacts.len(),
        region_count,
        filtered.regions.len(),
        n_tests
    );

    Ok(SignificantContacts {
        contacts,
        regions: filtered.regions,
        n_tests,
    })
}
