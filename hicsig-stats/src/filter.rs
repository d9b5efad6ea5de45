use std::collections::BTreeMap;

use log::{debug, warn};

use hicsig_core::config::DEFAULT_ALPHA;
use hicsig_core::models::{ContactTable, DistanceBand};

use crate::errors::{Result, StatsError};

/// Cutoffs applied by [`filter_contacts`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterParams {
    /// Rows need `p_value < alpha`.
    pub alpha: f64,
    /// Rows need `mid2 - mid1` inside the band.
    pub band: DistanceBand,
}

impl FilterParams {
    pub fn new(alpha: f64, band: DistanceBand) -> Result<Self> {
        if !(alpha > 0.0 && alpha <= 1.0) {
            return Err(StatsError::InvalidAlpha(alpha));
        }
        Ok(FilterParams { alpha, band })
    }
}

impl Default for FilterParams {
    fn default() -> Self {
        FilterParams {
            alpha: DEFAULT_ALPHA,
            band: DistanceBand::default(),
        }
    }
}

/// Contacts surviving [`filter_contacts`] and the regions they touch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredContacts {
    pub contacts: ContactTable,
    /// Sorted, deduplicated midpoints of both anchors of every retained row,
    /// keyed by chromosome.
    pub regions: BTreeMap<String, Vec<u32>>,
}

impl FilteredContacts {
    /// Number of distinct regions over all chromosomes.
    pub fn region_count(&self) -> usize {
        self.regions.values().map(Vec::len).sum()
    }
}

///
/// Keep contacts with `p_value < alpha` whose distance `mid2 - mid1` falls
/// within the band, and collect the midpoints they touch.
///
/// Inter-chromosomal contacts have no genomic distance and are dropped. Row
/// order of the input is preserved.
///
pub fn filter_contacts(table: &ContactTable, params: &FilterParams) -> Result<FilteredContacts> {
    if !(params.alpha > 0.0 && params.alpha <= 1.0) {
        return Err(StatsError::InvalidAlpha(params.alpha));
    }

    let mut trans = 0usize;
    let contacts: ContactTable = table
        .iter()
        .filter(|c| c.p_value < params.alpha)
        .filter(|c| {
            if c.is_cis() {
                true
            } else {
                trans += 1;
                false
            }
        })
        .filter(|c| params.band.contains_signed(c.distance()))
        .cloned()
        .collect();

    if trans > 0 {
        warn!(
            "Dropped {} significant inter-chromosomal contacts with no genomic distance",
            trans
        );
    }

    let filtered = FilteredContacts {
        regions: contacts.midpoints(),
        contacts,
    };

    debug!(
        "Kept {} of {} contacts (alpha = {}, band = [{}, {}]) touching {} regions on {} chromosomes",
        filtered.contacts.len(),
        table.len(),
        params.alpha,
        params.band.min(),
        params.band.max(),
        filtered.region_count(),
        filtered.regions.len()
    );

    Ok(filtered)
}

#[cfg(test)]
mod tests {
    use super::*;

    use hicsig_core::models::Contact;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn table() -> ContactTable {
        ContactTable::from(vec![
            // passes both
            Contact::new("chr1", 10_500, "chr1", 70_500, 0.001),
            // p-value too high
            Contact::new("chr1", 10_500, "chr1", 90_500, 0.5),
            // too close
            Contact::new("chr1", 10_500, "chr1", 20_500, 0.0001),
            // too far
            Contact::new("chr1", 10_500, "chr1", 2_010_500, 0.0001),
            // passes, boundary distances are inclusive
            Contact::new("chr1", 70_500, "chr1", 120_500, 0.005),
            Contact::new("chr1", 100_500, "chr1", 1_100_500, 0.009),
            // p-value exactly alpha is not below alpha
            Contact::new("chr1", 100_500, "chr1", 200_500, 0.01),
            // reversed anchors give a negative distance
            Contact::new("chr1", 200_500, "chr1", 100_500, 0.001),
            // different chromosomes
            Contact::new("chr1", 100_500, "chr2", 300_500, 0.001),
        ])
    }

    #[rstest]
    fn test_default_params(table: ContactTable) {
        let result = filter_contacts(&table, &FilterParams::default()).unwrap();

        let kept: Vec<(u32, u32)> = result.contacts.iter().map(|c| (c.mid1, c.mid2)).collect();
        assert_eq!(
            kept,
            vec![(10_500, 70_500), (70_500, 120_500), (100_500, 1_100_500)]
        );
        assert_eq!(
            result.regions,
            BTreeMap::from([(
                "chr1".to_string(),
                vec![10_500, 70_500, 100_500, 120_500, 1_100_500]
            )])
        );
        assert_eq!(result.region_count(), 5);
    }

    #[rstest]
    fn test_retained_rows_satisfy_constraints(table: ContactTable) {
        let params = FilterParams::new(0.05, DistanceBand::new(10_000, 100_000).unwrap()).unwrap();
        let result = filter_contacts(&table, &params).unwrap();

        assert!(!result.contacts.is_empty());
        for c in result.contacts.iter() {
            assert!(c.p_value < params.alpha);
            assert!(params.band.contains_signed(c.distance()));
            assert!(result.regions[&c.chr1].contains(&c.mid1));
            assert!(result.regions[&c.chr2].contains(&c.mid2));
        }
        for mids in result.regions.values() {
            assert!(mids.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[rstest]
    fn test_monotone_in_alpha(table: ContactTable) {
        let mut previous = usize::MAX;
        for alpha in [1.0, 0.5, 0.01, 0.005, 0.001, 0.00001] {
            let params = FilterParams::new(alpha, DistanceBand::unbounded()).unwrap();
            let kept = filter_contacts(&table, &params).unwrap().contacts.len();
            assert!(kept <= previous);
            previous = kept;
        }
    }

    #[rstest]
    fn test_empty_table() {
        let result = filter_contacts(&ContactTable::default(), &FilterParams::default()).unwrap();
        assert_eq!(result, FilteredContacts::default());
    }

    #[rstest]
    #[case(0.0)]
    #[case(-0.5)]
    #[case(1.5)]
    #[case(f64::NAN)]
    fn test_invalid_alpha(#[case] alpha: f64) {
        assert!(matches!(
            FilterParams::new(alpha, DistanceBand::default()),
            Err(StatsError::InvalidAlpha(_))
        ));
    }
}
