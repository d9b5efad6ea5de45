use std::collections::BTreeMap;

use serde::Serialize;

///
/// A single pairwise contact between two regions, with its significance.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contact {
    pub chr1: String,
    pub mid1: u32,
    pub chr2: String,
    pub mid2: u32,
    pub p_value: f64,
    pub q_value: Option<f64>,
}

impl Contact {
    pub fn new(chr1: &str, mid1: u32, chr2: &str, mid2: u32, p_value: f64) -> Self {
        Contact {
            chr1: chr1.to_string(),
            mid1,
            chr2: chr2.to_string(),
            mid2,
            p_value,
            q_value: None,
        }
    }

    /// Signed distance `mid2 - mid1`. Contacts are expected to be ordered so
    /// that `mid2 >= mid1`.
    pub fn distance(&self) -> i64 {
        self.mid2 as i64 - self.mid1 as i64
    }

    /// Both anchors on the same chromosome.
    pub fn is_cis(&self) -> bool {
        self.chr1 == self.chr2
    }
}

///
/// Ordered collection of contacts. Row order is meaningful: FDR correction
/// expects rows sorted by ascending p-value.
///
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactTable {
    pub contacts: Vec<Contact>,
}

impl ContactTable {
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.contacts.iter()
    }

    pub fn p_values(&self) -> Vec<f64> {
        self.contacts.iter().map(|c| c.p_value).collect()
    }

    ///
    /// Stable sort of the rows by ascending p-value.
    ///
    pub fn sort_by_p_value(&mut self) {
        self.contacts.sort_by(|a, b| a.p_value.total_cmp(&b.p_value));
    }

    pub fn is_sorted_by_p_value(&self) -> bool {
        self.contacts
            .windows(2)
            .all(|w| w[0].p_value <= w[1].p_value)
    }

    ///
    /// Anchor midpoints of all rows grouped by chromosome. Each anchor is filed
    /// under its own chromosome, and every list is sorted and deduplicated.
    ///
    pub fn midpoints(&self) -> BTreeMap<String, Vec<u32>> {
        let mut mids: BTreeMap<String, Vec<u32>> = BTreeMap::new();
        for c in &self.contacts {
            mids.entry(c.chr1.clone()).or_default().push(c.mid1);
            mids.entry(c.chr2.clone()).or_default().push(c.mid2);
        }
        for list in mids.values_mut() {
            list.sort_unstable();
            list.dedup();
        }
        mids
    }
}

impl From<Vec<Contact>> for ContactTable {
    fn from(contacts: Vec<Contact>) -> Self {
        ContactTable { contacts }
    }
}

impl IntoIterator for ContactTable {
    type Item = Contact;
    type IntoIter = std::vec::IntoIter<Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.into_iter()
    }
}

impl<'a> IntoIterator for &'a ContactTable {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.iter()
    }
}

impl FromIterator<Contact> for ContactTable {
    fn from_iter<I: IntoIterator<Item = Contact>>(iter: I) -> Self {
        ContactTable {
            contacts: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn table() -> ContactTable {
        ContactTable::from(vec![
            Contact::new("chr1", 1_500, "chr1", 80_500, 0.004),
            Contact::new("chr1", 80_500, "chr1", 200_500, 0.001),
            Contact::new("chr1", 1_500, "chr1", 300_500, 0.004),
            Contact::new("chr1", 10_500, "chr1", 20_500, 0.0005),
        ])
    }

    #[rstest]
    fn test_distance_is_signed() {
        let forward = Contact::new("chr1", 1_000, "chr1", 5_000, 0.1);
        let backward = Contact::new("chr1", 5_000, "chr1", 1_000, 0.1);
        assert_eq!(forward.distance(), 4_000);
        assert_eq!(backward.distance(), -4_000);
    }

    #[rstest]
    fn test_sort_by_p_value_is_stable(mut table: ContactTable) {
        table.sort_by_p_value();
        assert!(table.is_sorted_by_p_value());

        let mids: Vec<(u32, u32)> = table.iter().map(|c| (c.mid1, c.mid2)).collect();
        assert_eq!(
            mids,
            vec![
                (10_500, 20_500),
                (80_500, 200_500),
                (1_500, 80_500),
                (1_500, 300_500)
            ]
        );
    }

    #[rstest]
    fn test_midpoints_are_unique(table: ContactTable) {
        let mids = table.midpoints();
        assert_eq!(mids.len(), 1);
        assert_eq!(
            mids["chr1"],
            vec![1_500, 10_500, 20_500, 80_500, 200_500, 300_500]
        );
    }

    #[rstest]
    fn test_midpoints_are_kept_per_chromosome() {
        let table = ContactTable::from(vec![
            Contact::new("chr1", 500, "chr1", 60_500, 0.001),
            Contact::new("chr2", 500, "chr2", 60_500, 0.002),
            Contact::new("chr2", 90_500, "chr3", 500, 0.003),
        ]);
        let mids = table.midpoints();

        // equal coordinates on different chromosomes stay distinct
        assert_eq!(mids["chr1"], vec![500, 60_500]);
        assert_eq!(mids["chr2"], vec![500, 60_500, 90_500]);
        assert_eq!(mids["chr3"], vec![500]);
    }

    #[rstest]
    fn test_empty_table() {
        let table = ContactTable::default();
        assert!(table.is_empty());
        assert!(table.midpoints().is_empty());
        assert!(table.is_sorted_by_p_value());
    }
}
