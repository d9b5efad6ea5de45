use std::collections::BTreeMap;

use log::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use hicsig_core::models::DistanceBand;

/// Number of unordered region pairs `{i, j}`, `i != j`, with
/// `|regions[i] - regions[j]|` inside `band`.
///
/// This is the number of tests performed in the band, and is the `n` handed to
/// the Benjamini-Hochberg correction. Input order does not matter.
pub fn count_pairs_in_band(regions: &[u32], band: &DistanceBand) -> u64 {
    let mut sorted = regions.to_vec();
    sorted.sort_unstable();

    let count = sum_partners(&sorted, band);

    debug!(
        "{} region pairs within [{}, {}] among {} regions",
        count,
        band.min(),
        band.max(),
        regions.len()
    );

    count
}

/// Tests in the band summed over chromosomes. Pairs never span two chromosomes.
pub fn count_pairs_per_chromosome(regions: &BTreeMap<String, Vec<u32>>, band: &DistanceBand) -> u64 {
    regions
        .values()
        .map(|mids| count_pairs_in_band(mids, band))
        .sum()
}

#[cfg(feature = "parallel")]
fn sum_partners(sorted: &[u32], band: &DistanceBand) -> u64 {
    (0..sorted.len())
        .into_par_iter()
        .map(|i| partners_in_band(sorted, i, band))
        .sum()
}

#[cfg(not(feature = "parallel"))]
fn sum_partners(sorted: &[u32], band: &DistanceBand) -> u64 {
    (0..sorted.len())
        .map(|i| partners_in_band(sorted, i, band))
        .sum()
}

/// Partners of `sorted[i]` further along the sorted list whose offset lies in the band.
fn partners_in_band(sorted: &[u32], i: usize, band: &DistanceBand) -> u64 {
    let anchor = sorted[i];
    let rest = &sorted[i + 1..];
    let lower = rest.partition_point(|&x| x - anchor < band.min());
    let upper = rest.partition_point(|&x| x - anchor <= band.max());
    upper.saturating_sub(lower) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn count_exhaustive(regions: &[u32], band: &DistanceBand) -> u64 {
        let mut n = 0;
        for i in 0..regions.len() {
            for j in 0..i {
                if band.contains(regions[i].abs_diff(regions[j])) {
                    n += 1;
                }
            }
        }
        n
    }

    #[fixture]
    fn regions() -> Vec<u32> {
        // deterministic scatter of midpoints over ~2Mb
        (0..400u32)
            .map(|i| (i.wrapping_mul(7919) % 2_000) * 1000 + 500)
            .collect()
    }

    #[rstest]
    fn test_band_is_inclusive() {
        let band = DistanceBand::new(0, 2000).unwrap();
        assert_eq!(count_pairs_in_band(&[500, 1500, 2500], &band), 3);
    }

    #[rstest]
    fn test_upper_bound_excludes_far_pair() {
        let band = DistanceBand::new(0, 1999).unwrap();
        assert_eq!(count_pairs_in_band(&[500, 1500, 2500], &band), 2);
    }

    #[rstest]
    fn test_unbounded_counts_all_pairs(regions: Vec<u32>) {
        let m = regions.len() as u64;
        assert_eq!(
            count_pairs_in_band(&regions, &DistanceBand::unbounded()),
            m * (m - 1) / 2
        );
    }

    #[rstest]
    fn test_band_excluding_everything(regions: Vec<u32>) {
        let band = DistanceBand::new(3_000_000, 4_000_000).unwrap();
        assert_eq!(count_pairs_in_band(&regions, &band), 0);
    }

    #[rstest]
    #[case(0, 10_000)]
    #[case(50_000, 1_000_000)]
    #[case(1_000, 1_000)]
    #[case(250_000, 1_999_000)]
    fn test_matches_exhaustive_scan(regions: Vec<u32>, #[case] min: u32, #[case] max: u32) {
        let band = DistanceBand::new(min, max).unwrap();
        let expected = count_exhaustive(&regions, &band);
        assert_eq!(count_pairs_in_band(&regions, &band), expected);
    }

    #[rstest]
    fn test_symmetric_under_reversal(regions: Vec<u32>) {
        let band = DistanceBand::default();
        let mut reversed = regions.clone();
        reversed.reverse();
        assert_eq!(
            count_pairs_in_band(&regions, &band),
            count_pairs_in_band(&reversed, &band)
        );
    }

    #[rstest]
    fn test_unsorted_input() {
        let band = DistanceBand::new(1000, 1000).unwrap();
        assert_eq!(count_pairs_in_band(&[2500, 500, 1500], &band), 2);
    }

    #[rstest]
    fn test_pairs_do_not_cross_chromosomes() {
        let band = DistanceBand::new(50_000, 1_000_000).unwrap();
        let regions = BTreeMap::from([
            ("chr1".to_string(), vec![500, 60_500]),
            ("chr2".to_string(), vec![200_500, 260_500]),
        ]);

        // 500 vs 200_500 would be in band if both sat on one chromosome
        assert_eq!(count_pairs_per_chromosome(&regions, &band), 2);
        assert_eq!(count_pairs_in_band(&[500, 60_500, 200_500, 260_500], &band), 6);
    }

    #[rstest]
    fn test_no_chromosomes() {
        assert_eq!(count_pairs_per_chromosome(&BTreeMap::new(), &DistanceBand::default()), 0);
    }

    #[rstest]
    fn test_degenerate_inputs() {
        let band = DistanceBand::unbounded();
        assert_eq!(count_pairs_in_band(&[], &band), 0);
        assert_eq!(count_pairs_in_band(&[500], &band), 0);
    }
}
