use std::path::PathBuf;

use ndarray::Array2;
use pretty_assertions::assert_eq;
use rstest::*;

use hicsig::core::HicsigConfig;
use hicsig::core::models::{ContactMatrix, DistanceBand};
use hicsig::io::{read_contacts, read_matrix, read_regions, write_contacts_to_path, write_matrix};
use hicsig::matrix::{Downsampler, insulation_scores};
use hicsig::stats::{SignificanceParams, benjamini_hochberg, call_significant_contacts, count_pairs_in_band};

#[fixture]
fn path_to_data() -> PathBuf {
    std::env::current_dir().unwrap().join("../tests/data")
}

mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[rstest]
    fn test_band_pair_count_is_inclusive() {
        let band = DistanceBand::new(0, 2000).unwrap();
        assert_eq!(count_pairs_in_band(&[500, 1500, 2500], &band), 3);
    }

    #[rstest]
    fn test_q_values_for_increasing_p_values() {
        let q = benjamini_hochberg(&[0.001, 0.004, 0.009], 100).unwrap();
        for (a, e) in q.iter().zip([0.1, 0.2, 0.3]) {
            assert!((a - e).abs() < 1e-12);
        }
    }

    #[rstest]
    fn test_all_zero_matrix_has_zero_insulation() {
        let x = Array2::<f64>::zeros((10, 10));
        let scores = insulation_scores(x.view(), 200).unwrap();
        assert!(scores.iter().all(|&v| v == 0.0));
    }

    #[rstest]
    fn test_significance_from_file(path_to_data: PathBuf) {
        let config =
            HicsigConfig::try_from(path_to_data.join("config/hicsig.toml").as_path()).unwrap();
        let params = SignificanceParams::try_from(&config.significance).unwrap();

        let table = read_contacts(path_to_data.join("contacts/contacts.tsv")).unwrap();
        let called = call_significant_contacts(&table, &params).unwrap();

        // alpha 0.05, band [20kb, 2Mb]: the 0.5 row, the 10kb row and the
        // inter-chromosomal row are dropped
        assert_eq!(called.contacts.len(), 5);
        assert!(called.contacts.is_sorted_by_p_value());
        assert!(called.n_tests >= called.contacts.len() as u64);

        let q: Vec<f64> = called.contacts.iter().map(|c| c.q_value.unwrap()).collect();
        assert!(q.windows(2).all(|w| w[0] <= w[1]));
        assert!(q.iter().all(|&v| v <= 0.1));

        let tempdir = tempfile::tempdir().unwrap();
        let out = tempdir.path().join("significant.tsv.gz");
        write_contacts_to_path(&out, &called.contacts).unwrap();
        assert_eq!(read_contacts(&out).unwrap(), called.contacts);
    }

    #[rstest]
    fn test_test_count_matches_region_file(path_to_data: PathBuf) {
        let regions = read_regions(path_to_data.join("regions/regions.txt")).unwrap();

        // 10_500, 70_500, 100_500, 120_500, 200_500, 1_100_500
        let band = DistanceBand::default();
        assert_eq!(count_pairs_in_band(&regions, &band), 11);
    }

    #[rstest]
    fn test_downsample_then_insulation() {
        // 60kb at 1kb with a strong local block between 10kb and 30kb
        let fine = Array2::from_shape_fn((60, 60), |(i, j)| {
            let block = (10..30).contains(&i) && (10..30).contains(&j);
            if block { 1.0 } else { 0.1 / (1.0 + i.abs_diff(j) as f64) }
        });
        let fine = ContactMatrix::new(1000, fine).unwrap();
        let regions: Vec<u32> = (2..58).map(|k| k * 1000 + 500).collect();

        let downsampler = Downsampler::new(1000, 5, DistanceBand::new(0, 30_000).unwrap()).unwrap();
        let coarse = downsampler.downsample(&fine, &regions).unwrap();
        assert_eq!(coarse.size(), 12);
        assert_eq!(coarse.resolution(), 5000);

        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("coarse.npy");
        write_matrix(&path, &coarse).unwrap();
        let coarse = read_matrix(&path, 5000).unwrap();

        let scores = insulation_scores(coarse.view(), 4).unwrap();
        assert_eq!(scores.len(), 12);
        assert!(scores.iter().all(|&v| v >= 0.0));

        // bins inside the block score higher than bins far away from it
        assert!(scores[3] > scores[10]);
    }
}
