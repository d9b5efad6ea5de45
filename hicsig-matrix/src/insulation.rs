use log::debug;
use ndarray::{Array1, ArrayView2, s};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::errors::{MatrixError, Result};

pub use hicsig_core::config::DEFAULT_WINDOW;

///
/// Insulation score of every bin of a square contact matrix.
///
/// For bin `i` and `h = size / 2`, the score is the sum of `x[a, b]` over
/// `i - h <= a <= b <= i + h`, i.e. the upper triangle of the window centred on
/// `i`, clipped at the matrix edges. Bins whose row has no positive contact mass
/// score exactly zero.
///
/// # Arguments
/// - x: square contact (or contact probability) matrix
/// - size: window size in bins
///
pub fn insulation_scores(x: ArrayView2<f64>, size: usize) -> Result<Array1<f64>> {
    let (rows, cols) = x.dim();
    if rows != cols {
        return Err(MatrixError::NotSquare { rows, cols });
    }

    let half = size / 2;
    let sums: Vec<f64> = x.rows().into_iter().map(|row| row.sum()).collect();

    #[cfg(feature = "parallel")]
    let scores: Vec<f64> = (0..rows)
        .into_par_iter()
        .map(|i| score_bin(&x, i, half, sums[i]))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let scores: Vec<f64> = (0..rows)
        .map(|i| score_bin(&x, i, half, sums[i]))
        .collect();

    debug!(
        "Scored {} bins with a {}-bin window ({} without contacts)",
        rows,
        size,
        sums.iter().filter(|&&s| !(s > 0.0)).count()
    );

    Ok(Array1::from_vec(scores))
}

fn score_bin(x: &ArrayView2<f64>, i: usize, half: usize, row_sum: f64) -> f64 {
    // NaN mass counts as no data
    if !(row_sum > 0.0) {
        return 0.0;
    }

    let n = x.nrows();
    let lo = i.saturating_sub(half);
    let hi = (i + half).min(n - 1);

    (lo..=hi).map(|a| x.slice(s![a, a..=hi]).sum()).sum()
}
