//! Benjamini-Hochberg multiple testing correction.
//!
//! The correction scans p-values left to right, so the input must already be in
//! rank order. Unsorted input is rejected rather than silently miscorrected.

use log::debug;

use hicsig_core::models::ContactTable;

use crate::errors::{Result, StatsError};

/// Benjamini-Hochberg q-values for p-values sorted ascending, given the total
/// number of tests `n` (which may exceed the number of p-values supplied).
///
/// `q[i] = min(p[i] * n / (i + 1), 1)`, then made non-decreasing with
/// `q[i] = max(q[i], q[i - 1])`.
pub fn benjamini_hochberg(p_values: &[f64], n: u64) -> Result<Vec<f64>> {
    let d = p_values.len();
    if d == 0 {
        return Ok(Vec::new());
    }
    if n < d as u64 {
        return Err(StatsError::TestCountTooSmall { n, d });
    }

    for (index, &value) in p_values.iter().enumerate() {
        if !(0.0..=1.0).contains(&value) {
            return Err(StatsError::InvalidPValue { index, value });
        }
        if index > 0 && value < p_values[index - 1] {
            return Err(StatsError::PValuesNotSorted { index });
        }
    }

    let n = n as f64;
    let mut previous = 0.0_f64;
    let q_values = p_values
        .iter()
        .enumerate()
        .map(|(i, &p)| {
            let q = (p * n / (i + 1) as f64).min(1.0).max(previous);
            previous = q;
            q
        })
        .collect();

    debug!("Corrected {} p-values against {} tests", d, n);

    Ok(q_values)
}

///
/// Sort `table` by ascending p-value and fill in every row's q-value.
///
pub fn adjust_contacts(table: &mut ContactTable, n: u64) -> Result<()> {
    table.sort_by_p_value();
    let q_values = benjamini_hochberg(&table.p_values(), n)?;
    for (contact, q) in table.contacts.iter_mut().zip(q_values) {
        contact.q_value = Some(q);
    }
    Ok(())
}
