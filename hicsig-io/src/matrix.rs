use std::path::Path;

use log::debug;
use ndarray::Array2;
use ndarray_npy::{read_npy, write_npy};

use hicsig_core::models::ContactMatrix;

use crate::error::Result;

///
/// Read a dense square `f64` matrix from an `.npy` file.
///
/// # Arguments
/// - path: path to the `.npy` file
/// - resolution: bin size of the matrix, in bp
///
pub fn read_matrix<P: AsRef<Path>>(path: P, resolution: u32) -> Result<ContactMatrix> {
    let values: Array2<f64> = read_npy(path.as_ref())?;
    debug!(
        "Read {}x{} matrix from {}",
        values.nrows(),
        values.ncols(),
        path.as_ref().display()
    );
    Ok(ContactMatrix::new(resolution, values)?)
}

pub fn write_matrix<P: AsRef<Path>>(path: P, matrix: &ContactMatrix) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    write_npy(path, matrix.values())?;
    Ok(())
}
