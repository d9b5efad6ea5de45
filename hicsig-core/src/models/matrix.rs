use ndarray::{Array2, ArrayView2};

use crate::errors::{ModelError, Result};

///
/// Dense square contact matrix at a fixed bin size (`resolution`, in bp).
///
#[derive(Debug, Clone, PartialEq)]
pub struct ContactMatrix {
    resolution: u32,
    values: Array2<f64>,
}

impl ContactMatrix {
    pub fn new(resolution: u32, values: Array2<f64>) -> Result<Self> {
        if resolution == 0 {
            return Err(ModelError::ZeroBinSize);
        }
        let (rows, cols) = values.dim();
        if rows != cols {
            return Err(ModelError::NotSquare { rows, cols });
        }
        Ok(ContactMatrix { resolution, values })
    }

    /// All-zero matrix of `size` x `size` bins.
    pub fn zeros(resolution: u32, size: usize) -> Result<Self> {
        ContactMatrix::new(resolution, Array2::zeros((size, size)))
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Number of bins along each axis.
    pub fn size(&self) -> usize {
        self.values.nrows()
    }

    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.values.view()
    }

    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    pub fn into_values(self) -> Array2<f64> {
        self.values
    }
}

/// Number of bins of `resolution` bp needed to cover a chromosome of `length` bp.
pub fn bins_for_length(length: u64, resolution: u32) -> usize {
    if resolution == 0 {
        return 0;
    }
    length.div_ceil(resolution as u64) as usize
}
