//! Fine-to-coarse resolution change by local max-pooling.
//!
//! Neighbouring fine cells are treated as correlated evidence for the same
//! coarse cell, so a coarse cell keeps the strongest value found in the
//! `factor x factor` fine neighbourhood around each in-band region pair that
//! maps onto it.

use std::ops::Range;

use log::{debug, info};
use ndarray::{Array2, ArrayView2, ArrayViewMut1, Axis, s};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use hicsig_core::config::{DEFAULT_FACTOR, DEFAULT_FINE_RESOLUTION};
use hicsig_core::models::matrix::bins_for_length;
use hicsig_core::ModelError;
use hicsig_core::models::{AlignedMidpoint, ContactMatrix, DistanceBand};

use crate::errors::{MatrixError, Result};

/// A region resolved to its fine and coarse matrix indices.
#[derive(Debug, Clone, Copy)]
struct Anchor {
    position: u32,
    fine: usize,
    coarse: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Downsampler {
    fine_resolution: u32,
    factor: u32,
    band: DistanceBand,
    coarse_size: Option<usize>,
}

impl Default for Downsampler {
    fn default() -> Self {
        Downsampler {
            fine_resolution: DEFAULT_FINE_RESOLUTION,
            factor: DEFAULT_FACTOR,
            band: DistanceBand::default(),
            coarse_size: None,
        }
    }
}

impl Downsampler {
    pub fn new(fine_resolution: u32, factor: u32, band: DistanceBand) -> Result<Self> {
        if fine_resolution == 0 {
            return Err(MatrixError::Model(ModelError::ZeroBinSize));
        }
        if factor == 0 || factor % 2 == 0 {
            return Err(MatrixError::InvalidFactor(factor));
        }
        if fine_resolution.checked_mul(factor).is_none() {
            return Err(MatrixError::ResolutionOverflow {
                fine_resolution,
                factor,
            });
        }
        Ok(Downsampler {
            fine_resolution,
            factor,
            band,
            coarse_size: None,
        })
    }

    /// Fix the number of coarse bins instead of deriving it from the fine matrix.
    pub fn with_coarse_size(mut self, coarse_size: usize) -> Self {
        self.coarse_size = Some(coarse_size);
        self
    }

    /// Size the coarse matrix to cover a whole chromosome of `length` bp.
    pub fn with_chrom_length(self, length: u64) -> Self {
        let size = bins_for_length(length, self.coarse_resolution());
        self.with_coarse_size(size)
    }

    pub fn fine_resolution(&self) -> u32 {
        self.fine_resolution
    }

    /// `fine_resolution * factor`, checked to fit in `u32` at construction.
    pub fn coarse_resolution(&self) -> u32 {
        self.fine_resolution * self.factor
    }

    /// Half-width of the pooled neighbourhood, in fine bins.
    pub fn radius(&self) -> usize {
        (self.factor / 2) as usize
    }

    pub fn band(&self) -> &DistanceBand {
        &self.band
    }

    /// Number of coarse bins produced for a fine matrix of `fine_size` bins.
    pub fn coarse_size_for(&self, fine_size: usize) -> usize {
        self.coarse_size
            .unwrap_or_else(|| fine_size.div_ceil(self.factor as usize))
    }

    ///
    /// Max-pool `fine` onto the coarse grid over every ordered pair of
    /// `regions` whose distance lies inside the band.
    ///
    /// Each region must be a midpoint of the fine bin grid, and its pooling
    /// neighbourhood must lie inside `fine`. All regions are checked before
    /// any pooling happens. Coarse cells not reached by any pair stay zero.
    ///
    pub fn downsample(&self, fine: &ContactMatrix, regions: &[u32]) -> Result<ContactMatrix> {
        if fine.resolution() != self.fine_resolution {
            return Err(MatrixError::ResolutionMismatch {
                expected: self.fine_resolution,
                found: fine.resolution(),
            });
        }

        let fine_size = fine.size();
        let coarse_size = self.coarse_size_for(fine_size);

        let mut anchors = regions
            .iter()
            .map(|&position| self.anchor(position, fine_size, coarse_size))
            .collect::<Result<Vec<Anchor>>>()?;
        anchors.sort_unstable_by_key(|a| a.position);
        let positions: Vec<u32> = anchors.iter().map(|a| a.position).collect();

        // each coarse row is written only from the anchors that map onto it
        let mut buckets: Vec<Vec<usize>> = vec![Vec::new(); coarse_size];
        for (idx, anchor) in anchors.iter().enumerate() {
            buckets[anchor.coarse].push(idx);
        }

        debug!(
            "Downsampling {}x{} at {}bp to {}x{} at {}bp over {} regions",
            fine_size,
            fine_size,
            self.fine_resolution,
            coarse_size,
            coarse_size,
            self.coarse_resolution(),
            anchors.len()
        );

        let mut coarse = Array2::<f64>::zeros((coarse_size, coarse_size));
        let ctx = PoolContext {
            fine: fine.view(),
            anchors: &anchors,
            positions: &positions,
            band: &self.band,
            radius: self.radius(),
        };

        #[cfg(feature = "parallel")]
        coarse
            .axis_iter_mut(Axis(0))
            .into_par_iter()
            .zip(buckets.par_iter())
            .for_each(|(row, members)| ctx.fill_row(row, members));

        #[cfg(not(feature = "parallel"))]
        coarse
            .axis_iter_mut(Axis(0))
            .zip(buckets.iter())
            .for_each(|(row, members)| ctx.fill_row(row, members));

        info!(
            "Downsampled {} regions to a {}x{} matrix",
            anchors.len(),
            coarse_size,
            coarse_size
        );

        Ok(ContactMatrix::new(self.coarse_resolution(), coarse)?)
    }

    fn anchor(&self, position: u32, fine_size: usize, coarse_size: usize) -> Result<Anchor> {
        let mid = AlignedMidpoint::new(position, self.fine_resolution)?;
        let radius = self.radius();

        let fine = mid.bin_index();
        if fine < radius || fine + radius >= fine_size {
            return Err(MatrixError::FineIndexOutOfBounds {
                position,
                index: fine,
                radius,
                size: fine_size,
            });
        }

        let coarse = mid.bin_index_at(self.coarse_resolution());
        match coarse {
            Some(coarse) if coarse < coarse_size => Ok(Anchor {
                position,
                fine,
                coarse,
            }),
            _ => Err(MatrixError::CoarseIndexOutOfBounds {
                position,
                index: coarse,
                size: coarse_size,
            }),
        }
    }
}

/// Read-only inputs shared by every row worker.
struct PoolContext<'a> {
    fine: ArrayView2<'a, f64>,
    anchors: &'a [Anchor],
    positions: &'a [u32],
    band: &'a DistanceBand,
    radius: usize,
}

impl PoolContext<'_> {
    fn fill_row(&self, mut row: ArrayViewMut1<f64>, members: &[usize]) {
        for &a in members {
            let anchor = self.anchors[a];
            for range in partner_ranges(self.positions, anchor.position, self.band) {
                for partner in &self.anchors[range] {
                    let pooled = self.pool(anchor.fine, partner.fine);
                    let cell = &mut row[partner.coarse];
                    if pooled > *cell {
                        *cell = pooled;
                    }
                }
            }
        }
    }

    fn pool(&self, k1: usize, k2: usize) -> f64 {
        let r = self.radius;
        self.fine
            .slice(s![k1 - r..=k1 + r, k2 - r..=k2 + r])
            .fold(f64::NEG_INFINITY, |m, &v| m.max(v))
    }
}

/// Index ranges of sorted `positions` at distance `[min, max]` below and above `anchor`.
fn partner_ranges(positions: &[u32], anchor: u32, band: &DistanceBand) -> [Range<usize>; 2] {
    let anchor = anchor as u64;
    let (min, max) = (band.min() as u64, band.max() as u64);

    let within = |lo: u64, hi: u64| {
        let start = positions.partition_point(|&p| (p as u64) < lo);
        let end = positions.partition_point(|&p| (p as u64) <= hi);
        start..end.max(start)
    };

    let below = match anchor.checked_sub(min) {
        Some(hi) => within(anchor.saturating_sub(max), hi),
        None => 0..0,
    };
    let above = within(anchor + min, anchor + max);

    [below, above]
}
