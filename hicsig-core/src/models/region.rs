use std::fmt::{self, Display};

use crate::errors::{ModelError, Result};

///
/// Region struct, a genomic locus represented by its midpoint
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct Region {
    pub chr: String,
    pub mid: u32,
}

impl Region {
    pub fn new(chr: &str, mid: u32) -> Self {
        Region {
            chr: chr.to_string(),
            mid,
        }
    }

    ///
    /// Absolute distance between the midpoints of two regions.
    ///
    /// Returns `None` when the regions sit on different chromosomes.
    ///
    pub fn distance_to(&self, other: &Region) -> Option<u32> {
        if self.chr != other.chr {
            return None;
        }
        Some(self.mid.abs_diff(other.mid))
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.chr, self.mid)
    }
}

/// A midpoint coordinate validated against a fixed bin grid.
///
/// A position is aligned to a grid of `bin_size` when it sits half a bin past a
/// multiple of the bin size, e.g. `500`, `1500`, `2500` for 1kb bins.
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy, PartialOrd, Ord)]
pub struct AlignedMidpoint {
    position: u32,
    bin_size: u32,
}

impl AlignedMidpoint {
    pub fn new(position: u32, bin_size: u32) -> Result<Self> {
        if bin_size == 0 {
            return Err(ModelError::ZeroBinSize);
        }
        if position % bin_size != bin_size / 2 {
            return Err(ModelError::Misaligned { position, bin_size });
        }
        Ok(AlignedMidpoint { position, bin_size })
    }

    pub fn position(&self) -> u32 {
        self.position
    }

    pub fn bin_size(&self) -> u32 {
        self.bin_size
    }

    /// Index of the bin this midpoint belongs to on its own grid.
    pub fn bin_index(&self) -> usize {
        ((self.position - self.bin_size / 2) / self.bin_size) as usize
    }

    /// Index of the bin of size `bin_size` this midpoint falls into, computed
    /// as `(position - bin_size / 2) / bin_size`.
    ///
    /// Returns `None` when `bin_size` is zero or the position lies below half a bin.
    pub fn bin_index_at(&self, bin_size: u32) -> Option<usize> {
        if bin_size == 0 {
            return None;
        }
        self.position
            .checked_sub(bin_size / 2)
            .map(|offset| (offset / bin_size) as usize)
    }
}

impl Display for AlignedMidpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.position)
    }
}
