use serde::Serialize;

use crate::errors::{ModelError, Result};

pub const DEFAULT_MIN_DISTANCE: u32 = 50_000;
pub const DEFAULT_MAX_DISTANCE: u32 = 1_000_000;

/// Closed interval of genomic distances, in base pairs, within which region
/// pairs are considered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DistanceBand {
    min: u32,
    max: u32,
}

impl DistanceBand {
    pub fn new(min: u32, max: u32) -> Result<Self> {
        if min > max {
            return Err(ModelError::InvalidBand { min, max });
        }
        Ok(DistanceBand { min, max })
    }

    /// Band accepting every distance, including zero.
    pub fn unbounded() -> Self {
        DistanceBand {
            min: 0,
            max: u32::MAX,
        }
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn contains(&self, distance: u32) -> bool {
        self.min <= distance && distance <= self.max
    }

    /// Band test for a signed distance. Negative distances are never in band.
    pub fn contains_signed(&self, distance: i64) -> bool {
        distance >= self.min as i64 && distance <= self.max as i64
    }
}

impl Default for DistanceBand {
    fn default() -> Self {
        DistanceBand {
            min: DEFAULT_MIN_DISTANCE,
            max: DEFAULT_MAX_DISTANCE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_band_is_inclusive() {
        let band = DistanceBand::new(1000, 2000).unwrap();
        assert!(band.contains(1000));
        assert!(band.contains(2000));
        assert!(!band.contains(999));
        assert!(!band.contains(2001));
    }

    #[rstest]
    fn test_inverted_band_is_rejected() {
        assert_eq!(
            DistanceBand::new(10, 5),
            Err(ModelError::InvalidBand { min: 10, max: 5 })
        );
    }

    #[rstest]
    #[case(-1, false)]
    #[case(0, false)]
    #[case(50_000, true)]
    #[case(1_000_000, true)]
    #[case(1_000_001, false)]
    fn test_signed_distances(#[case] distance: i64, #[case] expected: bool) {
        assert_eq!(DistanceBand::default().contains_signed(distance), expected);
    }

    #[rstest]
    fn test_unbounded_contains_everything() {
        let band = DistanceBand::unbounded();
        assert!(band.contains(0));
        assert!(band.contains(u32::MAX));
    }
}
