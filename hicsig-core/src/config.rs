use std::fs::read_to_string;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ModelError, Result};
use crate::models::band::{DEFAULT_MAX_DISTANCE, DEFAULT_MIN_DISTANCE};
use crate::models::DistanceBand;

pub const DEFAULT_ALPHA: f64 = 0.01;
pub const DEFAULT_FINE_RESOLUTION: u32 = 1000;
pub const DEFAULT_FACTOR: u32 = 5;
/// Insulation window in bins: 100 bins on either side of the scored bin.
pub const DEFAULT_WINDOW: usize = 200;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SignificanceConfig {
    pub alpha: f64,
    pub min_distance: u32,
    pub max_distance: u32,
    pub fdr: Option<f64>,
}

impl Default for SignificanceConfig {
    fn default() -> Self {
        SignificanceConfig {
            alpha: DEFAULT_ALPHA,
            min_distance: DEFAULT_MIN_DISTANCE,
            max_distance: DEFAULT_MAX_DISTANCE,
            fdr: None,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MatrixConfig {
    pub fine_resolution: u32,
    pub factor: u32,
    pub window: usize,
    pub coarse_size: Option<usize>,
}

impl MatrixConfig {
    /// Bin size after downsampling, `None` when it overflows `u32`.
    pub fn coarse_resolution(&self) -> Option<u32> {
        self.fine_resolution.checked_mul(self.factor)
    }
}

impl Default for MatrixConfig {
    fn default() -> Self {
        MatrixConfig {
            fine_resolution: DEFAULT_FINE_RESOLUTION,
            factor: DEFAULT_FACTOR,
            window: DEFAULT_WINDOW,
            coarse_size: None,
        }
    }
}

///
/// Parameters for every hicsig computation, loadable from a TOML file.
///
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct HicsigConfig {
    pub significance: SignificanceConfig,
    pub matrix: MatrixConfig,
}

impl HicsigConfig {
    pub fn band(&self) -> Result<DistanceBand> {
        DistanceBand::new(
            self.significance.min_distance,
            self.significance.max_distance,
        )
    }

    ///
    /// Check that all values are usable before any computation starts.
    ///
    pub fn validate(&self) -> Result<()> {
        self.band()?;

        let alpha = self.significance.alpha;
        if !(alpha > 0.0 && alpha <= 1.0) {
            return Err(ModelError::InvalidConfig(format!(
                "alpha must be in (0, 1], got {}",
                alpha
            )));
        }
        if let Some(fdr) = self.significance.fdr {
            if !(0.0..=1.0).contains(&fdr) {
                return Err(ModelError::InvalidConfig(format!(
                    "fdr must be in [0, 1], got {}",
                    fdr
                )));
            }
        }
        if self.matrix.fine_resolution == 0 {
            return Err(ModelError::ZeroBinSize);
        }
        if self.matrix.factor == 0 || self.matrix.factor % 2 == 0 {
            return Err(ModelError::InvalidConfig(format!(
                "downsampling factor must be odd, got {}",
                self.matrix.factor
            )));
        }
        if self.matrix.coarse_resolution().is_none() {
            return Err(ModelError::InvalidConfig(format!(
                "coarse resolution {} x {} is too large",
                self.matrix.fine_resolution, self.matrix.factor
            )));
        }
        Ok(())
    }
}

impl TryFrom<&Path> for HicsigConfig {
    type Error = ModelError;

    fn try_from(path: &Path) -> Result<Self> {
        let toml_str =
            read_to_string(path).map_err(|e| ModelError::ConfigRead(format!("{:?}: {}", path, e)))?;
        let config: HicsigConfig =
            toml::from_str(&toml_str).map_err(|e| ModelError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
