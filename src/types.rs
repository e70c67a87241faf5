//! Catalog records and the linear-algebra aliases used by the separator.

use nalgebra::{DMatrix, DVector};
use serde::Serialize;

use crate::statistics::ScoredOption;

/// Pixels x channels matrix; column `f` is channel `f`'s map.
pub type ChannelMatrix = DMatrix<f64>;

/// Per-channel weights, or one reconstructed map.
pub type MapVector = DVector<f64>;

/// One candidate multipole binning for the bispectrum estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BinningOption {
    /// Number of multipole bins.
    pub bins: u32,
    /// Modelling cost of this binning.
    pub complexity: f64,
    /// Number of triangle modes the binning resolves.
    pub modes: u32,
    /// Free parameters fitted per bin. The reference catalog uses 1.
    pub parameters: u32,
}

impl ScoredOption for BinningOption {
    fn mode_count(&self) -> f64 {
        f64::from(self.modes)
    }

    fn complexity(&self) -> f64 {
        self.complexity
    }

    fn parameter_count(&self) -> f64 {
        f64::from(self.parameters)
    }
}

/// One modelled instrumental or foreground effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SystematicEntry {
    /// Short identifier, e.g. `beam_asymmetry`.
    pub name: &'static str,
    /// 1-sigma contribution to f_NL.
    pub amplitude: f64,
    /// Modelling cost of this effect.
    pub complexity: f64,
}
