//! Toy bispectrum estimate of f_NL.
//!
//! No triangle configurations are measured. The estimate is the prediction
//! plus a single measurement-noise draw, and the statistical error depends
//! only on the number of modes the selected binning resolves.

use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::constants::STAT_ERROR_SCALE;
use crate::error::{AnalysisError, Result};
use crate::statistics::{checked_sqrt, select_option, GaussianField};
use crate::types::BinningOption;

/// Point estimate and its nominal statistical error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BispectrumEstimate {
    /// Binning chosen by the option scorer.
    pub binning: BinningOption,
    /// Score of the chosen binning.
    pub score: f64,
    /// Estimated f_NL.
    pub f_nl: f64,
    /// `2 / sqrt(modes)` of the chosen binning.
    pub statistical_error: f64,
    /// Pixels in the map the estimate was made from.
    pub pixels: usize,
}

/// `2 / sqrt(modes)`: finer binning means more modes and a smaller error.
pub fn statistical_error(modes: u32) -> Result<f64> {
    if modes == 0 {
        return Err(AnalysisError::invalid("modes", 0.0, "must be positive"));
    }
    Ok(STAT_ERROR_SCALE / checked_sqrt("modes", f64::from(modes))?)
}

/// Select a binning and draw the f_NL point estimate.
///
/// Consumes exactly one sample from `field`.
pub fn estimate_f_nl<R: Rng>(
    field: &mut GaussianField<R>,
    map: &[f64],
    binning: &[BinningOption],
    predicted: f64,
    measurement_noise_std: f64,
) -> Result<BispectrumEstimate> {
    if map.is_empty() {
        return Err(AnalysisError::EmptyMap);
    }
    if binning.is_empty() {
        return Err(AnalysisError::EmptyCatalog { catalog: "binning" });
    }

    let (selected, score) = select_option(binning)?;
    let statistical_error = statistical_error(selected.modes)?;

    let f_nl = predicted + field.sample(0.0, measurement_noise_std);

    debug!(
        bins = selected.bins,
        modes = selected.modes,
        f_nl,
        statistical_error,
        "bispectrum estimate"
    );

    Ok(BispectrumEstimate {
        binning: *selected,
        score,
        f_nl,
        statistical_error,
        pixels: map.len(),
    })
}
