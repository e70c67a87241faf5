//! Inverse-noise-weighted component separation.

use serde::Serialize;
use tracing::debug;

use crate::constants::WEIGHT_REGULARIZER;
use crate::error::{AnalysisError, Result};
use crate::sky::ChannelMap;
use crate::types::{ChannelMatrix, MapVector};

/// Reconstructed map plus the weights that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Separation {
    /// Weighted sum of the channel maps, one value per pixel.
    pub map: Vec<f64>,
    /// Normalised channel weights; they sum to 1.
    pub weights: Vec<f64>,
}

/// Weights `1 / (noise + 0.1)`, normalised to sum to 1.
pub fn inverse_noise_weights(noise_levels: &[f64]) -> Result<Vec<f64>> {
    if noise_levels.is_empty() {
        return Err(AnalysisError::NoChannels);
    }

    let mut weights = Vec::with_capacity(noise_levels.len());
    for &level in noise_levels {
        let denominator = level + WEIGHT_REGULARIZER;
        if !(denominator.is_finite() && denominator > 0.0) {
            return Err(AnalysisError::invalid(
                "noise_level",
                level,
                "noise level plus regulariser must be positive",
            ));
        }
        weights.push(1.0 / denominator);
    }

    let total: f64 = weights.iter().sum();
    Ok(weights.into_iter().map(|w| w / total).collect())
}

/// Combine channel maps into a single reconstructed map.
///
/// All channels must have the same, non-zero length.
pub fn separate_components(channels: &[ChannelMap]) -> Result<Separation> {
    let first = channels.first().ok_or(AnalysisError::NoChannels)?;
    let pixels = first.len();
    if pixels == 0 {
        return Err(AnalysisError::EmptyMap);
    }
    for (channel, map) in channels.iter().enumerate() {
        if map.len() != pixels {
            return Err(AnalysisError::ChannelLengthMismatch {
                channel,
                expected: pixels,
                actual: map.len(),
            });
        }
    }

    let noise_levels: Vec<f64> = channels.iter().map(ChannelMap::noise_level).collect();
    let weights = inverse_noise_weights(&noise_levels)?;

    let stack = ChannelMatrix::from_fn(pixels, channels.len(), |i, f| channels[f].samples()[i]);
    let map: MapVector = &stack * MapVector::from_column_slice(&weights);

    debug!(channels = channels.len(), pixels, ?weights, "separated components");

    Ok(Separation {
        map: map.iter().copied().collect(),
        weights,
    })
}
