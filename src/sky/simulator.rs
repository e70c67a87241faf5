//! Synthetic multi-frequency sky with an injected non-Gaussian component.

use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::statistics::GaussianField;

/// One simulated frequency channel: sky plus white noise at `noise_level`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelMap {
    noise_level: f64,
    samples: Vec<f64>,
}

impl ChannelMap {
    /// Build a channel map from existing samples.
    pub fn new(noise_level: f64, samples: Vec<f64>) -> Self {
        Self {
            noise_level,
            samples,
        }
    }

    /// White-noise std of this channel.
    pub fn noise_level(&self) -> f64 {
        self.noise_level
    }

    /// Pixel values.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Number of pixels.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if the map has no pixels.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Output of [`simulate_sky`].
#[derive(Debug, Clone, PartialEq)]
pub struct SkySimulation {
    /// Noiseless sky, `x + f_NL (x² - 1)` per pixel.
    pub sky: Vec<f64>,
    /// One map per noise level, in the order the levels were given.
    pub channels: Vec<ChannelMap>,
}

impl SkySimulation {
    /// Noise levels in channel order.
    pub fn noise_levels(&self) -> Vec<f64> {
        self.channels.iter().map(ChannelMap::noise_level).collect()
    }
}

/// `x² - 1` per sample: a mean-zero chi-square-like companion field.
pub fn non_gaussian_companion(baseline: &[f64]) -> Vec<f64> {
    baseline.iter().map(|x| x * x - 1.0).collect()
}

/// Simulate the noiseless sky and one noisy map per channel.
///
/// Draws `pixels` baseline samples, then `pixels` noise samples for each
/// channel in order.
pub fn simulate_sky<R: Rng>(
    field: &mut GaussianField<R>,
    pixels: usize,
    f_nl: f64,
    noise_levels: &[f64],
) -> SkySimulation {
    let baseline = field.field(pixels, 0.0, 1.0);
    let companion = non_gaussian_companion(&baseline);
    let sky: Vec<f64> = baseline
        .iter()
        .zip(&companion)
        .map(|(x, ng)| x + f_nl * ng)
        .collect();

    let channels = noise_levels
        .iter()
        .map(|&level| {
            let noise = field.field(pixels, 0.0, level);
            let samples = sky.iter().zip(&noise).map(|(s, n)| s + n).collect();
            ChannelMap::new(level, samples)
        })
        .collect::<Vec<_>>();

    debug!(pixels, channels = channels.len(), f_nl, "simulated sky");

    SkySimulation { sky, channels }
}
