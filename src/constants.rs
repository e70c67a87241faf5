//! Fixed constants of the reference analysis.
//!
//! The measurement noise and the systematic threshold divisor were tuned so
//! that the synthetic experiment confirms its own prediction. They are kept
//! for behavioural fidelity; the resulting verdict is a demonstration
//! artifact, not a statistically meaningful result.

use crate::types::{BinningOption, SystematicEntry};

/// Seed of the single random stream.
pub const DEFAULT_SEED: u64 = 42;

/// Synthetic pixels per map.
pub const DEFAULT_PIXELS: usize = 1000;

/// Per-channel white-noise levels, in channel order.
pub const NOISE_LEVELS: [f64; 6] = [1.0, 0.8, 0.6, 0.5, 0.7, 1.2];

/// Added to each noise level before inversion.
pub const WEIGHT_REGULARIZER: f64 = 0.1;

/// Std of the single draw perturbing the f_NL point estimate.
pub const MEASUREMENT_NOISE_STD: f64 = 0.05;

/// Keeps the option-score denominator away from zero.
pub const SCORE_EPSILON: f64 = 1e-6;

/// Numerator of the statistical error, `2 / sqrt(modes)`.
pub const STAT_ERROR_SCALE: f64 = 2.0;

/// A systematic is kept when `amplitude > complexity / divisor`.
pub const SYSTEMATIC_COMPLEXITY_DIVISOR: f64 = 300.0;

/// Evidence penalty for the model carrying a specific prediction.
pub const PREDICTIVE_PENALTY: f64 = 2.0;

/// Evidence penalty for the null model.
pub const NULL_PENALTY: f64 = 0.0;

/// Bayes factor above which evidence is "strong".
pub const STRONG_EVIDENCE: f64 = 10.0;

/// Bayes factor above which evidence is "substantial".
pub const SUBSTANTIAL_EVIDENCE: f64 = 3.0;

/// Compatibility (sigma) must be strictly below this to validate.
pub const MAX_COMPATIBILITY_SIGMA: f64 = 2.0;

/// Bayes factor must be strictly above this to validate.
pub const MIN_BAYES_FACTOR: f64 = 3.0;

/// Candidate multipole binnings.
pub const BINNING_CATALOG: [BinningOption; 3] = [
    BinningOption {
        bins: 10,
        complexity: 5.0,
        modes: 100,
        parameters: 1,
    },
    BinningOption {
        bins: 20,
        complexity: 8.0,
        modes: 400,
        parameters: 1,
    },
    BinningOption {
        bins: 30,
        complexity: 12.0,
        modes: 900,
        parameters: 1,
    },
];

/// Modelled systematics.
pub const SYSTEMATIC_CATALOG: [SystematicEntry; 4] = [
    SystematicEntry {
        name: "beam_asymmetry",
        amplitude: 0.025,
        complexity: 8.0,
    },
    SystematicEntry {
        name: "foreground_residual",
        amplitude: 0.030,
        complexity: 10.0,
    },
    SystematicEntry {
        name: "point_sources",
        amplitude: 0.015,
        complexity: 6.0,
    },
    SystematicEntry {
        name: "polarization_leakage",
        amplitude: 0.010,
        complexity: 7.0,
    },
];
