//! Result types produced by a run.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::{BispectrumEstimate, SystematicBudget, Validation};
use crate::config::ParameterSet;
use crate::constants::{
    MAX_COMPATIBILITY_SIGMA, MIN_BAYES_FACTOR, STRONG_EVIDENCE, SUBSTANTIAL_EVIDENCE,
};

/// Final output record of a run.
///
/// Write-only: an overflowed `bayes_factor` serializes as JSON `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResultSummary {
    /// Estimated f_NL.
    pub estimate: f64,
    /// Statistical and systematic error in quadrature.
    pub total_error: f64,
    /// Distance from the prediction in units of the combined error.
    pub compatibility: f64,
    /// Predictive-vs-null Bayes factor.
    pub bayes_factor: f64,
    /// Binary verdict.
    pub conclusion: Conclusion,
}

/// Verdict on the prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Conclusion {
    /// Compatible within 2 sigma and Bayes factor above 3.
    Validated,
    /// Anything else.
    Disfavored,
}

impl Conclusion {
    /// `Validated` iff `compatibility < 2.0` and `bayes_factor > 3.0`.
    pub fn decide(compatibility: f64, bayes_factor: f64) -> Self {
        if compatibility < MAX_COMPATIBILITY_SIGMA && bayes_factor > MIN_BAYES_FACTOR {
            Conclusion::Validated
        } else {
            Conclusion::Disfavored
        }
    }

    /// Upper-case label used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Conclusion::Validated => "VALIDATED",
            Conclusion::Disfavored => "DISFAVORED",
        }
    }
}

impl fmt::Display for Conclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verbal reading of a Bayes factor. Reported only; the verdict does not use it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvidenceStrength {
    /// Bayes factor > 10.
    Strong,
    /// Bayes factor > 3.
    Substantial,
    /// Anything else.
    Inconclusive,
}

impl EvidenceStrength {
    /// Classify a Bayes factor.
    pub fn from_bayes_factor(bayes_factor: f64) -> Self {
        if bayes_factor > STRONG_EVIDENCE {
            EvidenceStrength::Strong
        } else if bayes_factor > SUBSTANTIAL_EVIDENCE {
            EvidenceStrength::Substantial
        } else {
            EvidenceStrength::Inconclusive
        }
    }
}

/// Shape of the simulated sky.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkySummary {
    /// Pixels per map.
    pub pixels: usize,
    /// Noise level per channel.
    pub noise_levels: Vec<f64>,
    /// f_NL injected into the noiseless sky.
    pub injected_f_nl: f64,
}

/// Every intermediate record of a run plus its [`ResultSummary`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// Seed of the random stream.
    pub seed: u64,
    /// Prediction under test.
    pub params: ParameterSet,
    /// Simulated sky.
    pub sky: SkySummary,
    /// Normalised component-separation weights.
    pub weights: Vec<f64>,
    /// Binning choice and point estimate.
    pub estimate: BispectrumEstimate,
    /// Systematic error budget.
    pub systematics: SystematicBudget,
    /// Error combination and model comparison.
    pub validation: Validation,
    /// Final record.
    pub summary: ResultSummary,
}
