//! Toy Bayesian model comparison.
//!
//! Compares the predictive model (f_NL = prediction) against the null
//! model (f_NL = 0) using penalised chi-square "evidences":
//!
//! - predictive: `-0.5 χ²(estimate vs prediction, combined error) - 2`
//! - null: `-0.5 χ²(estimate vs 0, total error) - 0`
//!
//! The Bayes factor is `exp(evidence_predictive - evidence_null)`. This is not
//! a marginal likelihood; it only ranks the two hypotheses.

use serde::Serialize;
use tracing::debug;

use crate::constants::{NULL_PENALTY, PREDICTIVE_PENALTY};
use crate::error::{AnalysisError, Result};
use crate::result::EvidenceStrength;

/// Result of the model comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EvidenceComparison {
    /// χ² of the estimate against the prediction.
    pub chi2_predictive: f64,
    /// χ² of the estimate against zero.
    pub chi2_null: f64,
    /// Penalised log-evidence of the predictive model.
    pub log_evidence_predictive: f64,
    /// Penalised log-evidence of the null model.
    pub log_evidence_null: f64,
    /// `log_evidence_predictive - log_evidence_null`.
    pub log_bayes_factor: f64,
    /// `exp(log_bayes_factor)`.
    pub bayes_factor: f64,
    /// Verbal reading of the Bayes factor.
    pub strength: EvidenceStrength,
}

/// Compare the predictive and null models for one estimate.
///
/// `combined_error` scales the predictive χ² and `total_error` the null χ²;
/// both must be positive.
pub fn compare_evidence(
    estimate: f64,
    predicted: f64,
    total_error: f64,
    combined_error: f64,
) -> Result<EvidenceComparison> {
    positive_scale("total_error", total_error)?;
    positive_scale("combined_error", combined_error)?;

    let chi2_predictive = ((estimate - predicted).abs() / combined_error).powi(2);
    let chi2_null = (estimate / total_error).powi(2);

    let log_evidence_predictive = log_evidence(chi2_predictive, PREDICTIVE_PENALTY);
    let log_evidence_null = log_evidence(chi2_null, NULL_PENALTY);

    let log_bayes_factor = log_evidence_predictive - log_evidence_null;
    let bayes_factor = log_bayes_factor.exp();
    let strength = EvidenceStrength::from_bayes_factor(bayes_factor);

    debug!(
        log_evidence_predictive,
        log_evidence_null, bayes_factor, "model comparison"
    );

    Ok(EvidenceComparison {
        chi2_predictive,
        chi2_null,
        log_evidence_predictive,
        log_evidence_null,
        log_bayes_factor,
        bayes_factor,
        strength,
    })
}

/// `-0.5 χ² - penalty`.
pub fn log_evidence(chi2: f64, penalty: f64) -> f64 {
    -0.5 * chi2 - penalty
}

fn positive_scale(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AnalysisError::invalid(name, value, "error scale must be positive"))
    }
}
