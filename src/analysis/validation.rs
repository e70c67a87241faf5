//! Error combination, significance and the final verdict.

use serde::Serialize;
use tracing::debug;

use crate::analysis::{compare_evidence, BispectrumEstimate, EvidenceComparison, SystematicBudget};
use crate::config::ParameterSet;
use crate::error::{AnalysisError, Result};
use crate::result::Conclusion;
use crate::statistics::quadrature;

/// Everything computed while validating the estimate against the prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Validation {
    /// `sqrt(stat² + sys²)`.
    pub total_error: f64,
    /// `sqrt(total² + prediction_uncertainty²)`.
    pub combined_error: f64,
    /// `|estimate - prediction|`.
    pub deviation: f64,
    /// `deviation / combined_error`, in sigma.
    pub compatibility: f64,
    /// Predictive vs null model comparison.
    pub evidence: EvidenceComparison,
    /// Final verdict.
    pub conclusion: Conclusion,
}

/// Compatibility in sigma: `|estimate - predicted| / combined_error`.
pub fn compatibility_sigma(estimate: f64, predicted: f64, combined_error: f64) -> Result<f64> {
    if !(combined_error.is_finite() && combined_error > 0.0) {
        return Err(AnalysisError::invalid(
            "combined_error",
            combined_error,
            "error scale must be positive",
        ));
    }
    Ok((estimate - predicted).abs() / combined_error)
}

/// Combine statistical, systematic and theory errors and reach a verdict.
pub fn validate(
    estimate: &BispectrumEstimate,
    budget: &SystematicBudget,
    params: &ParameterSet,
) -> Result<Validation> {
    let total_error = quadrature("total_error", &[estimate.statistical_error, budget.total])?;
    let combined_error = quadrature(
        "combined_error",
        &[total_error, params.f_nl_equil_uncertainty],
    )?;

    let predicted = params.f_nl_equil_pred;
    let deviation = (estimate.f_nl - predicted).abs();
    let compatibility = compatibility_sigma(estimate.f_nl, predicted, combined_error)?;
    let evidence = compare_evidence(estimate.f_nl, predicted, total_error, combined_error)?;
    let conclusion = Conclusion::decide(compatibility, evidence.bayes_factor);

    debug!(
        total_error,
        combined_error,
        compatibility,
        bayes_factor = evidence.bayes_factor,
        %conclusion,
        "validation"
    );

    Ok(Validation {
        total_error,
        combined_error,
        deviation,
        compatibility,
        evidence,
        conclusion,
    })
}
