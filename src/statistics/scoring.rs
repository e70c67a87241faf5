//! Information-per-complexity option scoring.

use crate::constants::SCORE_EPSILON;
use crate::error::{AnalysisError, Result};
use crate::statistics::checked_ln;

/// Anything the scorer can rank.
pub trait ScoredOption {
    /// Number of modes the option resolves. Must be positive.
    fn mode_count(&self) -> f64;

    /// Modelling cost of the option.
    fn complexity(&self) -> f64;

    /// Number of fitted parameters. Must be at least 1.
    fn parameter_count(&self) -> f64 {
        1.0
    }
}

/// Score one option:
///
/// `score = 2 ln(modes) / (complexity * ln(parameters) + ε)`
///
/// With a single parameter the denominator collapses to ε, which makes the
/// score grow with the mode count alone.
pub fn option_score<T: ScoredOption + ?Sized>(option: &T) -> Result<f64> {
    let info_gain = 2.0 * checked_ln("mode_count", option.mode_count())?;

    let parameters = option.parameter_count();
    if parameters.is_nan() || parameters < 1.0 {
        return Err(AnalysisError::invalid(
            "parameter_count",
            parameters,
            "must be at least 1",
        ));
    }
    let complexity = option.complexity();
    if !(complexity.is_finite() && complexity >= 0.0) {
        return Err(AnalysisError::invalid(
            "complexity",
            complexity,
            "must be non-negative and finite",
        ));
    }

    let cost = complexity * checked_ln("parameter_count", parameters)?;
    Ok(info_gain / (cost + SCORE_EPSILON))
}

/// Return the highest-scoring option. Ties go to the earliest option.
pub fn select_option<T: ScoredOption>(options: &[T]) -> Result<(&T, f64)> {
    let mut best: Option<(&T, f64)> = None;
    for option in options {
        let score = option_score(option)?;
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((option, score)),
        }
    }
    best.ok_or(AnalysisError::EmptyCatalog { catalog: "options" })
}
