//! Statistical building blocks for the f_NL pipeline.
//!
//! - Seeded Gaussian fields (Box–Muller over a single xoshiro stream)
//! - Information-per-complexity option scoring
//! - Domain-checked `ln`/`sqrt` and quadrature sums

mod normal;
mod scoring;

pub use normal::GaussianField;
pub use scoring::{option_score, select_option, ScoredOption};

use crate::error::{AnalysisError, Result};

/// Natural log that rejects non-positive (or NaN) input.
pub fn checked_ln(name: &'static str, value: f64) -> Result<f64> {
    if value > 0.0 {
        Ok(value.ln())
    } else {
        Err(AnalysisError::invalid(name, value, "logarithm needs a positive value"))
    }
}

/// Square root that rejects negative (or NaN) input.
pub fn checked_sqrt(name: &'static str, value: f64) -> Result<f64> {
    if value >= 0.0 {
        Ok(value.sqrt())
    } else {
        Err(AnalysisError::invalid(name, value, "square root needs a non-negative value"))
    }
}

/// Combine independent 1-sigma terms in quadrature.
pub fn quadrature(name: &'static str, terms: &[f64]) -> Result<f64> {
    checked_sqrt(name, terms.iter().map(|t| t * t).sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_ln() {
        assert_eq!(checked_ln("x", 1.0), Ok(0.0));
        assert!(checked_ln("x", 0.0).is_err());
        assert!(checked_ln("x", -1.0).is_err());
        assert!(checked_ln("x", f64::NAN).is_err());
    }

    #[test]
    fn test_checked_sqrt() {
        assert_eq!(checked_sqrt("x", 0.0), Ok(0.0));
        assert_eq!(checked_sqrt("x", 4.0), Ok(2.0));
        assert!(checked_sqrt("x", -1e-12).is_err());
    }

    #[test]
    fn test_quadrature() {
        assert!((quadrature("x", &[3.0, 4.0]).unwrap() - 5.0).abs() < 1e-12);
        assert_eq!(quadrature("x", &[]), Ok(0.0));
    }
}
