//! Analysis stages that follow component separation.
//!
//! 1. **Estimator** ([`estimator`]): binning selection and f_NL point estimate
//! 2. **Systematics** ([`systematics`]): threshold-filtered quadrature budget
//! 3. **Bayes** ([`bayes`]): penalised chi-square model comparison
//! 4. **Validation** ([`validation`]): error combination, significance, verdict

mod bayes;
mod estimator;
mod systematics;
mod validation;

pub use bayes::{compare_evidence, log_evidence, EvidenceComparison};
pub use estimator::{estimate_f_nl, statistical_error, BispectrumEstimate};
pub use systematics::{systematic_budget, systematic_threshold, SystematicBudget, SystematicTerm};
pub use validation::{compatibility_sigma, validate, Validation};
