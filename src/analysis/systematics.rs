//! Systematic error budget.
//!
//! An effect enters the budget only if its amplitude strictly exceeds
//! `complexity / 300`: small effects that are costly to model are treated as
//! negligible. Exclusion is policy, not an error.

use serde::Serialize;
use tracing::{debug, trace};

use crate::constants::SYSTEMATIC_COMPLEXITY_DIVISOR;
use crate::error::{AnalysisError, Result};
use crate::statistics::checked_sqrt;
use crate::types::SystematicEntry;

/// One catalog entry after the threshold test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SystematicTerm {
    /// Effect name.
    pub name: &'static str,
    /// 1-sigma amplitude.
    pub amplitude: f64,
    /// `complexity / 300`.
    pub threshold: f64,
    /// Whether the amplitude cleared the threshold.
    pub included: bool,
}

/// Every term, in catalog order, plus the quadrature total of the included ones.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystematicBudget {
    /// Per-entry outcome.
    pub terms: Vec<SystematicTerm>,
    /// `sqrt(sum amplitude²)` over included terms.
    pub total: f64,
}

impl SystematicBudget {
    /// Terms that entered the budget.
    pub fn included(&self) -> impl Iterator<Item = &SystematicTerm> {
        self.terms.iter().filter(|t| t.included)
    }

    /// Terms that were dropped as negligible.
    pub fn excluded(&self) -> impl Iterator<Item = &SystematicTerm> {
        self.terms.iter().filter(|t| !t.included)
    }
}

/// Inclusion threshold for one entry.
pub fn systematic_threshold(entry: &SystematicEntry) -> f64 {
    entry.complexity / SYSTEMATIC_COMPLEXITY_DIVISOR
}

/// Apply the threshold test to each entry and combine the survivors.
pub fn systematic_budget(catalog: &[SystematicEntry]) -> Result<SystematicBudget> {
    if catalog.is_empty() {
        return Err(AnalysisError::EmptyCatalog {
            catalog: "systematics",
        });
    }

    let mut variance = 0.0;
    let mut terms = Vec::with_capacity(catalog.len());
    for entry in catalog {
        let threshold = systematic_threshold(entry);
        let included = entry.amplitude > threshold;
        if included {
            variance += entry.amplitude * entry.amplitude;
        } else {
            trace!(
                systematic = entry.name,
                amplitude = entry.amplitude,
                threshold,
                "systematic below threshold"
            );
        }
        terms.push(SystematicTerm {
            name: entry.name,
            amplitude: entry.amplitude,
            threshold,
            included,
        });
    }

    let total = checked_sqrt("systematic variance", variance)?;
    debug!(
        included = terms.iter().filter(|t| t.included).count(),
        total,
        "systematic budget"
    );

    Ok(SystematicBudget { terms, total })
}
