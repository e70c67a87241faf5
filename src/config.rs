//! Configuration for an f_NL analysis run.

use serde::{Deserialize, Serialize};

use crate::constants::{
    BINNING_CATALOG, DEFAULT_PIXELS, DEFAULT_SEED, MEASUREMENT_NOISE_STD, NOISE_LEVELS,
    SYSTEMATIC_CATALOG,
};
use crate::error::{AnalysisError, Result};
use crate::types::{BinningOption, SystematicEntry};

/// Theory parameters the run is validated against.
///
/// `g`, `lambda` and `kappa` belong to the underlying model but play no
/// role in the pipeline; they are carried so reports can show them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    /// Predicted equilateral f_NL.
    pub f_nl_equil_pred: f64,
    /// 1-sigma theory uncertainty on the prediction.
    pub f_nl_equil_uncertainty: f64,
    /// Auxiliary coupling.
    pub g: f64,
    /// Auxiliary coupling.
    pub lambda: f64,
    /// Auxiliary coupling.
    pub kappa: f64,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            f_nl_equil_pred: -0.416,
            f_nl_equil_uncertainty: 0.08,
            g: 2.103e-3,
            lambda: 1.397e-5,
            kappa: 1.997e-4,
        }
    }
}

/// Configuration options for [`FnlAnalysis`](crate::FnlAnalysis).
#[derive(Debug, Clone)]
pub struct Config {
    /// Seed of the random stream (default: 42).
    pub seed: u64,

    /// Pixels per synthetic map (default: 1,000).
    pub pixels: usize,

    /// Noise level per frequency channel; one map is simulated per entry.
    pub noise_levels: Vec<f64>,

    /// Std of the measurement-noise draw added to the estimate (default: 0.05).
    pub measurement_noise_std: f64,

    /// Prediction under test.
    pub params: ParameterSet,

    /// Candidate binnings for the estimator.
    pub binning: Vec<BinningOption>,

    /// Systematic effects considered for the error budget.
    pub systematics: Vec<SystematicEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            pixels: DEFAULT_PIXELS,
            noise_levels: NOISE_LEVELS.to_vec(),
            measurement_noise_std: MEASUREMENT_NOISE_STD,
            params: ParameterSet::default(),
            binning: BINNING_CATALOG.to_vec(),
            systematics: SYSTEMATIC_CATALOG.to_vec(),
        }
    }
}

impl Config {
    /// Check every shape and domain precondition before any random draw.
    pub fn validate(&self) -> Result<()> {
        if self.pixels == 0 {
            return Err(AnalysisError::EmptyMap);
        }
        if self.noise_levels.is_empty() {
            return Err(AnalysisError::NoChannels);
        }
        for &level in &self.noise_levels {
            non_negative("noise_level", level)?;
        }
        non_negative("measurement_noise_std", self.measurement_noise_std)?;

        if !(self.params.f_nl_equil_uncertainty.is_finite()
            && self.params.f_nl_equil_uncertainty > 0.0)
        {
            return Err(AnalysisError::invalid(
                "f_nl_equil_uncertainty",
                self.params.f_nl_equil_uncertainty,
                "must be positive and finite",
            ));
        }
        if !self.params.f_nl_equil_pred.is_finite() {
            return Err(AnalysisError::invalid(
                "f_nl_equil_pred",
                self.params.f_nl_equil_pred,
                "must be finite",
            ));
        }

        if self.binning.is_empty() {
            return Err(AnalysisError::EmptyCatalog { catalog: "binning" });
        }
        for option in &self.binning {
            if option.modes == 0 {
                return Err(AnalysisError::invalid("modes", 0.0, "must be positive"));
            }
            if option.parameters == 0 {
                return Err(AnalysisError::invalid("parameters", 0.0, "must be at least 1"));
            }
            non_negative("binning complexity", option.complexity)?;
        }

        if self.systematics.is_empty() {
            return Err(AnalysisError::EmptyCatalog {
                catalog: "systematics",
            });
        }
        for entry in &self.systematics {
            non_negative("systematic amplitude", entry.amplitude)?;
            non_negative("systematic complexity", entry.complexity)?;
        }
        Ok(())
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(AnalysisError::invalid(
            name,
            value,
            "must be non-negative and finite",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.seed, 42);
        assert_eq!(config.pixels, 1000);
        assert_eq!(config.noise_levels.len(), 6);
    }

    #[test]
    fn test_rejects_empty_shapes() {
        let config = Config {
            pixels: 0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(AnalysisError::EmptyMap));

        let config = Config {
            noise_levels: Vec::new(),
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(AnalysisError::NoChannels));

        let config = Config {
            binning: Vec::new(),
            ..Config::default()
        };
        assert_eq!(
            config.validate(),
            Err(AnalysisError::EmptyCatalog { catalog: "binning" })
        );
    }

    #[test]
    fn test_rejects_bad_numbers() {
        let config = Config {
            noise_levels: vec![0.5, -0.2],
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(AnalysisError::InvalidParameter {
                name: "noise_level",
                ..
            })
        ));

        let mut config = Config::default();
        config.params.f_nl_equil_uncertainty = 0.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.binning[1].parameters = 0;
        assert!(config.validate().is_err());
    }
}
