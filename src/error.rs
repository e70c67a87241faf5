//! Error type shared by every pipeline stage.

use thiserror::Error;

/// Reasons a run can fail.
///
/// Every failure is terminal for the run: the pipeline is a single
/// deterministic pass, so there is nothing to retry or degrade to.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// Component separation was asked to combine zero channels.
    #[error("no frequency channels supplied")]
    NoChannels,

    /// Channel maps (or the configured pixel count) have zero samples.
    #[error("maps must contain at least one pixel")]
    EmptyMap,

    /// A channel map does not have the same length as the first one.
    #[error("channel {channel} has {actual} pixels, expected {expected}")]
    ChannelLengthMismatch {
        /// Index of the offending channel.
        channel: usize,
        /// Length of the first channel.
        expected: usize,
        /// Length of the offending channel.
        actual: usize,
    },

    /// A catalog that must hold at least one entry is empty.
    #[error("{catalog} catalog is empty")]
    EmptyCatalog {
        /// Which catalog ("binning", "systematics", ...).
        catalog: &'static str,
    },

    /// A numeric input is outside the domain of the operation using it.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        /// Name of the parameter.
        name: &'static str,
        /// Offending value.
        value: f64,
        /// What the value must satisfy.
        reason: &'static str,
    },
}

impl AnalysisError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        AnalysisError::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_violation() {
        let err = AnalysisError::ChannelLengthMismatch {
            channel: 3,
            expected: 1000,
            actual: 999,
        };
        assert_eq!(err.to_string(), "channel 3 has 999 pixels, expected 1000");

        let err = AnalysisError::invalid("mode_count", 0.0, "must be positive");
        assert!(err.to_string().contains("mode_count"));
        assert!(err.to_string().contains("must be positive"));
    }
}
