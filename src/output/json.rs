//! JSON serialization for analysis results.

use crate::result::{AnalysisReport, ResultSummary};

/// Serialize a ResultSummary to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for ResultSummary).
pub fn to_json(summary: &ResultSummary) -> Result<String, serde_json::Error> {
    serde_json::to_string(summary)
}

/// Serialize a full AnalysisReport to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for AnalysisReport).
pub fn to_json_pretty(report: &AnalysisReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::Conclusion;

    fn make_summary() -> ResultSummary {
        ResultSummary {
            estimate: -0.5,
            total_error: 0.25,
            compatibility: 0.75,
            bayes_factor: 12.0,
            conclusion: Conclusion::Validated,
        }
    }

    #[test]
    fn test_to_json() {
        let json = to_json(&make_summary()).unwrap();
        assert!(json.contains("\"estimate\":-0.5"));
        assert!(json.contains("\"conclusion\":\"VALIDATED\""));
    }

    #[test]
    fn test_overflowed_bayes_factor_is_null() {
        let summary = ResultSummary {
            bayes_factor: f64::INFINITY,
            ..make_summary()
        };
        let json = to_json(&summary).unwrap();
        assert!(json.contains("\"bayes_factor\":null"));
    }

    #[test]
    fn test_to_json_pretty() {
        let report = crate::FnlAnalysis::new().pixels(32).run().unwrap();
        let json = to_json_pretty(&report).unwrap();
        assert!(json.contains('\n'));
        assert!(json.contains("\"systematics\""));
        assert!(json.contains("\"foreground_residual\""));
        assert!(json.contains("\"included\": false"));
    }
}
