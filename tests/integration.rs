//! End-to-end integration tests.

use cmb_fnl::{AnalysisError, Conclusion, Config, FnlAnalysis, SystematicEntry};

/// The reference run validates its own prediction.
#[test]
fn reference_run_validates() {
    let report = cmb_fnl::run().expect("reference configuration is valid");
    let summary = report.summary;

    assert!((summary.estimate - (-0.416)).abs() < 0.25);
    assert!((summary.total_error - 2.0 / 30.0).abs() < 1e-15);
    assert!(summary.compatibility < 2.0);
    assert!(summary.bayes_factor > 3.0);
    assert_eq!(summary.conclusion, Conclusion::Validated);
}

/// Intermediate records agree with the summary.
#[test]
fn report_is_consistent() {
    let report = FnlAnalysis::new().run().unwrap();

    assert_eq!(report.seed, 42);
    assert_eq!(report.sky.pixels, 1000);
    assert_eq!(report.sky.noise_levels, vec![1.0, 0.8, 0.6, 0.5, 0.7, 1.2]);
    assert_eq!(report.weights.len(), report.sky.noise_levels.len());
    assert_eq!(report.summary.estimate, report.estimate.f_nl);
    assert_eq!(report.summary.total_error, report.validation.total_error);
    assert_eq!(report.summary.bayes_factor, report.validation.evidence.bayes_factor);
    assert!(report.validation.combined_error > report.validation.total_error);

    // No reference systematic clears its complexity / 300 threshold.
    assert_eq!(report.systematics.included().count(), 0);
    assert_eq!(report.systematics.excluded().count(), 4);
    assert_eq!(report.systematics.total, 0.0);
    assert!((report.validation.total_error - report.estimate.statistical_error).abs() < 1e-15);
}

/// A prediction the synthetic data cannot support is disfavored.
#[test]
fn shifted_prediction_is_disfavored() {
    let mut config = Config::default();
    config.params.f_nl_equil_pred = 0.0;
    config.params.f_nl_equil_uncertainty = 0.01;
    // Estimate lands near 0, so chi-square against the null is small and the
    // predictive model only pays its penalty.
    let report = FnlAnalysis::with_config(config).run().unwrap();
    assert!(report.summary.bayes_factor < 3.0);
    assert_eq!(report.summary.conclusion, Conclusion::Disfavored);
}

/// Shape errors surface before anything is computed.
#[test]
fn invalid_inputs_fail_fast() {
    let err = FnlAnalysis::new().noise_levels(vec![]).run().unwrap_err();
    assert_eq!(err, AnalysisError::NoChannels);

    let config = Config {
        systematics: Vec::<SystematicEntry>::new(),
        ..Config::default()
    };
    let err = FnlAnalysis::with_config(config).run().unwrap_err();
    assert_eq!(err, AnalysisError::EmptyCatalog { catalog: "systematics" });

    let err = FnlAnalysis::new().measurement_noise(f64::NAN).run().unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidParameter { .. }));
}

/// Test result serialization.
#[test]
fn result_serialization() {
    let report = FnlAnalysis::new().pixels(100).run().unwrap();

    let json = cmb_fnl::output::to_json(&report.summary).expect("Should serialize");
    assert!(json.contains("\"estimate\""));
    assert!(json.contains("\"total_error\""));
    assert!(json.contains("\"compatibility\""));
    assert!(json.contains("\"bayes_factor\""));
    assert!(json.contains("\"conclusion\""));

    let full = cmb_fnl::output::to_json_pretty(&report).expect("Should serialize");
    assert!(full.contains("\"weights\""));
    assert!(full.contains("\"validation\""));
}
