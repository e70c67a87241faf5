//! Property tests for the separator, scorer and significance.

use proptest::prelude::*;

use cmb_fnl::analysis::{compare_evidence, compatibility_sigma};
use cmb_fnl::sky::{inverse_noise_weights, separate_components, ChannelMap};
use cmb_fnl::statistics::select_option;
use cmb_fnl::BinningOption;

proptest! {
    #[test]
    fn weights_are_positive_and_normalised(levels in prop::collection::vec(0.0f64..10.0, 1..12)) {
        let weights = inverse_noise_weights(&levels).unwrap();
        prop_assert_eq!(weights.len(), levels.len());
        prop_assert!(weights.iter().all(|w| *w > 0.0));
        prop_assert!((weights.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn identical_channels_reproduce_map(
        samples in prop::collection::vec(-10.0f64..10.0, 1..64),
        level in 0.0f64..5.0,
        copies in 1usize..8,
    ) {
        let channels = vec![ChannelMap::new(level, samples.clone()); copies];
        let separation = separate_components(&channels).unwrap();
        for (a, b) in separation.map.iter().zip(&samples) {
            prop_assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn singleton_catalog_returns_its_option(
        bins in 1u32..100,
        complexity in 0.0f64..50.0,
        modes in 1u32..10_000,
        parameters in 1u32..10,
    ) {
        let option = BinningOption { bins, complexity, modes, parameters };
        let catalog = [option];
        let (best, score) = select_option(&catalog).unwrap();
        prop_assert_eq!(*best, option);
        prop_assert!(score.is_finite());
    }

    #[test]
    fn larger_combined_error_lowers_compatibility(
        deviation in 0.001f64..1.0,
        combined in 0.01f64..1.0,
        growth in 1.01f64..10.0,
    ) {
        let predicted = -0.416;
        let estimate = predicted + deviation;
        let total = 0.077;
        let narrow = compatibility_sigma(estimate, predicted, combined).unwrap();
        let wide = compatibility_sigma(estimate, predicted, combined * growth).unwrap();
        prop_assert!(wide < narrow);

        let narrow = compare_evidence(estimate, predicted, total, combined).unwrap();
        let wide = compare_evidence(estimate, predicted, total, combined * growth).unwrap();
        prop_assert!(wide.chi2_predictive < narrow.chi2_predictive);
        prop_assert!(wide.log_bayes_factor >= narrow.log_bayes_factor);
    }
}
