//! Reproducibility and shape guarantees of the full pipeline.

use cltm_sim::prelude::*;
use proptest::prelude::*;

#[test]
fn test_same_seed_same_outcome_for_every_kind() {
    for kind in DistributionKind::ALL {
        let config = Configuration::new(kind, 30, 500);
        let first = simulate(&config).unwrap();
        let second = simulate(&config).unwrap();
        assert_eq!(first, second, "{kind} outcome should be reproducible");
    }
}

#[test]
fn test_different_seeds_produce_different_means() {
    let base = Configuration::new(DistributionKind::Exponential, 30, 500);
    let a = simulate(&base.clone().with_seed(42)).unwrap();
    let b = simulate(&base.with_seed(123)).unwrap();
    assert_ne!(a.population, b.population);
    assert_ne!(a.means, b.means);
}

#[test]
fn test_default_seed_population_is_shared_across_entry_points() {
    let outcome = simulate(&Configuration::new(DistributionKind::Bimodal, 30, 100)).unwrap();
    let population = Population::from_seed(DistributionKind::Bimodal, DEFAULT_SEED).unwrap();
    assert_eq!(outcome.population, population);
}

#[test]
fn test_builder_and_simulate_agree() {
    let config = Configuration::new(DistributionKind::Uniform, 12, 800).with_seed(5);
    let built = SimulationBuilder::from_config(config.clone())
        .build()
        .unwrap()
        .into_outcome()
        .unwrap();
    assert_eq!(built, simulate(&config).unwrap());
}

#[test]
fn test_configuration_survives_json() {
    let config = Configuration::new(DistributionKind::Bimodal, 7, 4321).with_seed(17);
    let json = serde_json::to_string(&config).unwrap();
    let parsed: Configuration = serde_json::from_str(&json).unwrap();
    assert_eq!(simulate(&parsed).unwrap(), simulate(&config).unwrap());
}

#[test]
fn test_lengths_hold_at_range_bounds() {
    for (n, m) in [(1, 100), (100, 100), (1, 10_000), (100, 10_000)] {
        let outcome = simulate(&Configuration::new(DistributionKind::Exponential, n, m)).unwrap();
        assert_eq!(outcome.population.size(), POPULATION_SIZE);
        assert_eq!(outcome.means.len(), m, "n={n}, m={m}");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_lengths_hold_for_valid_inputs(
        kind_idx in 0usize..3,
        n in 1usize..=100,
        m in prop_oneof![100usize..=2000, 2001usize..=10_000],
        seed in any::<u64>(),
    ) {
        let kind = DistributionKind::ALL[kind_idx];
        let outcome = simulate(&Configuration::new(kind, n, m).with_seed(seed)).unwrap();
        prop_assert_eq!(outcome.population.size(), POPULATION_SIZE);
        prop_assert_eq!(outcome.means.len(), m);
        prop_assert!(outcome.means.iter().all(|x| x.is_finite()));
    }

    #[test]
    fn prop_out_of_range_sample_size_is_rejected(n in 101usize..10_000) {
        let config = Configuration::new(DistributionKind::Uniform, n, 2000);
        prop_assert!(
            matches!(
                simulate(&config),
                Err(SimulationError::Config(ConfigError::SampleSizeOutOfRange { .. }))
            ),
            "sample size {} should be rejected",
            n
        );
    }
}
