use super::common::*;
use crate::matching::domain::Subject;
use crate::matching::generator::generate_population;
use crate::matching::scoring::score;
use crate::matching::simulation::{simulate, PopulationSimulator, QualityTier, SimulationError};

#[test]
fn every_unordered_pair_is_evaluated_once() {
    let population = generate_population(42, 60).expect("population generates");
    let config = skills_first();

    let stats = simulate(&population, &config).expect("eligible pairs exist");

    assert_eq!(stats.evaluated_pairs, 60 * 59 / 2);
    assert_eq!(stats.population_size, 60);
    assert_eq!(stats.eligible_pairs + stats.filtered_pairs, stats.evaluated_pairs);
}

#[test]
fn statistics_match_brute_force_over_eligible_pairs() {
    let population = generate_population(9, 45).expect("population generates");
    let config = skills_first();

    let mut eligible = Vec::new();
    for (index, a) in population.iter().enumerate() {
        for b in &population[index + 1..] {
            let result = score(a, b, &config);
            if result.complementary_matches > 0 {
                eligible.push(result.score);
            }
        }
    }
    eligible.sort_by(f64::total_cmp);

    let stats = simulate(&population, &config).expect("eligible pairs exist");

    assert_eq!(stats.eligible_pairs, eligible.len() as u64);
    assert_eq!(stats.min_score, eligible[0]);
    assert_eq!(stats.max_score, eligible[eligible.len() - 1]);
    assert_eq!(stats.median_score, eligible[(eligible.len() - 1) / 2]);
    let mean = eligible.iter().sum::<f64>() / eligible.len() as f64;
    assert!((stats.mean_score - mean).abs() < 1e-9);
    let usable = eligible.iter().filter(|score| **score >= 80.0).count();
    assert!((stats.usable_80_pct - usable as f64 / eligible.len() as f64 * 100.0).abs() < 1e-9);
    assert!(stats.min_score <= stats.median_score && stats.median_score <= stats.max_score);
}

#[test]
fn eligible_set_never_contains_zero_complementary_pairs() {
    let population = generate_population(3, 80).expect("population generates");
    let stats = simulate(&population, &skills_first()).expect("eligible pairs exist");

    assert_eq!(stats.zero_complementary_pct, 0.0);
    assert!(stats.mean_complementary_matches >= 1.0);
    let tier_total: u64 = stats.tiers.iter().map(|share| share.count).sum();
    assert_eq!(tier_total, stats.eligible_pairs);
    let pct_total: f64 = stats.tiers.iter().map(|share| share.pct).sum();
    assert!((pct_total - 100.0).abs() < 1e-9);
}

#[test]
fn results_do_not_depend_on_worker_count() {
    let population = generate_population(21, 120).expect("population generates");
    let config = skills_first().with_negative_marking();

    let single = PopulationSimulator::with_workers(1)
        .expect("pool builds")
        .simulate(&population, &config)
        .expect("eligible pairs exist");
    let many = PopulationSimulator::with_workers(6)
        .expect("pool builds")
        .simulate(&population, &config)
        .expect("eligible pairs exist");
    let global = simulate(&population, &config).expect("eligible pairs exist");

    assert_eq!(single, many);
    assert_eq!(single.mean_score.to_bits(), many.mean_score.to_bits());
    assert_eq!(single, global);
}

#[test]
fn simulation_is_reproducible_for_a_seed() {
    let config = skills_first();
    let first = simulate(&generate_population(77, 90).expect("generates"), &config)
        .expect("eligible pairs exist");
    let second = simulate(&generate_population(77, 90).expect("generates"), &config)
        .expect("eligible pairs exist");

    assert_eq!(first, second);
}

#[test]
fn raising_complementary_weight_never_lowers_mean() {
    let population = generate_population(42, 100).expect("population generates");
    let base = skills_first();
    let mut previous = f64::MIN;

    for weight in [40.0, 80.0, 81.0, 120.0] {
        let config = with_complementary_weight(&base, &format!("Skills {weight}"), weight);
        let stats = simulate(&population, &config).expect("eligible pairs exist");
        assert!(stats.mean_score >= previous, "mean dropped at weight {weight}");
        previous = stats.mean_score;
    }
}

#[test]
fn population_without_complementary_pairs_is_an_error() {
    let population = isolated_population();

    let err = simulate(&population, &skills_first()).expect_err("nothing is eligible");

    match err {
        SimulationError::EmptyResult {
            configuration,
            evaluated_pairs,
        } => {
            assert_eq!(configuration, "Skills First");
            assert_eq!(evaluated_pairs, 3);
        }
        other => panic!("expected empty result, got {other:?}"),
    }
}

#[test]
fn single_eligible_pair_is_its_own_median() {
    let population = vec![
        profile(1, &[Subject::Math], &[Subject::Physics], preferences()),
        profile(2, &[Subject::Physics], &[Subject::Math], preferences()),
    ];

    let stats = simulate(&population, &skills_first()).expect("one eligible pair");

    assert_eq!(stats.eligible_pairs, 1);
    assert_eq!(stats.mean_score, 269.0);
    assert_eq!(stats.median_score, 269.0);
    assert_eq!(stats.score_range(), 0.0);
    assert_eq!(stats.tier_pct(QualityTier::Excellent), 100.0);
    assert_eq!(stats.recommended_120_pct, 100.0);
    assert_eq!(stats.eligibility_pct(), 100.0);
}
