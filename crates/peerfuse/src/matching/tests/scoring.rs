use super::common::*;
use crate::matching::domain::{PreferenceFactor, ProfileId, Subject};
use crate::matching::generator::generate_population;
use crate::matching::scoring::{score, ComponentSource, MatchScorer, SINGLE_FACTOR_PENALTY};
use crate::matching::weights::presets;
use proptest::prelude::*;

#[test]
fn mirrored_skills_with_identical_preferences_score_269() {
    let config = skills_first();
    let a = profile(1, &[Subject::Math], &[Subject::Physics], preferences());
    let b = profile(2, &[Subject::Physics], &[Subject::Math], preferences());

    let result = score(&a, &b, &config);

    assert_eq!(result.complementary_matches, 2);
    assert_eq!(result.matched_factors, 8);
    assert_eq!(result.score, 269.0);
    assert!(result.is_eligible());
}

#[test]
fn lone_shared_preference_is_penalised() {
    let config = skills_first();
    let a = profile(1, &[Subject::Math], &[Subject::Physics], preferences());
    let b = profile(
        2,
        &[Subject::Physics],
        &[Subject::Chemistry],
        sharing(&[PreferenceFactor::Availability]),
    );

    let result = score(&a, &b, &config);

    assert_eq!(result.matched_factors, 1);
    assert_eq!(result.complementary_matches, 1);
    assert_eq!(result.score, 30.0 - SINGLE_FACTOR_PENALTY + 80.0);
}

#[test]
fn two_shared_preferences_are_not_penalised() {
    let config = skills_first();
    let a = profile(1, &[Subject::Math], &[Subject::Physics], preferences());
    let b = profile(
        2,
        &[Subject::Physics],
        &[Subject::Chemistry],
        sharing(&[PreferenceFactor::Availability, PreferenceFactor::PreferredMode]),
    );

    let result = score(&a, &b, &config);

    assert_eq!(result.matched_factors, 2);
    assert_eq!(result.score, 30.0 + 15.0 + 80.0);
}

#[test]
fn no_shared_preferences_score_skills_only() {
    let config = skills_first();
    let a = profile(1, &[Subject::Math], &[Subject::Physics], preferences());
    let b = profile(2, &[Subject::Physics], &[Subject::History], contrasting_preferences());

    let result = score(&a, &b, &config);

    assert_eq!(result.matched_factors, 0);
    assert_eq!(result.score, 80.0);
}

#[test]
fn negative_marking_subtracts_half_of_each_mismatched_weight() {
    let config = skills_first().with_negative_marking();
    let a = profile(1, &[Subject::Math], &[Subject::Physics], preferences());
    let b = profile(
        2,
        &[Subject::Physics],
        &[Subject::Chemistry],
        sharing(&[PreferenceFactor::Availability, PreferenceFactor::PreferredMode]),
    );

    let result = score(&a, &b, &config);

    // mismatches: primaryGoal 12, preferredFrequency 12, four attributes at 10
    assert_eq!(result.score, 45.0 - 0.5 * 64.0 + 80.0);
}

#[test]
fn negative_marking_stacks_with_single_factor_penalty() {
    let config = skills_first().with_negative_marking();
    let a = profile(1, &[Subject::Math], &[Subject::Physics], preferences());
    let b = profile(
        2,
        &[Subject::Physics],
        &[Subject::Chemistry],
        sharing(&[PreferenceFactor::Availability]),
    );

    let result = score(&a, &b, &config);

    assert_eq!(result.score, 30.0 - 0.5 * 79.0 - 50.0 + 80.0);
    assert_eq!(result.score, 20.5);
}

#[test]
fn pairs_without_complementary_skills_are_ineligible() {
    let config = skills_first();
    let a = profile(1, &[Subject::Math], &[Subject::Physics], preferences());
    let b = profile(2, &[Subject::Math], &[Subject::Physics], preferences());

    let result = score(&a, &b, &config);

    assert_eq!(result.complementary_matches, 0);
    assert_eq!(result.score, 109.0);
    assert!(!result.is_eligible());
}

#[test]
fn result_lists_lower_id_first() {
    let config = skills_first();
    let a = profile(7, &[Subject::Math], &[Subject::Physics], preferences());
    let b = profile(3, &[Subject::Physics], &[Subject::Math], preferences());

    let result = score(&a, &b, &config);

    assert_eq!(result.first, ProfileId(3));
    assert_eq!(result.second, ProfileId(7));
}

#[test]
fn explanation_components_add_up_to_score() {
    let population = generate_population(5, 40).expect("population generates");
    let configs = [
        skills_first(),
        skills_first().with_negative_marking(),
        presets::all_equal().expect("preset validates"),
    ];

    for config in &configs {
        let scorer = MatchScorer::new(config);
        for a in &population[..10] {
            for b in &population[10..] {
                let breakdown = scorer.explain(a, b);
                let total: f64 = breakdown.components.iter().map(|c| c.points).sum();
                assert!(
                    (total - breakdown.result.score).abs() < 1e-9,
                    "{} vs {} under {}",
                    a.id(),
                    b.id(),
                    config.name()
                );
                assert_eq!(breakdown.result, scorer.score(a, b));
            }
        }
    }
}

#[test]
fn explanation_names_penalty_and_skill_exchange() {
    let config = skills_first();
    let a = profile(1, &[Subject::Math], &[Subject::Physics], preferences());
    let b = profile(
        2,
        &[Subject::Physics],
        &[Subject::Chemistry],
        sharing(&[PreferenceFactor::TimeZone]),
    );

    let breakdown = MatchScorer::new(&config).explain(&a, &b);

    assert!(breakdown
        .components
        .iter()
        .any(|c| c.source == ComponentSource::SingleFactorPenalty && c.points == -50.0));
    let exchange = breakdown
        .components
        .iter()
        .find(|c| c.source == ComponentSource::Factor("complementaryMatch"))
        .expect("complementary component present");
    assert!(exchange.note.contains("Physics (User2 teaches User1)"));
}

proptest! {
    #[test]
    fn scoring_is_symmetric(
        seed in any::<u64>(),
        first in 0usize..24,
        second in 0usize..24,
        preset in 0usize..30,
    ) {
        let population = generate_population(seed, 24).expect("population generates");
        let configs = presets::catalog().expect("presets validate");
        let config = &configs[preset % configs.len()];

        let forward = score(&population[first], &population[second], config);
        let backward = score(&population[second], &population[first], config);

        prop_assert_eq!(forward.score.to_bits(), backward.score.to_bits());
        prop_assert_eq!(forward, backward);
    }
}
