use super::common::*;
use crate::matching::domain::{PreferenceFactor, Profile, ProfileId, Subject};
use crate::matching::finder::{
    best_match, is_compatible, top_matches, CandidateMatch, CompatibilityLevel, MatchFinder,
};
use crate::matching::generator::generate_population;
use crate::matching::simulation::{RECOMMENDED_THRESHOLD, USABLE_THRESHOLD};

fn target() -> Profile {
    profile(1, &[Subject::Math], &[Subject::Physics], preferences())
}

/// Scores against [`target`] under Skills First: 2 -> 269, 3 -> 80, 4 -> 60,
/// 5 -> ineligible, 6 -> 80.
fn neighbourhood() -> Vec<Profile> {
    vec![
        profile(3, &[Subject::Physics], &[Subject::History], contrasting_preferences()),
        profile(
            4,
            &[Subject::Physics],
            &[Subject::Chemistry],
            sharing(&[PreferenceFactor::Availability]),
        ),
        target(),
        profile(5, &[Subject::Math], &[Subject::Physics], preferences()),
        profile(2, &[Subject::Physics], &[Subject::Math], preferences()),
        profile(6, &[Subject::Physics], &[Subject::Biology], contrasting_preferences()),
    ]
}

fn ids(matches: &[CandidateMatch]) -> Vec<u32> {
    matches.iter().map(|candidate| candidate.candidate.0).collect()
}

#[test]
fn ranking_skips_target_and_ineligible_partners() {
    let config = skills_first();

    let matches = MatchFinder::new(&config).ranked(&target(), &neighbourhood());

    assert_eq!(ids(&matches), [2, 3, 6, 4]);
    assert!(matches.iter().all(|candidate| candidate.result.is_eligible()));
    assert!(matches
        .iter()
        .all(|candidate| candidate.candidate != ProfileId(1)));
}

#[test]
fn equal_scores_keep_population_order() {
    let config = skills_first();
    let mut population = neighbourhood();
    population.swap(0, 5);

    let matches = top_matches(&target(), &population, &config, 10);

    assert_eq!(ids(&matches), [2, 6, 3, 4]);
    assert_eq!(matches[1].score(), matches[2].score());
}

#[test]
fn limit_truncates_ranked_partners() {
    let config = skills_first();

    let matches = top_matches(&target(), &neighbourhood(), &config, 2);

    assert_eq!(ids(&matches), [2, 3]);
    assert_eq!(matches[0].score(), 269.0);
    assert_eq!(matches[0].level, CompatibilityLevel::Recommended);
    assert_eq!(matches[1].level, CompatibilityLevel::Usable);
    assert!(top_matches(&target(), &neighbourhood(), &config, 0).is_empty());
}

#[test]
fn best_match_is_top_ranked_or_none() {
    let config = skills_first();

    let best = best_match(&target(), &neighbourhood(), &config).expect("partner exists");
    assert_eq!(best.candidate, ProfileId(2));
    assert_eq!(best.result.first, ProfileId(1));

    assert_eq!(best_match(&target(), &[target()], &config), None);
    assert_eq!(best_match(&target(), &isolated_population(), &config), None);
}

#[test]
fn levels_follow_score_thresholds() {
    let config = skills_first();
    let finder = MatchFinder::new(&config);
    let population = neighbourhood();
    let level_of = |id: u32| {
        let other = population
            .iter()
            .find(|profile| profile.id() == ProfileId(id))
            .expect("fixture present");
        finder.compatibility(&target(), other)
    };

    assert_eq!(level_of(2), CompatibilityLevel::Recommended);
    assert_eq!(level_of(3), CompatibilityLevel::Usable);
    assert_eq!(level_of(4), CompatibilityLevel::BelowThreshold);
    assert_eq!(level_of(5), CompatibilityLevel::Ineligible);
    let matching: Vec<CompatibilityLevel> = CompatibilityLevel::ordered()
        .into_iter()
        .filter(|level| level.is_match())
        .collect();
    assert_eq!(
        matching,
        [CompatibilityLevel::Recommended, CompatibilityLevel::Usable]
    );
}

#[test]
fn compatibility_threshold_is_inclusive() {
    let config = skills_first();
    let a = target();
    let exactly_usable = profile(
        3,
        &[Subject::Physics],
        &[Subject::History],
        contrasting_preferences(),
    );
    let mirrored = profile(2, &[Subject::Physics], &[Subject::Math], preferences());
    let same_skills = profile(5, &[Subject::Math], &[Subject::Physics], preferences());

    assert!(is_compatible(&a, &exactly_usable, &config, USABLE_THRESHOLD));
    assert!(!is_compatible(&a, &exactly_usable, &config, RECOMMENDED_THRESHOLD));
    assert!(is_compatible(&a, &mirrored, &config, RECOMMENDED_THRESHOLD));
    // shared preferences alone never make a match
    assert!(!is_compatible(&a, &same_skills, &config, 0.0));
}

#[test]
fn generated_population_ranking_is_descending() {
    let config = skills_first();
    let population = generate_population(42, 120).expect("population generates");

    let matches = top_matches(&population[0], &population, &config, 15);

    assert!(matches.len() <= 15);
    assert!(matches
        .windows(2)
        .all(|pair| pair[0].score() >= pair[1].score()));
    assert!(matches
        .iter()
        .all(|candidate| candidate.candidate != population[0].id()));
}
