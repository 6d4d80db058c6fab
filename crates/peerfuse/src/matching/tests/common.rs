use std::collections::BTreeSet;

use crate::matching::domain::{
    Availability, Frequency, InteractionMode, PartnerLevel, PreferenceFactor, PrimaryGoal,
    Profile, ProfileId, SessionLength, StudyPersonality, StudyPreferences, Subject, TimeZone,
};
use crate::matching::simulation::{QualityTier, SimulationStatistics, TierShare};
use crate::matching::weights::{presets, WeightConfiguration};

pub(super) fn preferences() -> StudyPreferences {
    StudyPreferences {
        availability: Availability::Evening,
        preferred_mode: InteractionMode::VideoCall,
        primary_goal: PrimaryGoal::ClearBasics,
        preferred_frequency: Frequency::Weekly,
        partner_preference: PartnerLevel::NoPreference,
        session_length: SessionLength::OneHour,
        time_zone: TimeZone::Utc,
        study_personality: StudyPersonality::Collaborative,
    }
}

/// Differs from [`preferences`] on every attribute.
pub(super) fn contrasting_preferences() -> StudyPreferences {
    StudyPreferences {
        availability: Availability::Midday,
        preferred_mode: InteractionMode::ChatOnly,
        primary_goal: PrimaryGoal::SemesterExams,
        preferred_frequency: Frequency::Monthly,
        partner_preference: PartnerLevel::SameLevel,
        session_length: SessionLength::HalfHour,
        time_zone: TimeZone::UtcPlus1,
        study_personality: StudyPersonality::Competitive,
    }
}

/// Contrasting preferences that agree with [`preferences`] only on `shared`.
pub(super) fn sharing(shared: &[PreferenceFactor]) -> StudyPreferences {
    let base = preferences();
    let mut prefs = contrasting_preferences();
    for factor in shared {
        match factor {
            PreferenceFactor::Availability => prefs.availability = base.availability,
            PreferenceFactor::PreferredMode => prefs.preferred_mode = base.preferred_mode,
            PreferenceFactor::PrimaryGoal => prefs.primary_goal = base.primary_goal,
            PreferenceFactor::PreferredFrequency => {
                prefs.preferred_frequency = base.preferred_frequency
            }
            PreferenceFactor::PartnerPreference => {
                prefs.partner_preference = base.partner_preference
            }
            PreferenceFactor::SessionLength => prefs.session_length = base.session_length,
            PreferenceFactor::TimeZone => prefs.time_zone = base.time_zone,
            PreferenceFactor::StudyPersonality => {
                prefs.study_personality = base.study_personality
            }
        }
    }
    prefs
}

pub(super) fn profile(
    id: u32,
    strengths: &[Subject],
    weaknesses: &[Subject],
    preferences: StudyPreferences,
) -> Profile {
    Profile::new(
        ProfileId(id),
        format!("User{id}"),
        strengths.iter().copied().collect::<BTreeSet<_>>(),
        weaknesses.iter().copied().collect::<BTreeSet<_>>(),
        preferences,
    )
    .expect("fixture skills are disjoint")
}

pub(super) fn skills_first() -> WeightConfiguration {
    presets::skills_first().expect("preset validates")
}

/// `base` with a different complementary-match weight and name.
pub(super) fn with_complementary_weight(
    base: &WeightConfiguration,
    name: &str,
    weight: f64,
) -> WeightConfiguration {
    let mut spec = base.to_spec();
    spec.name = name.to_string();
    spec.weights.insert("complementaryMatch".to_string(), weight);
    WeightConfiguration::try_from(spec).expect("weights stay valid")
}

/// Same weights as `base` under another name.
pub(super) fn renamed(base: &WeightConfiguration, name: &str) -> WeightConfiguration {
    let mut spec = base.to_spec();
    spec.name = name.to_string();
    WeightConfiguration::try_from(spec).expect("weights stay valid")
}

/// Population in which nobody can teach anybody else.
pub(super) fn isolated_population() -> Vec<Profile> {
    vec![
        profile(1, &[Subject::Math], &[Subject::Physics], preferences()),
        profile(2, &[Subject::Math], &[Subject::Physics], preferences()),
        profile(3, &[Subject::Math, Subject::History], &[Subject::Biology], preferences()),
    ]
}

/// Hand-built statistics for verdict and composite arithmetic.
pub(super) fn statistics(
    configuration: &str,
    mean_score: f64,
    usable_80_pct: f64,
    tier_pcts: [f64; QualityTier::COUNT],
) -> SimulationStatistics {
    let tiers = QualityTier::ordered()
        .into_iter()
        .zip(tier_pcts)
        .map(|(tier, pct)| TierShare {
            tier,
            label: tier.label(),
            range: tier.range_label(),
            count: pct as u64,
            pct,
        })
        .collect();

    SimulationStatistics {
        configuration: configuration.to_string(),
        negative_marking: false,
        population_size: 100,
        evaluated_pairs: 4950,
        eligible_pairs: 100,
        filtered_pairs: 4850,
        mean_score,
        median_score: mean_score,
        min_score: 0.0,
        max_score: 250.0,
        tiers,
        usable_80_pct,
        recommended_120_pct: tier_pcts[0] + tier_pcts[1],
        mean_complementary_matches: 1.0,
        zero_complementary_pct: 0.0,
    }
}
