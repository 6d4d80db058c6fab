//! Deterministic synthetic population of learner profiles.

use super::domain::{
    Availability, Frequency, InteractionMode, PartnerLevel, PrimaryGoal, Profile, ProfileId,
    SessionLength, StudyPersonality, StudyPreferences, Subject, TimeZone,
};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeSet;
use tracing::debug;

pub const MIN_POPULATION_SIZE: usize = 2;

const MAX_TAGS_PER_SIDE: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PopulationError {
    #[error("population size {requested} is too small to form a pair (minimum 2)")]
    InvalidSize { requested: usize },
}

/// Generate `size` profiles from `seed`. The same `(seed, size)` always yields the same
/// population, independent of any other generator in the process.
pub fn generate_population(seed: u64, size: usize) -> Result<Vec<Profile>, PopulationError> {
    if size < MIN_POPULATION_SIZE {
        return Err(PopulationError::InvalidSize { requested: size });
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut population = Vec::with_capacity(size);
    for index in 1..=size {
        let id = ProfileId(index as u32);
        population.push(generate_profile(&mut rng, id));
    }

    debug!(seed, size, "generated synthetic population");
    Ok(population)
}

fn generate_profile<R: Rng>(rng: &mut R, id: ProfileId) -> Profile {
    let subjects = Subject::ordered();

    let strength_count = rng.gen_range(1..=MAX_TAGS_PER_SIDE);
    let strengths: BTreeSet<Subject> = subjects
        .choose_multiple(rng, strength_count)
        .copied()
        .collect();

    let remaining: Vec<Subject> = subjects
        .iter()
        .copied()
        .filter(|subject| !strengths.contains(subject))
        .collect();
    let weakness_count = rng.gen_range(1..=MAX_TAGS_PER_SIDE);
    let weaknesses: BTreeSet<Subject> = remaining
        .choose_multiple(rng, weakness_count)
        .copied()
        .collect();

    let preferences = StudyPreferences {
        availability: pick(rng, &Availability::ordered()),
        preferred_mode: pick(rng, &InteractionMode::ordered()),
        primary_goal: pick(rng, &PrimaryGoal::ordered()),
        preferred_frequency: pick(rng, &Frequency::ordered()),
        session_length: pick(rng, &SessionLength::ordered()),
        partner_preference: pick(rng, &PartnerLevel::ordered()),
        time_zone: pick(rng, &TimeZone::ordered()),
        study_personality: pick(rng, &StudyPersonality::ordered()),
    };

    Profile::from_disjoint(id, id.to_string(), strengths, weaknesses, preferences)
}

fn pick<R: Rng, T: Copy>(rng: &mut R, options: &[T]) -> T {
    options[rng.gen_range(0..options.len())]
}
