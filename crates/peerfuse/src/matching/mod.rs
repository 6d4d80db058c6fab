//! Pairwise learner matching: profiles, scoring, population simulation, and comparison
//! of weight configurations.

pub mod comparison;
pub mod domain;
pub mod finder;
pub mod generator;
pub mod scoring;
pub mod simulation;
pub mod weights;

#[cfg(test)]
mod tests;

pub use comparison::{
    assess_negative_marking, compare, compare_seeded, composite_score, ComparisonError,
    ComparisonReport, CompositeEntry, ConfigurationComparator, ConfigurationOutcome,
    NegativeMarkingAssessment, NegativeMarkingVerdict, RankEntry, Ranking, RankingMetric,
};
pub use domain::{
    Availability, Frequency, InteractionMode, PartnerLevel, PreferenceFactor, PrimaryGoal,
    Profile, ProfileError, ProfileId, SessionLength, StudyPersonality, StudyPreferences, Subject,
    TimeZone,
};
pub use finder::{
    best_match, is_compatible, top_matches, CandidateMatch, CompatibilityLevel, MatchFinder,
};
pub use generator::{generate_population, PopulationError};
pub use scoring::{score, MatchScorer, PairResult, ScoreBreakdown, ScoreComponent};
pub use simulation::{
    simulate, PopulationSimulator, QualityTier, SimulationError, SimulationStatistics,
};
pub use weights::{ConfigValidationError, FactorKey, FactorWeights, WeightConfiguration};
