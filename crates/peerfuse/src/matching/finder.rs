//! Partner search for a single learner: ranked candidates and threshold checks.

use super::domain::{Profile, ProfileId};
use super::scoring::{MatchScorer, PairResult};
use super::simulation::{RECOMMENDED_THRESHOLD, USABLE_THRESHOLD};
use super::weights::WeightConfiguration;
use serde::Serialize;
use tracing::debug;

/// One scored partner for a target profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CandidateMatch {
    pub candidate: ProfileId,
    pub result: PairResult,
    pub level: CompatibilityLevel,
}

impl CandidateMatch {
    pub fn score(&self) -> f64 {
        self.result.score
    }
}

/// How a pair score sits against the usable and recommended thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompatibilityLevel {
    Recommended,
    Usable,
    BelowThreshold,
    /// Neither learner can teach the other.
    Ineligible,
}

impl CompatibilityLevel {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Recommended,
            Self::Usable,
            Self::BelowThreshold,
            Self::Ineligible,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Recommended => "Recommended",
            Self::Usable => "Usable",
            Self::BelowThreshold => "Below threshold",
            Self::Ineligible => "Ineligible",
        }
    }

    pub fn classify(result: &PairResult) -> Self {
        if !result.is_eligible() {
            Self::Ineligible
        } else if result.score >= RECOMMENDED_THRESHOLD {
            Self::Recommended
        } else if result.score >= USABLE_THRESHOLD {
            Self::Usable
        } else {
            Self::BelowThreshold
        }
    }

    pub fn is_match(self) -> bool {
        matches!(self, Self::Recommended | Self::Usable)
    }
}

/// Search over a population with one weight configuration.
#[derive(Debug, Clone)]
pub struct MatchFinder<'a> {
    scorer: MatchScorer<'a>,
}

impl<'a> MatchFinder<'a> {
    pub fn new(config: &'a WeightConfiguration) -> Self {
        Self {
            scorer: MatchScorer::new(config),
        }
    }

    /// Every eligible partner for `target`, best first. Equal scores keep population order.
    pub fn ranked(&self, target: &Profile, population: &[Profile]) -> Vec<CandidateMatch> {
        let mut matches: Vec<CandidateMatch> = population
            .iter()
            .filter(|candidate| candidate.id() != target.id())
            .map(|candidate| {
                let result = self.scorer.score(target, candidate);
                CandidateMatch {
                    candidate: candidate.id(),
                    result,
                    level: CompatibilityLevel::classify(&result),
                }
            })
            .filter(|candidate| candidate.result.is_eligible())
            .collect();
        matches.sort_by(|a, b| b.score().total_cmp(&a.score()));

        debug!(
            target = target.id().0,
            configuration = self.scorer.configuration().name(),
            candidates = matches.len(),
            "ranked partners"
        );
        matches
    }

    pub fn top(
        &self,
        target: &Profile,
        population: &[Profile],
        limit: usize,
    ) -> Vec<CandidateMatch> {
        let mut matches = self.ranked(target, population);
        matches.truncate(limit);
        matches
    }

    pub fn best(&self, target: &Profile, population: &[Profile]) -> Option<CandidateMatch> {
        self.ranked(target, population).into_iter().next()
    }

    pub fn compatibility(&self, a: &Profile, b: &Profile) -> CompatibilityLevel {
        CompatibilityLevel::classify(&self.scorer.score(a, b))
    }
}

/// Up to `limit` eligible partners for `target`, highest score first.
pub fn top_matches(
    target: &Profile,
    population: &[Profile],
    config: &WeightConfiguration,
    limit: usize,
) -> Vec<CandidateMatch> {
    MatchFinder::new(config).top(target, population, limit)
}

pub fn best_match(
    target: &Profile,
    population: &[Profile],
    config: &WeightConfiguration,
) -> Option<CandidateMatch> {
    MatchFinder::new(config).best(target, population)
}

/// True when the pair is eligible and scores at least `min_score`.
pub fn is_compatible(
    a: &Profile,
    b: &Profile,
    config: &WeightConfiguration,
    min_score: f64,
) -> bool {
    let result = MatchScorer::new(config).score(a, b);
    result.is_eligible() && result.score >= min_score
}
