use super::domain::{PreferenceFactor, Profile, ProfileId, Subject};
use super::weights::{FactorKey, WeightConfiguration};
use serde::Serialize;

/// Points removed when exactly one categorical attribute agrees.
pub const SINGLE_FACTOR_PENALTY: f64 = 50.0;

/// Share of an attribute's weight removed on mismatch when negative marking is on.
pub const NEGATIVE_MARKING_RATIO: f64 = 0.5;

/// Score of one unordered pair. `first` is always the lower profile id.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PairResult {
    pub first: ProfileId,
    pub second: ProfileId,
    pub score: f64,
    pub complementary_matches: u32,
    pub matched_factors: u32,
}

impl PairResult {
    pub fn is_eligible(&self) -> bool {
        self.complementary_matches > 0
    }
}

/// Which rule produced a score component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "factor")]
pub enum ComponentSource {
    Factor(&'static str),
    SingleFactorPenalty,
}

/// Discrete contribution to a pair score, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreComponent {
    pub source: ComponentSource,
    pub points: f64,
    pub note: String,
}

/// Full explanation of a pair score; component points sum to `result.score`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub result: PairResult,
    pub components: Vec<ScoreComponent>,
}

/// Stateless scorer that applies one weight configuration to profile pairs.
#[derive(Debug, Clone)]
pub struct MatchScorer<'a> {
    config: &'a WeightConfiguration,
}

impl<'a> MatchScorer<'a> {
    pub fn new(config: &'a WeightConfiguration) -> Self {
        Self { config }
    }

    pub fn configuration(&self) -> &WeightConfiguration {
        self.config
    }

    pub fn score(&self, a: &Profile, b: &Profile) -> PairResult {
        tally(a, b, self.config, |_| {})
    }

    pub fn explain(&self, a: &Profile, b: &Profile) -> ScoreBreakdown {
        let mut components = Vec::new();
        let result = tally(a, b, self.config, |component| components.push(component));
        ScoreBreakdown { result, components }
    }
}

/// Score a pair under `config`. Symmetric in `a` and `b`.
pub fn score(a: &Profile, b: &Profile, config: &WeightConfiguration) -> PairResult {
    MatchScorer::new(config).score(a, b)
}

fn tally<F>(a: &Profile, b: &Profile, config: &WeightConfiguration, mut record: F) -> PairResult
where
    F: FnMut(ScoreComponent),
{
    let weights = config.weights();
    let mut score = 0.0;
    let mut matched_factors = 0u32;

    for factor in PreferenceFactor::ordered() {
        let weight = weights.preference(factor);
        if a.preferences().matches_on(b.preferences(), factor) {
            score += weight;
            matched_factors += 1;
            record(ScoreComponent {
                source: ComponentSource::Factor(factor.key()),
                points: weight,
                note: format!(
                    "same {}: {}",
                    factor.label(),
                    a.preferences().label_for(factor)
                ),
            });
        } else if config.negative_marking() {
            let penalty = weight * NEGATIVE_MARKING_RATIO;
            score -= penalty;
            record(ScoreComponent {
                source: ComponentSource::Factor(factor.key()),
                points: -penalty,
                note: format!("different {}", factor.label()),
            });
        }
    }

    let a_learns: Vec<Subject> = a.learns_from(b).collect();
    let b_learns: Vec<Subject> = b.learns_from(a).collect();
    let complementary_matches = (a_learns.len() + b_learns.len()) as u32;
    if complementary_matches > 0 {
        let points = complementary_matches as f64 * weights.complementary_match();
        score += points;
        record(ScoreComponent {
            source: ComponentSource::Factor(FactorKey::ComplementaryMatch.as_key()),
            points,
            note: format!(
                "{complementary_matches} complementary skill(s): {}",
                describe_exchange(a, &a_learns, b, &b_learns)
            ),
        });
    }

    if matched_factors == 1 {
        score -= SINGLE_FACTOR_PENALTY;
        record(ScoreComponent {
            source: ComponentSource::SingleFactorPenalty,
            points: -SINGLE_FACTOR_PENALTY,
            note: "only one preference in common".to_string(),
        });
    }

    let (first, second) = if a.id() <= b.id() {
        (a.id(), b.id())
    } else {
        (b.id(), a.id())
    };

    PairResult {
        first,
        second,
        score,
        complementary_matches,
        matched_factors,
    }
}

fn describe_exchange(
    a: &Profile,
    a_learns: &[Subject],
    b: &Profile,
    b_learns: &[Subject],
) -> String {
    a_learns
        .iter()
        .map(|subject| format!("{} ({} teaches {})", subject.label(), b.id(), a.id()))
        .chain(
            b_learns
                .iter()
                .map(|subject| format!("{} ({} teaches {})", subject.label(), a.id(), b.id())),
        )
        .collect::<Vec<_>>()
        .join(", ")
}
