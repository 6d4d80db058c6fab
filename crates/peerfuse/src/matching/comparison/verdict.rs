use crate::matching::simulation::SimulationStatistics;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NegativeMarkingVerdict {
    /// Mean, usable share and quality spread all improved.
    Adopt,
    /// Mean or usable share dropped.
    Reject,
    Mixed,
}

impl NegativeMarkingVerdict {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Adopt => "adopt negative marking",
            Self::Reject => "keep the baseline",
            Self::Mixed => "mixed results; needs more data",
        }
    }
}

/// Candidate minus baseline for the figures that decide whether mismatch penalties help.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NegativeMarkingAssessment {
    pub baseline: String,
    pub candidate: String,
    pub mean_delta: f64,
    pub usable_80_delta: f64,
    pub quality_spread_delta: f64,
    pub min_score_delta: f64,
    pub unusable_delta: f64,
    pub verdict: NegativeMarkingVerdict,
}

pub fn assess_negative_marking(
    baseline: &SimulationStatistics,
    candidate: &SimulationStatistics,
) -> NegativeMarkingAssessment {
    let mean_delta = candidate.mean_score - baseline.mean_score;
    let usable_80_delta = candidate.usable_80_pct - baseline.usable_80_pct;
    let quality_spread_delta = candidate.quality_spread() - baseline.quality_spread();

    let verdict = if mean_delta > 0.0 && usable_80_delta > 0.0 && quality_spread_delta > 0.0 {
        NegativeMarkingVerdict::Adopt
    } else if mean_delta < 0.0 || usable_80_delta < 0.0 {
        NegativeMarkingVerdict::Reject
    } else {
        NegativeMarkingVerdict::Mixed
    };

    NegativeMarkingAssessment {
        baseline: baseline.configuration.clone(),
        candidate: candidate.configuration.clone(),
        mean_delta,
        usable_80_delta,
        quality_spread_delta,
        min_score_delta: candidate.min_score - baseline.min_score,
        unusable_delta: candidate.unusable_pct() - baseline.unusable_pct(),
        verdict,
    }
}
