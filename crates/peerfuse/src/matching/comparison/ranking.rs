use crate::matching::simulation::SimulationStatistics;
use serde::Serialize;
use std::cmp::Ordering;

const USABLE_WEIGHT: f64 = 1.0;
const MEAN_WEIGHT: f64 = 0.5;
const EXCELLENT_WEIGHT: f64 = 0.3;
const NOT_UNUSABLE_WEIGHT: f64 = 0.2;

/// Statistic a ranking orders configurations by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingMetric {
    MeanScore,
    Usable80,
    Excellent,
    MedianScore,
    Recommended120,
}

impl RankingMetric {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::MeanScore,
            Self::Usable80,
            Self::Excellent,
            Self::MedianScore,
            Self::Recommended120,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::MeanScore => "Average score",
            Self::Usable80 => "Usable matches (>=80)",
            Self::Excellent => "Excellent matches (>=150)",
            Self::MedianScore => "Median score",
            Self::Recommended120 => "Recommended matches (>=120)",
        }
    }

    pub fn value(self, statistics: &SimulationStatistics) -> f64 {
        match self {
            Self::MeanScore => statistics.mean_score,
            Self::Usable80 => statistics.usable_80_pct,
            Self::Excellent => statistics.excellent_pct(),
            Self::MedianScore => statistics.median_score,
            Self::Recommended120 => statistics.recommended_120_pct,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankEntry {
    pub rank: usize,
    pub configuration: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranking {
    pub metric: RankingMetric,
    pub label: &'static str,
    pub entries: Vec<RankEntry>,
}

impl Ranking {
    pub fn leader(&self) -> Option<&RankEntry> {
        self.entries.first()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositeEntry {
    pub rank: usize,
    pub configuration: String,
    pub composite: f64,
    pub usable_80_pct: f64,
    pub mean_score: f64,
    pub excellent_pct: f64,
    pub unusable_pct: f64,
}

/// `usable80% × 1.0 + mean × 0.5 + excellent% × 0.3 + (100 − unusable%) × 0.2`
pub fn composite_score(statistics: &SimulationStatistics) -> f64 {
    statistics.usable_80_pct * USABLE_WEIGHT
        + statistics.mean_score * MEAN_WEIGHT
        + statistics.excellent_pct() * EXCELLENT_WEIGHT
        + (100.0 - statistics.unusable_pct()) * NOT_UNUSABLE_WEIGHT
}

fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

/// Order `scored` by `metric`, highest first. The sort is stable so ties keep input order.
pub(crate) fn rank_by(metric: RankingMetric, scored: &[&SimulationStatistics]) -> Ranking {
    let mut values: Vec<(&str, f64)> = scored
        .iter()
        .map(|statistics| (statistics.configuration.as_str(), metric.value(statistics)))
        .collect();
    values.sort_by(|a, b| descending(a.1, b.1));

    Ranking {
        metric,
        label: metric.label(),
        entries: values
            .into_iter()
            .enumerate()
            .map(|(position, (configuration, value))| RankEntry {
                rank: position + 1,
                configuration: configuration.to_string(),
                value,
            })
            .collect(),
    }
}

pub(crate) fn composite_ranking(scored: &[&SimulationStatistics]) -> Vec<CompositeEntry> {
    let mut entries: Vec<CompositeEntry> = scored
        .iter()
        .map(|statistics| CompositeEntry {
            rank: 0,
            configuration: statistics.configuration.clone(),
            composite: composite_score(statistics),
            usable_80_pct: statistics.usable_80_pct,
            mean_score: statistics.mean_score,
            excellent_pct: statistics.excellent_pct(),
            unusable_pct: statistics.unusable_pct(),
        })
        .collect();
    entries.sort_by(|a, b| descending(a.composite, b.composite));
    for (position, entry) in entries.iter_mut().enumerate() {
        entry.rank = position + 1;
    }
    entries
}
