use super::statistics::{
    QualityTier, SimulationStatistics, TierShare, RECOMMENDED_THRESHOLD, USABLE_THRESHOLD,
};
use super::SimulationError;
use crate::matching::scoring::PairResult;
use crate::matching::weights::WeightConfiguration;

/// Partial aggregate over a subset of pairs. Partials merge associatively and
/// commutatively; order-dependent figures (mean, median) are only computed in `finish`
/// after the retained scores are sorted.
#[derive(Debug, Default)]
pub(crate) struct PairAccumulator {
    evaluated: u64,
    scores: Vec<f64>,
    tier_counts: [u64; QualityTier::COUNT],
    usable: u64,
    recommended: u64,
    complementary_total: u64,
    zero_complementary: u64,
}

impl PairAccumulator {
    pub(crate) fn observe(&mut self, pair: &PairResult) {
        self.evaluated += 1;
        if !pair.is_eligible() {
            return;
        }

        self.scores.push(pair.score);
        self.tier_counts[QualityTier::for_score(pair.score).index()] += 1;
        if pair.score >= USABLE_THRESHOLD {
            self.usable += 1;
        }
        if pair.score >= RECOMMENDED_THRESHOLD {
            self.recommended += 1;
        }
        self.complementary_total += u64::from(pair.complementary_matches);
        if pair.complementary_matches == 0 {
            self.zero_complementary += 1;
        }
    }

    pub(crate) fn merge(mut self, mut other: Self) -> Self {
        self.evaluated += other.evaluated;
        if self.scores.len() < other.scores.len() {
            std::mem::swap(&mut self.scores, &mut other.scores);
        }
        self.scores.append(&mut other.scores);
        for (total, count) in self.tier_counts.iter_mut().zip(other.tier_counts) {
            *total += count;
        }
        self.usable += other.usable;
        self.recommended += other.recommended;
        self.complementary_total += other.complementary_total;
        self.zero_complementary += other.zero_complementary;
        self
    }

    pub(crate) fn finish(
        mut self,
        config: &WeightConfiguration,
        population_size: usize,
    ) -> Result<SimulationStatistics, SimulationError> {
        if self.scores.is_empty() {
            return Err(SimulationError::EmptyResult {
                configuration: config.name().to_string(),
                evaluated_pairs: self.evaluated,
            });
        }

        self.scores.sort_by(f64::total_cmp);
        let eligible = self.scores.len();
        let eligible_f = eligible as f64;
        let pct = |count: u64| count as f64 / eligible_f * 100.0;

        let total: f64 = self.scores.iter().sum();
        let median_score = self.scores[(eligible - 1) / 2];
        let min_score = self.scores[0];
        let max_score = self.scores[eligible - 1];

        let tiers = QualityTier::ordered()
            .into_iter()
            .map(|tier| {
                let count = self.tier_counts[tier.index()];
                TierShare {
                    tier,
                    label: tier.label(),
                    range: tier.range_label(),
                    count,
                    pct: pct(count),
                }
            })
            .collect();

        Ok(SimulationStatistics {
            configuration: config.name().to_string(),
            negative_marking: config.negative_marking(),
            population_size,
            evaluated_pairs: self.evaluated,
            eligible_pairs: eligible as u64,
            filtered_pairs: self.evaluated - eligible as u64,
            mean_score: total / eligible_f,
            median_score,
            min_score,
            max_score,
            tiers,
            usable_80_pct: pct(self.usable),
            recommended_120_pct: pct(self.recommended),
            mean_complementary_matches: self.complementary_total as f64 / eligible_f,
            zero_complementary_pct: pct(self.zero_complementary),
        })
    }
}
