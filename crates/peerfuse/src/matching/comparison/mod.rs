//! Runs a set of weight configurations over one shared population and ranks them.

mod ranking;
mod verdict;

pub use ranking::{composite_score, CompositeEntry, RankEntry, Ranking, RankingMetric};
pub use verdict::{assess_negative_marking, NegativeMarkingAssessment, NegativeMarkingVerdict};

use super::domain::Profile;
use super::generator::{generate_population, PopulationError};
use super::simulation::{PopulationSimulator, SimulationError, SimulationStatistics};
use super::weights::WeightConfiguration;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
pub enum ComparisonError {
    #[error("at least one weight configuration is required")]
    NoConfigurations,
    #[error("weight configuration '{name}' appears more than once")]
    DuplicateConfiguration { name: String },
    #[error("configuration '{configuration}' already uses negative marking")]
    AlreadyNegativeMarking { configuration: String },
    #[error(transparent)]
    Population(#[from] PopulationError),
    #[error(transparent)]
    Simulation(#[from] SimulationError),
}

/// Result of simulating one configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ConfigurationOutcome {
    Scored(SimulationStatistics),
    /// No pair survived the eligibility filter; excluded from rankings.
    Degenerate { configuration: String, note: String },
}

impl ConfigurationOutcome {
    pub fn configuration(&self) -> &str {
        match self {
            Self::Scored(statistics) => &statistics.configuration,
            Self::Degenerate { configuration, .. } => configuration,
        }
    }

    pub fn statistics(&self) -> Option<&SimulationStatistics> {
        match self {
            Self::Scored(statistics) => Some(statistics),
            Self::Degenerate { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    pub population_size: usize,
    /// Present when the population was generated by the comparator.
    pub seed: Option<u64>,
    /// One entry per input configuration, in input order.
    pub outcomes: Vec<ConfigurationOutcome>,
    pub rankings: Vec<Ranking>,
    pub composite: Vec<CompositeEntry>,
    pub recommended: Option<String>,
}

impl ComparisonReport {
    pub fn scored(&self) -> impl Iterator<Item = &SimulationStatistics> {
        self.outcomes.iter().filter_map(ConfigurationOutcome::statistics)
    }

    pub fn degenerate(&self) -> impl Iterator<Item = &ConfigurationOutcome> {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.statistics().is_none())
    }

    pub fn statistics_for(&self, configuration: &str) -> Option<&SimulationStatistics> {
        self.scored()
            .find(|statistics| statistics.configuration == configuration)
    }

    pub fn ranking(&self, metric: RankingMetric) -> Option<&Ranking> {
        self.rankings.iter().find(|ranking| ranking.metric == metric)
    }
}

/// Compares configurations on a shared population using one simulator.
#[derive(Debug, Clone, Default)]
pub struct ConfigurationComparator {
    simulator: PopulationSimulator,
}

impl ConfigurationComparator {
    pub fn new(simulator: PopulationSimulator) -> Self {
        Self { simulator }
    }

    pub fn simulator(&self) -> &PopulationSimulator {
        &self.simulator
    }

    pub fn compare(
        &self,
        population: &[Profile],
        configs: &[WeightConfiguration],
    ) -> Result<ComparisonReport, ComparisonError> {
        ensure_distinct(configs)?;
        info!(
            configurations = configs.len(),
            population = population.len(),
            "comparing weight configurations"
        );

        let results: Vec<Result<SimulationStatistics, SimulationError>> =
            self.simulator.install(|| {
                configs
                    .par_iter()
                    .map(|config| self.simulator.simulate(population, config))
                    .collect()
            });

        let mut outcomes = Vec::with_capacity(results.len());
        for result in results {
            match result {
                Ok(statistics) => outcomes.push(ConfigurationOutcome::Scored(statistics)),
                Err(SimulationError::EmptyResult {
                    configuration,
                    evaluated_pairs,
                }) => {
                    warn!(
                        configuration = configuration.as_str(),
                        evaluated_pairs, "configuration produced no eligible pairs"
                    );
                    outcomes.push(ConfigurationOutcome::Degenerate {
                        configuration,
                        note: format!(
                            "no eligible pairs among {evaluated_pairs} evaluated; excluded from rankings"
                        ),
                    });
                }
                Err(other) => return Err(other.into()),
            }
        }

        let scored: Vec<&SimulationStatistics> = outcomes
            .iter()
            .filter_map(ConfigurationOutcome::statistics)
            .collect();
        let rankings = RankingMetric::ordered()
            .into_iter()
            .map(|metric| ranking::rank_by(metric, &scored))
            .collect();
        let composite = ranking::composite_ranking(&scored);
        let recommended = composite.first().map(|entry| entry.configuration.clone());

        if let Some(name) = &recommended {
            info!(recommended = name.as_str(), "comparison complete");
        } else {
            warn!("every configuration was degenerate; no recommendation");
        }

        Ok(ComparisonReport {
            population_size: population.len(),
            seed: None,
            outcomes,
            rankings,
            composite,
            recommended,
        })
    }

    /// Generate one population from `seed` and compare every configuration on it.
    pub fn compare_seeded(
        &self,
        seed: u64,
        size: usize,
        configs: &[WeightConfiguration],
    ) -> Result<ComparisonReport, ComparisonError> {
        ensure_distinct(configs)?;
        let population = generate_population(seed, size)?;
        let mut report = self.compare(&population, configs)?;
        report.seed = Some(seed);
        Ok(report)
    }

    /// Simulate `baseline` with and without mismatch penalties and judge the difference.
    pub fn assess_negative_marking(
        &self,
        population: &[Profile],
        baseline: &WeightConfiguration,
    ) -> Result<NegativeMarkingAssessment, ComparisonError> {
        if baseline.negative_marking() {
            return Err(ComparisonError::AlreadyNegativeMarking {
                configuration: baseline.name().to_string(),
            });
        }
        let candidate = baseline.with_negative_marking();
        let (baseline_stats, candidate_stats) = self.simulator.install(|| {
            rayon::join(
                || self.simulator.simulate(population, baseline),
                || self.simulator.simulate(population, &candidate),
            )
        });
        let assessment = assess_negative_marking(&baseline_stats?, &candidate_stats?);
        info!(
            baseline = assessment.baseline.as_str(),
            verdict = assessment.verdict.label(),
            mean_delta = assessment.mean_delta,
            usable_80_delta = assessment.usable_80_delta,
            "negative marking assessed"
        );
        Ok(assessment)
    }
}

/// Compare `configs` over `population` on the global rayon pool.
pub fn compare(
    population: &[Profile],
    configs: &[WeightConfiguration],
) -> Result<ComparisonReport, ComparisonError> {
    ConfigurationComparator::default().compare(population, configs)
}

pub fn compare_seeded(
    seed: u64,
    size: usize,
    configs: &[WeightConfiguration],
) -> Result<ComparisonReport, ComparisonError> {
    ConfigurationComparator::default().compare_seeded(seed, size, configs)
}

fn ensure_distinct(configs: &[WeightConfiguration]) -> Result<(), ComparisonError> {
    if configs.is_empty() {
        return Err(ComparisonError::NoConfigurations);
    }
    let mut seen = HashSet::with_capacity(configs.len());
    for config in configs {
        if !seen.insert(config.name()) {
            return Err(ComparisonError::DuplicateConfiguration {
                name: config.name().to_string(),
            });
        }
    }
    Ok(())
}
