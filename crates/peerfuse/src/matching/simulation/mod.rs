//! Scores every unordered pair of a population under one configuration and reduces the
//! results to summary statistics.

mod accumulator;
pub mod statistics;

pub use statistics::{
    QualityTier, SimulationStatistics, TierShare, RECOMMENDED_THRESHOLD, USABLE_THRESHOLD,
};

use self::accumulator::PairAccumulator;
use super::domain::Profile;
use super::scoring::MatchScorer;
use super::weights::WeightConfiguration;
use crate::config::SimulationConfig;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("configuration '{configuration}' produced no eligible pairs out of {evaluated_pairs} evaluated")]
    EmptyResult {
        configuration: String,
        evaluated_pairs: u64,
    },
    #[error("failed to build simulation worker pool: {0}")]
    WorkerPool(#[from] ThreadPoolBuildError),
}

/// Runs pair scoring across a rayon pool. Results never depend on the worker count.
#[derive(Debug, Clone, Default)]
pub struct PopulationSimulator {
    pool: Option<Arc<ThreadPool>>,
}

impl PopulationSimulator {
    /// Simulator backed by the global rayon pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulator backed by a dedicated pool of `workers` threads.
    pub fn with_workers(workers: usize) -> Result<Self, SimulationError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers.max(1))
            .thread_name(|index| format!("peerfuse-sim-{index}"))
            .build()?;
        Ok(Self {
            pool: Some(Arc::new(pool)),
        })
    }

    pub fn from_config(config: &SimulationConfig) -> Result<Self, SimulationError> {
        match config.workers {
            Some(workers) => Self::with_workers(workers),
            None => Ok(Self::new()),
        }
    }

    pub fn workers(&self) -> usize {
        self.pool
            .as_ref()
            .map_or_else(rayon::current_num_threads, |pool| pool.current_num_threads())
    }

    pub fn simulate(
        &self,
        population: &[Profile],
        config: &WeightConfiguration,
    ) -> Result<SimulationStatistics, SimulationError> {
        let scorer = MatchScorer::new(config);
        debug!(
            configuration = config.name(),
            population = population.len(),
            workers = self.workers(),
            "scoring population pairs"
        );

        let accumulator = self.install(|| {
            (0..population.len())
                .into_par_iter()
                .fold(PairAccumulator::default, |mut accumulator, index| {
                    let profile = &population[index];
                    for other in &population[index + 1..] {
                        accumulator.observe(&scorer.score(profile, other));
                    }
                    accumulator
                })
                .reduce(PairAccumulator::default, PairAccumulator::merge)
        });

        let statistics = accumulator.finish(config, population.len())?;
        info!(
            configuration = config.name(),
            eligible_pairs = statistics.eligible_pairs,
            mean_score = statistics.mean_score,
            median_score = statistics.median_score,
            usable_80_pct = statistics.usable_80_pct,
            "simulation complete"
        );
        Ok(statistics)
    }

    /// Run `op` inside the dedicated pool when one is configured.
    pub(crate) fn install<R, F>(&self, op: F) -> R
    where
        R: Send,
        F: FnOnce() -> R + Send,
    {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }
}

/// Simulate `config` over `population` on the global rayon pool.
pub fn simulate(
    population: &[Profile],
    config: &WeightConfiguration,
) -> Result<SimulationStatistics, SimulationError> {
    PopulationSimulator::new().simulate(population, config)
}
