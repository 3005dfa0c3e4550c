//! Bootstrap edge-stability estimator.
//!
//! ```text
//!   seed ──► derive_seeds ──► [s_0 .. s_{B-1}]           (before dispatch)
//!                                   │
//!                     rayon pool (`parallelism` workers)
//!                                   │  per k: resample(data, s_k) → learn → edge set
//!                                   ▼
//!                       Vec<BTreeSet<Edge>>                (after join)
//!                                   │  single-threaded tally
//!                                   ▼
//!                            EdgeStability
//! ```
//!
//! Workers share only immutable inputs. A failing resample short-circuits the
//! parallel collection: resamples not yet started are skipped, those in
//! flight finish and are discarded, and no partial map is returned.

use std::collections::BTreeSet;
use std::time::Instant;

use dagbench_types::{Dataset, Edge};
use rayon::prelude::*;
use tracing::{debug, info, instrument, warn};

use crate::bootstrap::{derive_seeds, resample};
use crate::config::{Parallelism, StabilityConfig};
use crate::error::{StabilityError, StabilityResult};
use crate::learner::LearningProcedure;
use crate::stability::EdgeStability;

/// Runs B bootstrap resamples through a learner and tallies edge
/// frequencies.
#[derive(Clone, Debug, Default)]
pub struct BootstrapEstimator {
    config: StabilityConfig,
}

impl BootstrapEstimator {
    /// Create an estimator, rejecting an unusable configuration up front.
    pub fn new(config: StabilityConfig) -> StabilityResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// 100 resamples, seed 0, every available execution unit.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    pub fn config(&self) -> &StabilityConfig {
        &self.config
    }

    /// Estimate per-edge bootstrap frequencies of `learner` on `data`.
    ///
    /// Reproducible for a fixed learner, dataset, resample count and seed,
    /// whatever the parallelism.
    #[instrument(skip_all, fields(resamples = self.config.resamples, seed = self.config.seed))]
    pub fn estimate<L>(&self, learner: &L, data: &Dataset) -> StabilityResult<EdgeStability>
    where
        L: LearningProcedure,
    {
        self.config.validate()?;
        let workers = self
            .config
            .parallelism
            .resolve(Parallelism::available_units())?;
        let resamples = self.config.resamples;

        if data.is_empty() {
            warn!("dataset has no rows; every resample will be empty");
        }
        info!(
            workers,
            rows = data.n_rows(),
            columns = data.n_cols(),
            "starting bootstrap edge-stability estimate"
        );

        let seeds = derive_seeds(self.config.seed, resamples);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("dagbench-bootstrap-{i}"))
            .build()?;

        let edge_sets = pool.install(|| {
            seeds
                .par_iter()
                .enumerate()
                .map(|(k, &seed)| self.run_resample(learner, data, k, seed))
                .collect::<StabilityResult<Vec<_>>>()
        })?;

        let stability = EdgeStability::tally(resamples, edge_sets);
        info!(
            distinct_edges = stability.len(),
            "bootstrap estimate complete"
        );
        Ok(stability)
    }

    fn run_resample<L>(
        &self,
        learner: &L,
        data: &Dataset,
        index: usize,
        seed: u64,
    ) -> StabilityResult<BTreeSet<Edge>>
    where
        L: LearningProcedure,
    {
        let sample = resample(data, seed).map_err(|source| StabilityError::Resample {
            resample: index,
            source,
        })?;

        let started = Instant::now();
        let learned = learner.learn(&sample).map_err(|e| {
            warn!(resample = index, error = %e, "learner failed on resample");
            StabilityError::Learner {
                resample: index,
                source: Box::new(e),
            }
        })?;
        let elapsed = started.elapsed();

        if let Some(deadline) = self.config.resample_deadline {
            if elapsed > deadline {
                warn!(resample = index, ?elapsed, ?deadline, "learner exceeded deadline");
                return Err(StabilityError::DeadlineExceeded {
                    resample: index,
                    elapsed,
                    deadline,
                });
            }
        }

        debug!(
            resample = index,
            edges = learned.graph.edge_count(),
            ?elapsed,
            "resample learned"
        );
        Ok(learned.graph.into_edges())
    }
}

/// One-shot estimate with an explicit configuration.
pub fn estimate<L>(
    learner: &L,
    data: &Dataset,
    config: &StabilityConfig,
) -> StabilityResult<EdgeStability>
where
    L: LearningProcedure,
{
    BootstrapEstimator::new(config.clone())?.estimate(learner, data)
}
