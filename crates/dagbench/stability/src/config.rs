//! Estimator configuration.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{StabilityError, StabilityResult};

/// Default number of bootstrap resamples.
pub const DEFAULT_RESAMPLES: usize = 100;

/// Default base seed.
pub const DEFAULT_SEED: u64 = 0;

/// How many resample-and-learn runs may execute at once.
///
/// Serialized as the conventional job-count integer: `-1` for every
/// available execution unit, `-k` for all but `k - 1` units, `n >= 1` for
/// exactly `n` workers. `0` is rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Parallelism {
    /// Every available execution unit.
    #[default]
    All,
    /// Every available execution unit except this many.
    AllBut(usize),
    /// Exactly this many workers.
    Workers(usize),
}

impl Parallelism {
    /// Map a job-count integer (`-1` = all units) to a parallelism setting.
    pub fn from_jobs(jobs: i64) -> StabilityResult<Self> {
        let units = |n: u64| {
            usize::try_from(n).map_err(|_| {
                StabilityError::invalid("parallelism", format!("job count {jobs} out of range"))
            })
        };
        match jobs {
            0 => Err(StabilityError::invalid(
                "parallelism",
                "0 workers requested; use -1 for all execution units",
            )),
            -1 => Ok(Self::All),
            n if n < -1 => Ok(Self::AllBut(units(n.unsigned_abs() - 1)?)),
            n => Ok(Self::Workers(units(n.unsigned_abs())?)),
        }
    }

    /// The job-count integer for this setting. Counts beyond the `i64`
    /// range saturate; [`StabilityConfig::validate`] rejects them.
    pub fn to_jobs(self) -> i64 {
        match self {
            Self::All => -1,
            Self::AllBut(k) => i64::try_from(k)
                .ok()
                .and_then(|k| k.checked_neg())
                .and_then(|k| k.checked_sub(1))
                .unwrap_or(i64::MIN),
            Self::Workers(n) => i64::try_from(n).unwrap_or(i64::MAX),
        }
    }

    /// Whether [`Parallelism::to_jobs`] maps back to this same setting.
    fn fits_job_count(self) -> bool {
        match self {
            Self::All => true,
            Self::AllBut(n) | Self::Workers(n) => i64::try_from(n).is_ok(),
        }
    }

    /// Number of workers given `available` execution units. Always at
    /// least one.
    pub fn resolve(self, available: usize) -> StabilityResult<usize> {
        let available = available.max(1);
        match self {
            Self::All => Ok(available),
            Self::AllBut(k) if k < available => Ok(available - k),
            Self::AllBut(k) => Err(StabilityError::invalid(
                "parallelism",
                format!("leaving {k} of {available} execution units idle leaves no workers"),
            )),
            Self::Workers(0) => Err(StabilityError::invalid(
                "parallelism",
                "0 workers requested",
            )),
            Self::Workers(n) => Ok(n),
        }
    }

    /// Execution units on this machine, falling back to one.
    pub fn available_units() -> usize {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    }
}

impl TryFrom<i64> for Parallelism {
    type Error = StabilityError;

    fn try_from(jobs: i64) -> Result<Self, Self::Error> {
        Self::from_jobs(jobs)
    }
}

impl From<Parallelism> for i64 {
    fn from(p: Parallelism) -> Self {
        p.to_jobs()
    }
}

impl fmt::Display for Parallelism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::AllBut(k) => write!(f, "all-but-{k}"),
            Self::Workers(n) => write!(f, "{n}"),
        }
    }
}

/// Configuration for a bootstrap edge-stability estimate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StabilityConfig {
    /// Number of bootstrap resamples (B). Must be at least 1.
    pub resamples: usize,
    /// Base seed from which every per-resample seed is derived.
    pub seed: u64,
    /// Worker-pool sizing.
    pub parallelism: Parallelism,
    /// Fail the estimate if any single learner call runs longer than this.
    /// Checked when the call returns; the call itself is not interrupted.
    pub resample_deadline: Option<Duration>,
}

impl Default for StabilityConfig {
    fn default() -> Self {
        Self {
            resamples: DEFAULT_RESAMPLES,
            seed: DEFAULT_SEED,
            parallelism: Parallelism::All,
            resample_deadline: None,
        }
    }
}

impl StabilityConfig {
    pub fn new(resamples: usize, seed: u64) -> Self {
        Self {
            resamples,
            seed,
            ..Self::default()
        }
    }

    pub fn with_parallelism(mut self, parallelism: Parallelism) -> Self {
        self.parallelism = parallelism;
        self
    }

    pub fn with_resample_deadline(mut self, deadline: Duration) -> Self {
        self.resample_deadline = Some(deadline);
        self
    }

    /// Reject settings that cannot produce an estimate.
    pub fn validate(&self) -> StabilityResult<()> {
        if self.resamples < 1 {
            return Err(StabilityError::invalid(
                "resamples",
                format!("must be at least 1, got {}", self.resamples),
            ));
        }
        if let Parallelism::Workers(0) = self.parallelism {
            return Err(StabilityError::invalid("parallelism", "0 workers requested"));
        }
        if !self.parallelism.fits_job_count() {
            return Err(StabilityError::invalid(
                "parallelism",
                format!("{} is outside the job-count range", self.parallelism),
            ));
        }
        if self.resample_deadline == Some(Duration::ZERO) {
            return Err(StabilityError::invalid(
                "resample_deadline",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}
