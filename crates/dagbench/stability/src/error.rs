use std::time::Duration;

use dagbench_types::DatasetError;
use thiserror::Error;

/// Boxed error raised by a caller-supplied learning procedure.
pub type LearnerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors from bootstrap stability estimation.
#[derive(Debug, Error)]
pub enum StabilityError {
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("learner failed on resample {resample}: {source}")]
    Learner {
        resample: usize,
        #[source]
        source: LearnerError,
    },

    #[error("learner on resample {resample} took {elapsed:?}, deadline {deadline:?}")]
    DeadlineExceeded {
        resample: usize,
        elapsed: Duration,
        deadline: Duration,
    },

    #[error("failed to build resample {resample}: {source}")]
    Resample {
        resample: usize,
        #[source]
        source: DatasetError,
    },

    #[error("worker pool error: {0}")]
    WorkerPool(String),
}

impl StabilityError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Index of the resample that failed, when the error came from one.
    pub fn resample_index(&self) -> Option<usize> {
        match self {
            Self::Learner { resample, .. }
            | Self::DeadlineExceeded { resample, .. }
            | Self::Resample { resample, .. } => Some(*resample),
            Self::InvalidParameter { .. } | Self::WorkerPool(_) => None,
        }
    }

    /// The learner's own error, unchanged, for downcasting.
    pub fn learner_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Self::Learner { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<rayon::ThreadPoolBuildError> for StabilityError {
    fn from(e: rayon::ThreadPoolBuildError) -> Self {
        StabilityError::WorkerPool(e.to_string())
    }
}

/// Convenience type alias for stability results.
pub type StabilityResult<T> = Result<T, StabilityError>;
