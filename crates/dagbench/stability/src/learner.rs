//! The learning-procedure seam.

use dagbench_types::{Dataset, LearnedGraph};

/// A causal-structure learner: maps a dataset to a graph plus metadata.
///
/// The estimator calls `learn` concurrently from several worker threads, so
/// implementations must be `Sync` and must not rely on call order. Any
/// algorithm-specific decoding of raw output belongs inside the
/// implementation.
///
/// Closures of the form `Fn(&Dataset) -> Result<LearnedGraph, E>` implement
/// this trait directly.
pub trait LearningProcedure: Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    fn learn(&self, data: &Dataset) -> Result<LearnedGraph, Self::Error>;
}

impl<F, E> LearningProcedure for F
where
    F: Fn(&Dataset) -> Result<LearnedGraph, E> + Sync,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn learn(&self, data: &Dataset) -> Result<LearnedGraph, E> {
        self(data)
    }
}
