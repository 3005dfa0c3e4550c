#![deny(unsafe_code)]
//! # dagbench-stability
//!
//! Bootstrap edge-stability estimation: run a structure learner on B
//! resamples of a dataset and report how often each directed edge appears.
//!
//! ## Key Types
//!
//! - [`LearningProcedure`] — the learner seam, implemented for closures
//! - [`StabilityConfig`] — resample count, base seed, [`Parallelism`], deadline
//! - [`BootstrapEstimator`] — runs resamples on a dedicated worker pool
//! - [`EdgeStability`] — sparse edge → frequency map
//!
//! ```rust
//! use std::convert::Infallible;
//! use dagbench_stability::{estimate, StabilityConfig};
//! use dagbench_types::{Dataset, DirectedGraph, Edge, LearnedGraph};
//!
//! let data = Dataset::new(["X", "Y"], vec![vec![1.0, 2.0], vec![2.0, 4.1]]).unwrap();
//! let learner = |_: &Dataset| -> Result<LearnedGraph, Infallible> {
//!     Ok(DirectedGraph::from_edges([("X", "Y")]).unwrap().into())
//! };
//! let stability = estimate(&learner, &data, &StabilityConfig::new(10, 0)).unwrap();
//! assert_eq!(stability.frequency(&Edge::new("X", "Y")), 1.0);
//! ```

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod estimator;
pub mod learner;
pub mod stability;

pub use bootstrap::{derive_seeds, resample, resample_indices};
pub use config::{Parallelism, StabilityConfig, DEFAULT_RESAMPLES, DEFAULT_SEED};
pub use error::{LearnerError, StabilityError, StabilityResult};
pub use estimator::{estimate, BootstrapEstimator};
pub use learner::LearningProcedure;
pub use stability::EdgeStability;
