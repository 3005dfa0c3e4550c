#![deny(unsafe_code)]
//! # dagbench-types
//!
//! Shared data model for evaluating causal-structure learners.
//!
//! ## Key Types
//!
//! - [`NodeName`] — a variable name, used as a node label
//! - [`Edge`] — a directed edge `source -> target`
//! - [`NodePair`] — an unordered pair of nodes (ambiguous edges, skeletons)
//! - [`DirectedGraph`] — nodes plus directed edges, self-loops forbidden
//! - [`Dataset`] — ordered named numeric columns, rows as observations
//! - [`LearnedGraph`] — a learner's graph plus its free-form [`Metadata`]

pub mod dataset;
pub mod edge;
pub mod error;
pub mod graph;
pub mod learned;

pub use dataset::Dataset;
pub use edge::{Edge, NodeName, NodePair};
pub use error::{DatasetError, GraphError};
pub use graph::DirectedGraph;
pub use learned::{LearnedGraph, Metadata};
