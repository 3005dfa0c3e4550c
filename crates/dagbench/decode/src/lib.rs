#![deny(unsafe_code)]
//! # dagbench-decode
//!
//! Turns the adjacency-style matrix a structure learner emits into a
//! [`DirectedGraph`](dagbench_types::DirectedGraph), reporting which node
//! pairs had no determined direction.
//!
//! ```rust
//! use dagbench_decode::{decode, AdjacencyMatrix};
//!
//! let m = AdjacencyMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
//! let (graph, meta) = decode(&m, ["A", "B"]).unwrap();
//! assert!(graph.has_edge("A", "B"));
//! assert!(meta.is_ambiguous("A", "B"));
//! ```
//!
//! Learner adapters own the choice of convention: if a library encodes edges
//! differently, convert its output before calling [`decode`].

pub mod decode;
pub mod error;
pub mod matrix;

pub use decode::{classify_pair, decode, DecodeMetadata, PairEncoding, UNDIRECTED_EDGES_KEY};
pub use error::{DecodeError, DecodeResult};
pub use matrix::AdjacencyMatrix;
