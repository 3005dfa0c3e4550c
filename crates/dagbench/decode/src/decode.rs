//! Adjacency matrix → directed graph.
//!
//! Cell convention, for a pair of variables `i < j` with `a = M[i][j]` and
//! `b = M[j][i]`:
//!
//! | a      | b      | result                                   |
//! |--------|--------|------------------------------------------|
//! | 0      | 0      | no edge                                  |
//! | ≠ 0    | 0      | `i -> j`                                 |
//! | 0      | ≠ 0    | `j -> i`                                 |
//! | > 0    | < 0    | `i -> j`                                 |
//! | < 0    | > 0    | `j -> i`                                 |
//! | same sign       || `i -> j`, pair recorded as ambiguous      |
//!
//! The last row is the symmetric (undirected) encoding: the direction is not
//! determined by the matrix, so it is oriented from the lower-index variable
//! to the higher-index one and reported in [`DecodeMetadata`].

use std::collections::BTreeSet;
use std::collections::HashSet;

use dagbench_types::{DirectedGraph, Edge, Metadata, NodeName, NodePair};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DecodeError, DecodeResult};
use crate::matrix::AdjacencyMatrix;

/// Metadata key under which [`DecodeMetadata::to_metadata`] stores the
/// ambiguous pairs.
pub const UNDIRECTED_EDGES_KEY: &str = "undirected_edges";

/// How the two cells of one variable pair encode an edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PairEncoding {
    /// Both cells zero.
    Absent,
    /// Lower-index variable is the source.
    Forward,
    /// Higher-index variable is the source.
    Backward,
    /// Both cells non-zero with the same sign; direction undetermined.
    Ambiguous,
}

/// Classify the cell pair `(M[i][j], M[j][i])` for `i < j`.
pub fn classify_pair(forward: f64, backward: f64) -> PairEncoding {
    match (forward != 0.0, backward != 0.0) {
        (false, false) => PairEncoding::Absent,
        (true, false) => PairEncoding::Forward,
        (false, true) => PairEncoding::Backward,
        (true, true) => {
            if forward.is_sign_positive() == backward.is_sign_positive() {
                PairEncoding::Ambiguous
            } else if forward > 0.0 {
                PairEncoding::Forward
            } else {
                PairEncoding::Backward
            }
        }
    }
}

/// Node pairs whose direction the matrix left undetermined.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeMetadata {
    pub undirected_edges: BTreeSet<NodePair>,
}

impl DecodeMetadata {
    /// Whether the pair `{a, b}` was decoded from a symmetric encoding.
    pub fn is_ambiguous(&self, a: &str, b: &str) -> bool {
        self.undirected_edges.contains(&NodePair::new(a, b))
    }

    pub fn ambiguous_count(&self) -> usize {
        self.undirected_edges.len()
    }

    /// Render as learner metadata: `{"undirected_edges": [[a, b], ...]}`.
    pub fn to_metadata(&self) -> Metadata {
        let pairs = self
            .undirected_edges
            .iter()
            .map(|p| serde_json::json!([p.first().as_str(), p.second().as_str()]))
            .collect();
        let mut metadata = Metadata::new();
        metadata.insert(
            UNDIRECTED_EDGES_KEY.to_string(),
            serde_json::Value::Array(pairs),
        );
        metadata
    }
}

/// Decode `matrix`, indexed by `node_names`, into a directed graph.
///
/// The graph contains every name as a node, isolated or not. Pure: the same
/// inputs always give the same graph and the same ambiguous-pair set.
pub fn decode<I, N>(
    matrix: &AdjacencyMatrix,
    node_names: I,
) -> DecodeResult<(DirectedGraph, DecodeMetadata)>
where
    I: IntoIterator<Item = N>,
    N: Into<NodeName>,
{
    let names = unique_names(node_names)?;
    let n = names.len();
    if !matrix.is_square() || matrix.rows() != n {
        return Err(DecodeError::ShapeMismatch {
            rows: matrix.rows(),
            cols: matrix.cols(),
            nodes: n,
        });
    }
    if let Some((row, col, value)) = matrix.first_non_finite() {
        return Err(DecodeError::NonFiniteCell { row, col, value });
    }

    let mut graph = DirectedGraph::new();
    for name in &names {
        graph.add_node(name.clone());
    }
    let mut metadata = DecodeMetadata::default();

    for i in 0..n {
        for j in (i + 1)..n {
            let edge = match classify_pair(matrix.cell(i, j), matrix.cell(j, i)) {
                PairEncoding::Absent => continue,
                PairEncoding::Forward => Edge::new(names[i].clone(), names[j].clone()),
                PairEncoding::Backward => Edge::new(names[j].clone(), names[i].clone()),
                PairEncoding::Ambiguous => {
                    let edge = Edge::new(names[i].clone(), names[j].clone());
                    debug!(pair = %NodePair::from(&edge), "ambiguous edge oriented by variable order");
                    metadata.undirected_edges.insert(NodePair::from(&edge));
                    edge
                }
            };
            // i != j, so the edge is never a self-loop.
            let _ = graph.add_edge(edge);
        }
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        ambiguous = metadata.ambiguous_count(),
        "decoded adjacency matrix"
    );
    Ok((graph, metadata))
}

fn unique_names<I, N>(node_names: I) -> DecodeResult<Vec<NodeName>>
where
    I: IntoIterator<Item = N>,
    N: Into<NodeName>,
{
    let mut seen = HashSet::new();
    let mut names = Vec::new();
    for name in node_names {
        let name = name.into();
        if !seen.insert(name.clone()) {
            return Err(DecodeError::DuplicateNode(name));
        }
        names.push(name);
    }
    Ok(names)
}
