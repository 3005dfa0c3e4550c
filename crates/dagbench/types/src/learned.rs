use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::graph::DirectedGraph;

/// Free-form metadata a learner attaches to its output graph.
pub type Metadata = BTreeMap<String, serde_json::Value>;

/// Output of one learning-procedure run: a graph plus whatever metadata the
/// learner reports.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LearnedGraph {
    pub graph: DirectedGraph,
    #[serde(default)]
    pub metadata: Metadata,
}

impl LearnedGraph {
    pub fn new(graph: DirectedGraph) -> Self {
        Self {
            graph,
            metadata: Metadata::new(),
        }
    }

    pub fn with_metadata(graph: DirectedGraph, metadata: Metadata) -> Self {
        Self { graph, metadata }
    }
}

impl From<DirectedGraph> for LearnedGraph {
    fn from(graph: DirectedGraph) -> Self {
        Self::new(graph)
    }
}
