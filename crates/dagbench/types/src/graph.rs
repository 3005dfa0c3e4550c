//! Directed graph over named nodes.
//!
//! Nodes and edges are kept in ordered sets so that every traversal,
//! serialization and comparison is deterministic.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::edge::{Edge, NodeName, NodePair};
use crate::error::GraphError;

/// A directed graph: a node set plus a set of directed edges between
/// distinct nodes.
///
/// Self-loops are rejected and duplicate edges collapse. Acyclicity is not
/// enforced on insertion; use [`DirectedGraph::is_acyclic`] or
/// [`DirectedGraph::topological_order`] to check it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GraphRecord")]
pub struct DirectedGraph {
    nodes: BTreeSet<NodeName>,
    edges: BTreeSet<Edge>,
}

/// Wire form of [`DirectedGraph`]; rebuilt through `add_edge` on the way in.
#[derive(Deserialize)]
struct GraphRecord {
    #[serde(default)]
    nodes: BTreeSet<NodeName>,
    #[serde(default)]
    edges: BTreeSet<Edge>,
}

impl TryFrom<GraphRecord> for DirectedGraph {
    type Error = GraphError;

    fn try_from(record: GraphRecord) -> Result<Self, GraphError> {
        let mut graph = Self {
            nodes: record.nodes,
            edges: BTreeSet::new(),
        };
        for edge in record.edges {
            graph.add_edge(edge)?;
        }
        Ok(graph)
    }
}

impl DirectedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an edgeless graph over `nodes`, rejecting repeated names.
    pub fn with_nodes<I, N>(nodes: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = N>,
        N: Into<NodeName>,
    {
        let mut graph = Self::new();
        for node in nodes {
            let node = node.into();
            if graph.nodes.contains(&node) {
                return Err(GraphError::DuplicateNode(node));
            }
            graph.nodes.insert(node);
        }
        Ok(graph)
    }

    /// Build a graph from an edge list; endpoints become nodes.
    pub fn from_edges<I, E>(edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        let mut graph = Self::new();
        for edge in edges {
            graph.add_edge(edge)?;
        }
        Ok(graph)
    }

    /// Insert a node. Returns `false` if it was already present.
    pub fn add_node(&mut self, node: impl Into<NodeName>) -> bool {
        self.nodes.insert(node.into())
    }

    /// Insert a directed edge, adding missing endpoints as nodes.
    ///
    /// Returns `Ok(false)` when the edge was already present.
    pub fn add_edge(&mut self, edge: impl Into<Edge>) -> Result<bool, GraphError> {
        let edge = edge.into();
        if edge.is_self_loop() {
            return Err(GraphError::SelfLoop(edge.source));
        }
        self.nodes.insert(edge.source.clone());
        self.nodes.insert(edge.target.clone());
        Ok(self.edges.insert(edge))
    }

    pub fn remove_edge(&mut self, edge: &Edge) -> bool {
        self.edges.remove(edge)
    }

    pub fn contains_node(&self, node: &str) -> bool {
        self.nodes.contains(node)
    }

    pub fn contains_edge(&self, edge: &Edge) -> bool {
        self.edges.contains(edge)
    }

    /// Whether `source -> target` is an edge.
    pub fn has_edge(&self, source: &str, target: &str) -> bool {
        self.edges.contains(&Edge::new(source, target))
    }

    pub fn nodes(&self) -> &BTreeSet<NodeName> {
        &self.nodes
    }

    pub fn edges(&self) -> &BTreeSet<Edge> {
        &self.edges
    }

    /// Consume the graph, keeping only its edge set.
    pub fn into_edges(self) -> BTreeSet<Edge> {
        self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn successors<'a>(&'a self, node: &'a str) -> impl Iterator<Item = &'a NodeName> + 'a {
        self.edges
            .iter()
            .filter(move |e| e.source.as_str() == node)
            .map(|e| &e.target)
    }

    pub fn predecessors<'a>(&'a self, node: &'a str) -> impl Iterator<Item = &'a NodeName> + 'a {
        self.edges
            .iter()
            .filter(move |e| e.target.as_str() == node)
            .map(|e| &e.source)
    }

    /// The undirected skeleton: every adjacent node pair, direction dropped.
    pub fn skeleton(&self) -> BTreeSet<NodePair> {
        self.edges.iter().map(NodePair::from).collect()
    }

    /// Kahn's algorithm. Ties are broken by node name, so the order is
    /// deterministic.
    ///
    /// Fails with [`GraphError::Cycle`] naming a node on (or downstream of)
    /// a directed cycle.
    pub fn topological_order(&self) -> Result<Vec<NodeName>, GraphError> {
        let mut in_degree: BTreeMap<&NodeName, usize> =
            self.nodes.iter().map(|n| (n, 0)).collect();
        for edge in &self.edges {
            *in_degree.entry(&edge.target).or_insert(0) += 1;
        }

        let mut ready: VecDeque<&NodeName> = in_degree
            .iter()
            .filter(|(_, d)| **d == 0)
            .map(|(n, _)| *n)
            .collect();
        let mut order = Vec::with_capacity(self.nodes.len());

        while let Some(node) = ready.pop_front() {
            order.push(node.clone());
            for succ in self.successors(node.as_str()) {
                if let Some(d) = in_degree.get_mut(succ) {
                    *d -= 1;
                    if *d == 0 {
                        ready.push_back(succ);
                    }
                }
            }
        }

        if order.len() < in_degree.len() {
            let stuck = in_degree
                .into_iter()
                .find(|(_, d)| *d > 0)
                .map(|(n, _)| n.clone())
                .unwrap_or_default();
            return Err(GraphError::Cycle(stuck));
        }
        Ok(order)
    }

    pub fn is_acyclic(&self) -> bool {
        self.topological_order().is_ok()
    }
}
