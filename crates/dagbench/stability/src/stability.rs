//! Edge stability map: per-edge bootstrap frequency.

use std::collections::{BTreeMap, BTreeSet};

use dagbench_types::{DirectedGraph, Edge, NodeName};
use serde::{Deserialize, Serialize};

use crate::error::{StabilityError, StabilityResult};

/// For every directed edge seen in at least one resample, how many of the B
/// resample graphs contained it.
///
/// Sparse: edges never observed are absent and have frequency 0.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "StabilityRecord", try_from = "StabilityRecord")]
pub struct EdgeStability {
    resamples: usize,
    counts: BTreeMap<Edge, usize>,
}

impl EdgeStability {
    /// Count edge occurrences across resample edge sets.
    ///
    /// The fold is a plain sum, so the order of `edge_sets` does not affect
    /// the result. Callers pass exactly `resamples` sets, which bounds every
    /// count by `resamples`.
    pub(crate) fn tally<I>(resamples: usize, edge_sets: I) -> Self
    where
        I: IntoIterator<Item = BTreeSet<Edge>>,
    {
        let mut counts = BTreeMap::new();
        for edges in edge_sets {
            for edge in edges {
                *counts.entry(edge).or_insert(0) += 1;
            }
        }
        Self { resamples, counts }
    }

    /// Number of resamples the frequencies are relative to (B).
    pub fn resamples(&self) -> usize {
        self.resamples
    }

    /// Number of distinct edges observed.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Resamples whose graph contained `edge`.
    pub fn count(&self, edge: &Edge) -> usize {
        self.counts.get(edge).copied().unwrap_or(0)
    }

    /// Fraction of resamples whose graph contained `edge`; 0.0 when never
    /// observed.
    pub fn frequency(&self, edge: &Edge) -> f64 {
        self.ratio(self.count(edge))
    }

    /// `(edge, frequency)` pairs in edge order.
    pub fn iter(&self) -> impl Iterator<Item = (&Edge, f64)> + '_ {
        self.counts.iter().map(move |(e, &c)| (e, self.ratio(c)))
    }

    /// The full sparse edge → frequency mapping.
    pub fn frequencies(&self) -> BTreeMap<Edge, f64> {
        self.iter().map(|(e, f)| (e.clone(), f)).collect()
    }

    /// Edges whose frequency is at least `threshold` (in `[0, 1]`).
    pub fn stable_edges(&self, threshold: f64) -> StabilityResult<BTreeSet<Edge>> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(StabilityError::invalid(
                "threshold",
                format!("must lie in [0, 1], got {threshold}"),
            ));
        }
        Ok(self
            .iter()
            .filter(|(_, f)| *f >= threshold)
            .map(|(e, _)| e.clone())
            .collect())
    }

    /// Consensus graph over `nodes` holding every edge at or above
    /// `threshold`. Endpoints outside `nodes` are added.
    pub fn to_graph<I, N>(&self, nodes: I, threshold: f64) -> StabilityResult<DirectedGraph>
    where
        I: IntoIterator<Item = N>,
        N: Into<NodeName>,
    {
        let mut graph = DirectedGraph::new();
        for node in nodes {
            graph.add_node(node);
        }
        for edge in self.stable_edges(threshold)? {
            // tallied edges come from DirectedGraphs, which hold no self-loops
            let _ = graph.add_edge(edge);
        }
        Ok(graph)
    }

    fn ratio(&self, count: usize) -> f64 {
        if self.resamples == 0 {
            return 0.0;
        }
        count as f64 / self.resamples as f64
    }
}

/// Serialized form: one entry per observed edge.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct StabilityRecord {
    resamples: usize,
    edges: Vec<EdgeFrequency>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct EdgeFrequency {
    source: NodeName,
    target: NodeName,
    count: usize,
    frequency: f64,
}

impl From<EdgeStability> for StabilityRecord {
    fn from(s: EdgeStability) -> Self {
        let edges = s
            .counts
            .iter()
            .map(|(e, &count)| EdgeFrequency {
                source: e.source.clone(),
                target: e.target.clone(),
                count,
                frequency: s.ratio(count),
            })
            .collect();
        Self {
            resamples: s.resamples,
            edges,
        }
    }
}

impl TryFrom<StabilityRecord> for EdgeStability {
    type Error = StabilityError;

    fn try_from(r: StabilityRecord) -> StabilityResult<Self> {
        if r.resamples < 1 {
            return Err(StabilityError::invalid(
                "resamples",
                format!("must be at least 1, got {}", r.resamples),
            ));
        }
        let mut counts = BTreeMap::new();
        for e in r.edges {
            let edge = Edge::new(e.source, e.target);
            if edge.is_self_loop() {
                return Err(StabilityError::invalid(
                    "edges",
                    format!("self-loop {edge} cannot be tallied"),
                ));
            }
            if e.count < 1 || e.count > r.resamples {
                return Err(StabilityError::invalid(
                    "edges",
                    format!(
                        "count {} for {edge} must lie in [1, {}]",
                        e.count, r.resamples
                    ),
                ));
            }
            if counts.insert(edge.clone(), e.count).is_some() {
                return Err(StabilityError::invalid(
                    "edges",
                    format!("{edge} listed more than once"),
                ));
            }
        }
        Ok(Self {
            resamples: r.resamples,
            counts,
        })
    }
}
