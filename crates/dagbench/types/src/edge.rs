//! Node names, directed edges and unordered node pairs.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of a variable, used as a graph node label.
///
/// Node names are the dataset column names, so they compare and order as
/// plain strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeName(pub String);

impl NodeName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&NodeName> for NodeName {
    fn from(n: &NodeName) -> Self {
        n.clone()
    }
}

impl Borrow<str> for NodeName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A directed edge `source -> target`.
///
/// Ordering is lexicographic on `(source, target)`, which gives every edge
/// set a stable iteration order.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: NodeName,
    pub target: NodeName,
}

impl Edge {
    pub fn new(source: impl Into<NodeName>, target: impl Into<NodeName>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// The same node pair with the direction flipped.
    pub fn reversed(&self) -> Self {
        Self {
            source: self.target.clone(),
            target: self.source.clone(),
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// Whether `node` is one of the two endpoints.
    pub fn touches(&self, node: &str) -> bool {
        self.source.as_str() == node || self.target.as_str() == node
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

impl<A: Into<NodeName>, B: Into<NodeName>> From<(A, B)> for Edge {
    fn from((source, target): (A, B)) -> Self {
        Self::new(source, target)
    }
}

/// An unordered pair of node names.
///
/// `NodePair::new("B", "A") == NodePair::new("A", "B")`: the two names are
/// stored in ascending order.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "(NodeName, NodeName)", into = "(NodeName, NodeName)")]
pub struct NodePair {
    first: NodeName,
    second: NodeName,
}

impl NodePair {
    pub fn new(a: impl Into<NodeName>, b: impl Into<NodeName>) -> Self {
        let (a, b) = (a.into(), b.into());
        if a <= b {
            Self { first: a, second: b }
        } else {
            Self { first: b, second: a }
        }
    }

    pub fn first(&self) -> &NodeName {
        &self.first
    }

    pub fn second(&self) -> &NodeName {
        &self.second
    }

    pub fn contains(&self, node: &str) -> bool {
        self.first.as_str() == node || self.second.as_str() == node
    }

    /// Whether `edge` joins the two nodes of this pair, in either direction.
    pub fn matches(&self, edge: &Edge) -> bool {
        *self == NodePair::from(edge)
    }
}

impl fmt::Display for NodePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {}", self.first, self.second)
    }
}

impl From<&Edge> for NodePair {
    fn from(edge: &Edge) -> Self {
        Self::new(edge.source.clone(), edge.target.clone())
    }
}

impl From<(NodeName, NodeName)> for NodePair {
    fn from((a, b): (NodeName, NodeName)) -> Self {
        Self::new(a, b)
    }
}

impl From<NodePair> for (NodeName, NodeName) {
    fn from(pair: NodePair) -> Self {
        (pair.first, pair.second)
    }
}
