#![deny(unsafe_code)]
//! # dagbench-compare
//!
//! Scores a predicted directed graph against a ground-truth graph by edge
//! category.
//!
//! Every predicted edge is either matched, **extra**, or the predicted side
//! of a **reversed** pair; every true edge is either matched, **missing**, or
//! the true side of a reversed pair. The three reported sets are pairwise
//! disjoint.

use std::collections::BTreeSet;

use dagbench_types::{DirectedGraph, Edge};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Edge-level difference between a prediction and the truth.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralDiff {
    /// In the prediction, absent from the truth in either direction.
    pub extra: BTreeSet<Edge>,
    /// In the truth, absent from the prediction in either direction.
    pub missing: BTreeSet<Edge>,
    /// Predicted edges whose reversal is the true edge, in predicted
    /// orientation.
    pub reversed: BTreeSet<Edge>,
    /// Number of predicted edges present in the truth with the same
    /// direction.
    pub matched: usize,
}

impl StructuralDiff {
    /// Structural Hamming distance: one unit per extra, missing or reversed
    /// edge.
    pub fn shd(&self) -> usize {
        self.extra.len() + self.missing.len() + self.reversed.len()
    }

    /// True when the prediction equals the truth edge-for-edge.
    pub fn is_exact(&self) -> bool {
        self.shd() == 0
    }

    /// `(extra, missing, reversed)`, consuming the diff.
    pub fn into_parts(self) -> (BTreeSet<Edge>, BTreeSet<Edge>, BTreeSet<Edge>) {
        (self.extra, self.missing, self.reversed)
    }
}

/// Compare `predicted` against `truth`.
///
/// Node sets need not agree: an edge touching a node the other graph lacks is
/// simply absent on that side.
pub fn compare(predicted: &DirectedGraph, truth: &DirectedGraph) -> StructuralDiff {
    let mut diff = StructuralDiff::default();

    for edge in predicted.edges() {
        if truth.contains_edge(edge) {
            diff.matched += 1;
        } else if truth.contains_edge(&edge.reversed()) {
            diff.reversed.insert(edge.clone());
        } else {
            diff.extra.insert(edge.clone());
        }
    }

    for edge in truth.edges() {
        if predicted.contains_edge(edge) || diff.reversed.contains(&edge.reversed()) {
            continue;
        }
        diff.missing.insert(edge.clone());
    }

    trace!(
        matched = diff.matched,
        extra = diff.extra.len(),
        missing = diff.missing.len(),
        reversed = diff.reversed.len(),
        "structural comparison"
    );
    diff
}
