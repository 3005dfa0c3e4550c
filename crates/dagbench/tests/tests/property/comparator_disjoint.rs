//! Property tests: the comparator partitions both graphs' edges into
//! disjoint categories.

use dagbench_compare::compare;
use dagbench_types::{DirectedGraph, Edge};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const NODES: [&str; 5] = ["A", "B", "C", "D", "E"];

/// For each unordered node pair: absent, forward or backward.
fn arb_graph() -> impl Strategy<Value = DirectedGraph> {
    let pairs = NODES.len() * (NODES.len() - 1) / 2;
    prop::collection::vec(0u8..3, pairs).prop_map(|choices| {
        let mut graph = DirectedGraph::with_nodes(NODES).unwrap();
        let mut k = 0;
        for i in 0..NODES.len() {
            for j in (i + 1)..NODES.len() {
                match choices[k] {
                    1 => {
                        graph.add_edge((NODES[i], NODES[j])).unwrap();
                    }
                    2 => {
                        graph.add_edge((NODES[j], NODES[i])).unwrap();
                    }
                    _ => {}
                }
                k += 1;
            }
        }
        graph
    })
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// extra, missing and reversed never share an edge.
    #[test]
    fn categories_are_disjoint(p in arb_graph(), t in arb_graph()) {
        let diff = compare(&p, &t);
        prop_assert!(diff.extra.is_disjoint(&diff.missing));
        prop_assert!(diff.extra.is_disjoint(&diff.reversed));
        prop_assert!(diff.missing.is_disjoint(&diff.reversed));
    }

    /// Every predicted edge is matched, extra or reversed; every true edge is
    /// matched, missing or the reversal of a reversed edge.
    #[test]
    fn classification_is_complete(p in arb_graph(), t in arb_graph()) {
        let diff = compare(&p, &t);
        prop_assert_eq!(diff.matched + diff.extra.len() + diff.reversed.len(), p.edge_count());
        prop_assert_eq!(diff.matched + diff.missing.len() + diff.reversed.len(), t.edge_count());
        for edge in &diff.extra {
            prop_assert!(p.contains_edge(edge));
            prop_assert!(!t.contains_edge(edge) && !t.contains_edge(&edge.reversed()));
        }
        for edge in &diff.missing {
            prop_assert!(t.contains_edge(edge));
            prop_assert!(!p.contains_edge(edge) && !p.contains_edge(&edge.reversed()));
        }
        for edge in &diff.reversed {
            prop_assert!(p.contains_edge(edge));
            prop_assert!(t.contains_edge(&edge.reversed()));
        }
    }

    /// Comparing a graph with itself reports nothing.
    #[test]
    fn self_comparison_is_exact(g in arb_graph()) {
        let diff = compare(&g, &g);
        prop_assert!(diff.is_exact());
        prop_assert_eq!(diff.shd(), 0);
        prop_assert_eq!(diff.matched, g.edge_count());
    }

    /// Swapping the roles swaps extra and missing and flips reversed.
    #[test]
    fn swapping_roles_mirrors_result(p in arb_graph(), t in arb_graph()) {
        let forward = compare(&p, &t);
        let backward = compare(&t, &p);
        prop_assert_eq!(&forward.extra, &backward.missing);
        prop_assert_eq!(&forward.missing, &backward.extra);
        let flipped: std::collections::BTreeSet<Edge> =
            forward.reversed.iter().map(Edge::reversed).collect();
        prop_assert_eq!(&flipped, &backward.reversed);
        prop_assert_eq!(forward.shd(), backward.shd());
    }
}
