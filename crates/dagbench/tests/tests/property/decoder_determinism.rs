//! Property tests: decoding is deterministic and every edge is backed by the
//! matrix.

use dagbench_decode::{decode, AdjacencyMatrix};
use dagbench_types::NodePair;
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Cell values covering zero, both signs and non-unit weights.
fn arb_cell() -> impl Strategy<Value = f64> {
    prop_oneof![
        3 => Just(0.0),
        1 => Just(1.0),
        1 => Just(-1.0),
        1 => -5.0f64..5.0,
    ]
}

/// A square matrix of side 1..=6.
fn arb_matrix() -> impl Strategy<Value = AdjacencyMatrix> {
    (1usize..=6).prop_flat_map(|n| {
        prop::collection::vec(arb_cell(), n * n).prop_map(move |values| {
            AdjacencyMatrix::from_flat(n, n, values).unwrap()
        })
    })
}

fn names(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("V{i}")).collect()
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// Decoding the same input twice yields identical graphs and metadata.
    #[test]
    fn decode_is_deterministic(m in arb_matrix()) {
        let names = names(m.rows());
        let first = decode(&m, names.clone()).unwrap();
        let second = decode(&m, names).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Every name is a node, even when isolated.
    #[test]
    fn every_name_is_a_node(m in arb_matrix()) {
        let names = names(m.rows());
        let (graph, _) = decode(&m, names.clone()).unwrap();
        prop_assert_eq!(graph.node_count(), names.len());
        for name in &names {
            prop_assert!(graph.contains_node(name));
        }
    }

    /// Every output edge has a non-zero cell in at least one of its two
    /// positions, and each variable pair yields at most one edge.
    #[test]
    fn edges_backed_by_nonzero_cells(m in arb_matrix()) {
        let names = names(m.rows());
        let (graph, _) = decode(&m, names.clone()).unwrap();
        let index = |n: &str| names.iter().position(|x| x == n).unwrap();
        for edge in graph.edges() {
            let (i, j) = (index(edge.source.as_str()), index(edge.target.as_str()));
            prop_assert!(i != j);
            prop_assert!(m.get(i, j).unwrap() != 0.0 || m.get(j, i).unwrap() != 0.0);
            prop_assert!(!graph.contains_edge(&edge.reversed()));
        }
    }

    /// A pair is connected exactly when one of its cells is non-zero.
    #[test]
    fn skeleton_matches_nonzero_pairs(m in arb_matrix()) {
        let names = names(m.rows());
        let (graph, _) = decode(&m, names.clone()).unwrap();
        let skeleton = graph.skeleton();
        for i in 0..names.len() {
            for j in (i + 1)..names.len() {
                let nonzero = m.get(i, j).unwrap() != 0.0 || m.get(j, i).unwrap() != 0.0;
                prop_assert_eq!(
                    skeleton.contains(&NodePair::new(names[i].as_str(), names[j].as_str())),
                    nonzero
                );
            }
        }
    }

    /// Ambiguous pairs are oriented lower index to higher index and are
    /// exactly the same-sign pairs.
    #[test]
    fn ambiguous_pairs_are_same_sign(m in arb_matrix()) {
        let names = names(m.rows());
        let (graph, meta) = decode(&m, names.clone()).unwrap();
        for i in 0..names.len() {
            for j in (i + 1)..names.len() {
                let (a, b) = (m.get(i, j).unwrap(), m.get(j, i).unwrap());
                let same_sign = a != 0.0 && b != 0.0 && (a > 0.0) == (b > 0.0);
                prop_assert_eq!(meta.is_ambiguous(&names[i], &names[j]), same_sign);
                if same_sign {
                    prop_assert!(graph.has_edge(&names[i], &names[j]));
                }
            }
        }
    }

    /// Decoded graphs over a strictly upper-triangular matrix are acyclic.
    #[test]
    fn upper_triangular_decodes_acyclic(m in arb_matrix()) {
        let n = m.rows();
        let mut upper = AdjacencyMatrix::zeros(n);
        for i in 0..n {
            for j in (i + 1)..n {
                upper.set(i, j, m.get(i, j).unwrap());
            }
        }
        let (graph, meta) = decode(&upper, names(n)).unwrap();
        prop_assert!(graph.is_acyclic());
        prop_assert_eq!(meta.ambiguous_count(), 0);
    }
}
