//! End-to-end test: a learner's raw matrix is decoded and scored against the
//! true graph.

use dagbench_compare::compare;
use dagbench_decode::{decode, AdjacencyMatrix, DecodeError};
use dagbench_types::{DirectedGraph, Edge};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn matrix(rows: Vec<Vec<f64>>) -> AdjacencyMatrix {
    AdjacencyMatrix::from_rows(rows).unwrap()
}

fn edges(graph: &DirectedGraph) -> Vec<(String, String)> {
    graph
        .edges()
        .iter()
        .map(|e| (e.source.to_string(), e.target.to_string()))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn oriented_pair_decodes_to_single_edge() {
    let (graph, meta) = decode(&matrix(vec![vec![0.0, 1.0], vec![-1.0, 0.0]]), ["X", "Y"]).unwrap();
    assert_eq!(edges(&graph), vec![("X".into(), "Y".into())]);
    assert!(meta.undirected_edges.is_empty());
}

#[test]
fn symmetric_pair_decodes_as_ambiguous() {
    let (graph, meta) = decode(&matrix(vec![vec![0.0, 1.0], vec![1.0, 0.0]]), ["A", "B"]).unwrap();
    assert_eq!(edges(&graph), vec![("A".into(), "B".into())]);
    assert!(meta.is_ambiguous("A", "B"));
    assert_eq!(
        serde_json::to_value(meta.to_metadata()).unwrap(),
        serde_json::json!({ "undirected_edges": [["A", "B"]] })
    );
}

#[test]
fn decoded_prediction_scored_against_truth() {
    // Prediction over [A, B, C]: A -> B, C -> B, A -> C.
    let predicted = matrix(vec![
        vec![0.0, 1.0, 1.0],
        vec![-1.0, 0.0, -1.0],
        vec![-1.0, 1.0, 0.0],
    ]);
    let (predicted, meta) = decode(&predicted, ["A", "B", "C"]).unwrap();
    assert_eq!(meta.ambiguous_count(), 0);
    assert!(predicted.has_edge("C", "B"));

    let truth = DirectedGraph::from_edges([("A", "B"), ("B", "C")]).unwrap();
    let diff = compare(&predicted, &truth);
    assert_eq!(diff.extra.into_iter().collect::<Vec<_>>(), vec![Edge::new("A", "C")]);
    assert!(diff.missing.is_empty());
    assert_eq!(diff.reversed.into_iter().collect::<Vec<_>>(), vec![Edge::new("C", "B")]);
    assert_eq!(diff.matched, 1);
}

#[test]
fn isolated_truth_node_does_not_disturb_comparison() {
    let (predicted, _) =
        decode(&matrix(vec![vec![0.0, 1.0], vec![0.0, 0.0]]), ["A", "B"]).unwrap();
    let mut truth = DirectedGraph::from_edges([("A", "B")]).unwrap();
    truth.add_node("Q");
    let diff = compare(&predicted, &truth);
    assert!(diff.is_exact());
}

#[test]
fn prediction_over_other_variables_counts_as_extra_and_missing() {
    let (predicted, _) =
        decode(&matrix(vec![vec![0.0, 1.0], vec![0.0, 0.0]]), ["U", "V"]).unwrap();
    let truth = DirectedGraph::from_edges([("A", "B")]).unwrap();
    let diff = compare(&predicted, &truth);
    assert!(diff.extra.contains(&Edge::new("U", "V")));
    assert!(diff.missing.contains(&Edge::new("A", "B")));
    assert_eq!(diff.shd(), 2);
}

#[test]
fn decoded_graph_can_be_checked_for_cycles() {
    // A -> B, B -> C, C -> A.
    let cyclic = matrix(vec![
        vec![0.0, 1.0, -1.0],
        vec![-1.0, 0.0, 1.0],
        vec![1.0, -1.0, 0.0],
    ]);
    let (graph, _) = decode(&cyclic, ["A", "B", "C"]).unwrap();
    assert_eq!(graph.edge_count(), 3);
    assert!(!graph.is_acyclic());
}

#[test]
fn malformed_inputs_rejected() {
    let m = matrix(vec![vec![0.0, 1.0], vec![0.0, 0.0]]);
    assert!(matches!(
        decode(&m, ["A", "B", "C"]),
        Err(DecodeError::ShapeMismatch { .. })
    ));
    assert!(matches!(
        decode(&m, ["A", "A"]),
        Err(DecodeError::DuplicateNode(_))
    ));
    let nan = matrix(vec![vec![0.0, f64::NAN], vec![0.0, 0.0]]);
    assert!(matches!(
        decode(&nan, ["A", "B"]),
        Err(DecodeError::NonFiniteCell { row: 0, col: 1, .. })
    ));
}
