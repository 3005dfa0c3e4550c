use dagbench_types::NodeName;
use thiserror::Error;

/// Errors from adjacency-matrix decoding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("shape mismatch: matrix is {rows}x{cols} but {nodes} node names were given")]
    ShapeMismatch {
        rows: usize,
        cols: usize,
        nodes: usize,
    },

    #[error("ragged matrix: row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("buffer of {len} cells does not fill a {rows}x{cols} matrix")]
    BufferLength { rows: usize, cols: usize, len: usize },

    #[error("duplicate node name: {0}")]
    DuplicateNode(NodeName),

    #[error("non-finite cell ({row}, {col}): {value}")]
    NonFiniteCell { row: usize, col: usize, value: f64 },
}

/// Convenience type alias for decoding results.
pub type DecodeResult<T> = Result<T, DecodeError>;
