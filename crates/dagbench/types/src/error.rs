use crate::edge::NodeName;

/// Errors from directed-graph construction and traversal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("self-loop on node {0} is not allowed")]
    SelfLoop(NodeName),

    #[error("duplicate node: {0}")]
    DuplicateNode(NodeName),

    #[error("graph contains a directed cycle through {0}")]
    Cycle(NodeName),
}

/// Errors from dataset construction and access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatasetError {
    #[error("duplicate column: {0}")]
    DuplicateColumn(String),

    #[error("row {row} has {actual} values, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("column {column} has {actual} values, expected {expected}")]
    ColumnLength {
        column: String,
        expected: usize,
        actual: usize,
    },

    #[error("row index {index} out of range for {rows} rows")]
    RowOutOfRange { index: usize, rows: usize },

    #[error("unknown column: {0}")]
    UnknownColumn(String),
}
