//! Error types, one enum per subsystem.

use std::path::PathBuf;

/// Failures while seeding a [`Grid`](crate::domain::Grid).
///
/// Seeding from text is best effort: when one of these is returned the
/// rows that could be read are already populated and the rest stay dead.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error("seed has {found} rows, expected {expected}")]
    MissingRows { expected: usize, found: usize },

    #[error("seed row {row} has {found} cells, expected {expected}")]
    ShortRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("alive probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("failed to read seed file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures of graph queries that require an existing vertex.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex {vertex} does not exist in the graph")]
    VertexNotFound { vertex: String },
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EstimateError {
    #[error("at least one sample point is required")]
    NoPoints,
}
