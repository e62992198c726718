//! Error types for the undigraph library.

use thiserror::Error;

use super::VertexId;

/// All errors that can be raised by graph operations.
///
/// Edge mutation never raises; it reports a missing endpoint through
/// [`EdgeOutcome`](super::EdgeOutcome) instead.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Vertex removal was asked for a vertex that is not a member.
    #[error("node not in graph: {0}")]
    VertexNotFound(VertexId),

    /// A connectivity or shortest-path query named a non-member endpoint.
    #[error("Both nodes should be on the graph")]
    NotOnGraph,

    /// A label was referenced that no declared vertex carries.
    #[error("Unknown vertex label: {0}")]
    UnknownLabel(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed graph description.
    #[error("Invalid graph description: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
