//! undigraph — an in-memory undirected graph.
//!
//! Vertices are labelled handles created independently of any graph and
//! registered by identity. The graph supports vertex/edge mutation,
//! depth-first and breadth-first traversal, connectivity tests and
//! unweighted shortest paths.

pub mod cli;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::GraphDescription;
pub use graph::{
    Graph, GraphBuilder, LabeledGraph, LogObserver, NoopObserver, SearchOrder, TraversalObserver,
};
pub use types::{EdgeOutcome, GraphError, GraphResult, Vertex, VertexId};
