//! In-memory graph operations — the core data structure.

pub mod builder;
pub mod connectivity;
pub mod shortest_path;
pub mod traversal;
pub mod undirected_graph;

pub use builder::{GraphBuilder, LabeledGraph};
pub use traversal::{LogObserver, NoopObserver, SearchOrder, TraversalObserver};
pub use undirected_graph::Graph;
