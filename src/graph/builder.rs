//! Fluent API for building label-keyed graphs.

use std::fmt::Display;
use std::hash::Hash;

use indexmap::IndexMap;

use crate::types::{GraphError, GraphResult, Vertex};

use super::Graph;

/// A graph together with the vertex handle behind each label.
#[derive(Debug, Clone)]
pub struct LabeledGraph<L> {
    graph: Graph<L>,
    vertices: IndexMap<L, Vertex<L>>,
}

impl<L: Eq + Hash> LabeledGraph<L> {
    /// The vertex carrying `label`, if one was declared.
    pub fn vertex(&self, label: &L) -> Option<&Vertex<L>> {
        self.vertices.get(label)
    }

    /// Like [`vertex`](Self::vertex) but fails with `UnknownLabel`.
    pub fn require(&self, label: &L) -> GraphResult<&Vertex<L>>
    where
        L: Display,
    {
        self.vertex(label)
            .ok_or_else(|| GraphError::UnknownLabel(label.to_string()))
    }

    /// All declared vertices in declaration order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<L>> + '_ {
        self.vertices.values()
    }

    /// The underlying graph.
    pub fn graph(&self) -> &Graph<L> {
        &self.graph
    }

    /// The underlying graph (mutable).
    pub fn graph_mut(&mut self) -> &mut Graph<L> {
        &mut self.graph
    }

    /// Split into the graph and the label index.
    pub fn into_parts(self) -> (Graph<L>, IndexMap<L, Vertex<L>>) {
        (self.graph, self.vertices)
    }
}

/// Fluent builder for constructing a [`LabeledGraph`].
///
/// One vertex is created per distinct label.
pub struct GraphBuilder<L> {
    labels: Vec<L>,
    edges: Vec<(L, L)>,
    auto_declare: bool,
}

impl<L> GraphBuilder<L>
where
    L: Clone + Eq + Hash + Display,
{
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            labels: Vec::new(),
            edges: Vec::new(),
            auto_declare: false,
        }
    }

    /// Declare endpoints of edges that were not declared as vertices.
    pub fn auto_declare(mut self, enabled: bool) -> Self {
        self.auto_declare = enabled;
        self
    }

    /// Declare a vertex.
    pub fn vertex(mut self, label: L) -> Self {
        self.labels.push(label);
        self
    }

    /// Declare several vertices.
    pub fn vertices<I: IntoIterator<Item = L>>(mut self, labels: I) -> Self {
        self.labels.extend(labels);
        self
    }

    /// Connect two labels.
    pub fn edge(mut self, a: L, b: L) -> Self {
        self.edges.push((a, b));
        self
    }

    /// Connect several label pairs.
    pub fn edges<I: IntoIterator<Item = (L, L)>>(mut self, pairs: I) -> Self {
        self.edges.extend(pairs);
        self
    }

    /// Build the final graph.
    pub fn build(self) -> GraphResult<LabeledGraph<L>> {
        let mut graph = Graph::new();
        let mut vertices: IndexMap<L, Vertex<L>> = IndexMap::new();

        for label in self.labels {
            declare(&mut graph, &mut vertices, label);
        }

        for (a, b) in self.edges {
            if self.auto_declare {
                declare(&mut graph, &mut vertices, a.clone());
                declare(&mut graph, &mut vertices, b.clone());
            }
            let va = vertices
                .get(&a)
                .ok_or_else(|| GraphError::UnknownLabel(a.to_string()))?;
            let vb = vertices
                .get(&b)
                .ok_or_else(|| GraphError::UnknownLabel(b.to_string()))?;
            let _ = graph.add_edge(va, vb);
        }

        Ok(LabeledGraph { graph, vertices })
    }
}

fn declare<L: Clone + Eq + Hash>(
    graph: &mut Graph<L>,
    vertices: &mut IndexMap<L, Vertex<L>>,
    label: L,
) {
    if !vertices.contains_key(&label) {
        let vertex = Vertex::new(label.clone());
        graph.add_vertex(&vertex);
        vertices.insert(label, vertex);
    }
}

impl<L> Default for GraphBuilder<L>
where
    L: Clone + Eq + Hash + Display,
{
    fn default() -> Self {
        Self::new()
    }
}
