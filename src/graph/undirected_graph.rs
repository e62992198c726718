//! Core graph structure — a vertex arena with symmetric adjacency sets.

use indexmap::{IndexMap, IndexSet};

use crate::types::{EdgeOutcome, GraphError, GraphResult, Vertex, VertexId};

/// Arena slot for a registered vertex.
#[derive(Debug, Clone)]
struct VertexEntry<L> {
    label: L,
    /// Neighbours in the order the edges were added.
    adjacent: IndexSet<VertexId>,
}

/// An in-memory undirected graph over labelled vertices.
///
/// Membership and edge endpoints are decided by vertex identity. Every edge
/// is stored in the adjacency sets of both endpoints.
#[derive(Debug, Clone)]
pub struct Graph<L> {
    /// All member vertices, in insertion order.
    vertices: IndexMap<VertexId, VertexEntry<L>>,
}

impl<L> Graph<L> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            vertices: IndexMap::new(),
        }
    }

    /// Number of member vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of undirected edges. A self edge counts once.
    pub fn edge_count(&self) -> usize {
        self.vertices
            .iter()
            .map(|(id, entry)| entry.adjacent.iter().filter(|n| id <= *n).count())
            .sum()
    }

    /// `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Whether `vertex` is a member.
    pub fn contains(&self, vertex: &Vertex<L>) -> bool {
        self.contains_id(vertex.id())
    }

    /// Whether a vertex with this identity is a member.
    pub fn contains_id(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    /// Label of a member vertex.
    pub fn label(&self, id: VertexId) -> Option<&L> {
        self.vertices.get(&id).map(|entry| &entry.label)
    }

    /// Ids of all member vertices, in insertion order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.keys().copied()
    }

    /// Labels of all member vertices, in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &L> + '_ {
        self.vertices.values().map(|entry| &entry.label)
    }

    /// Neighbours of `vertex` in edge insertion order. Empty for non-members.
    pub fn neighbors(&self, vertex: &Vertex<L>) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacent(vertex.id())
    }

    /// Number of neighbours, or `None` if `vertex` is not a member.
    pub fn degree(&self, vertex: &Vertex<L>) -> Option<usize> {
        self.vertices
            .get(&vertex.id())
            .map(|entry| entry.adjacent.len())
    }

    /// Whether `b` is in the adjacency set of `a`.
    pub fn is_adjacent(&self, a: &Vertex<L>, b: &Vertex<L>) -> bool {
        self.vertices
            .get(&a.id())
            .is_some_and(|entry| entry.adjacent.contains(&b.id()))
    }

    /// Add an undirected edge between two members.
    ///
    /// Returns [`EdgeOutcome::MissingEndpoint`] without touching the graph if
    /// either vertex is not a member.
    pub fn add_edge(&mut self, a: &Vertex<L>, b: &Vertex<L>) -> EdgeOutcome {
        if let Some(missing) = self.missing_endpoint(a.id(), b.id()) {
            log::debug!("add_edge {} -- {}: {} not in graph", a.id(), b.id(), missing);
            return EdgeOutcome::MissingEndpoint(missing);
        }

        let forward = self.link(a.id(), b.id());
        let backward = self.link(b.id(), a.id());
        if forward || backward {
            log::debug!("added edge {} -- {}", a.id(), b.id());
            EdgeOutcome::Applied
        } else {
            EdgeOutcome::Unchanged
        }
    }

    /// Remove the undirected edge between two members.
    ///
    /// Removing an edge that does not exist is a no-op reported as
    /// [`EdgeOutcome::Unchanged`].
    pub fn remove_edge(&mut self, a: &Vertex<L>, b: &Vertex<L>) -> EdgeOutcome {
        if let Some(missing) = self.missing_endpoint(a.id(), b.id()) {
            log::debug!("remove_edge {} -- {}: {} not in graph", a.id(), b.id(), missing);
            return EdgeOutcome::MissingEndpoint(missing);
        }

        if !(self.is_adjacent(a, b) && self.is_adjacent(b, a)) {
            return EdgeOutcome::Unchanged;
        }

        self.unlink(a.id(), b.id());
        self.unlink(b.id(), a.id());
        log::debug!("removed edge {} -- {}", a.id(), b.id());
        EdgeOutcome::Applied
    }

    /// Remove a vertex together with all of its edges.
    pub fn remove_vertex(&mut self, vertex: &Vertex<L>) -> GraphResult<()> {
        let id = vertex.id();
        let entry = self
            .vertices
            .shift_remove(&id)
            .ok_or(GraphError::VertexNotFound(id))?;

        for neighbor in &entry.adjacent {
            self.unlink(*neighbor, id);
        }

        log::debug!("removed vertex {} ({} edges)", id, entry.adjacent.len());
        Ok(())
    }

    /// Adjacency of a vertex by id. Empty for non-members.
    pub(crate) fn adjacent(&self, id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices
            .get(&id)
            .into_iter()
            .flat_map(|entry| entry.adjacent.iter().copied())
    }

    /// Both endpoints are checked, `a` first.
    fn missing_endpoint(&self, a: VertexId, b: VertexId) -> Option<VertexId> {
        [a, b].into_iter().find(|id| !self.contains_id(*id))
    }

    fn link(&mut self, from: VertexId, to: VertexId) -> bool {
        match self.vertices.get_mut(&from) {
            Some(entry) => entry.adjacent.insert(to),
            None => false,
        }
    }

    fn unlink(&mut self, from: VertexId, to: VertexId) -> bool {
        match self.vertices.get_mut(&from) {
            Some(entry) => entry.adjacent.shift_remove(&to),
            None => false,
        }
    }
}

impl<L: Clone> Graph<L> {
    /// Register a vertex. Returns `true` if it was not already a member.
    pub fn add_vertex(&mut self, vertex: &Vertex<L>) -> bool {
        if self.contains(vertex) {
            return false;
        }
        self.vertices.insert(
            vertex.id(),
            VertexEntry {
                label: vertex.label().clone(),
                adjacent: IndexSet::new(),
            },
        );
        true
    }

    /// Register several vertices. Returns how many were newly inserted.
    pub fn add_vertices<'a, I>(&mut self, vertices: I) -> usize
    where
        I: IntoIterator<Item = &'a Vertex<L>>,
        L: 'a,
    {
        vertices
            .into_iter()
            .filter(|vertex| self.add_vertex(vertex))
            .count()
    }
}

impl<L> Default for Graph<L> {
    fn default() -> Self {
        Self::new()
    }
}
