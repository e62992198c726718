//! Vertex handles and their identities.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_VERTEX_ID: AtomicU64 = AtomicU64::new(0);

/// Process-unique identity of a [`Vertex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(u64);

impl VertexId {
    fn next() -> Self {
        Self(NEXT_VERTEX_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw numeric value of this id.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A labelled vertex, constructed independently of any graph.
///
/// Every call to [`Vertex::new`] mints a fresh identity, so two vertices with
/// equal labels are still distinct. Cloning keeps the identity: a clone is
/// another handle to the same vertex. Equality and hashing look at the
/// identity only.
#[derive(Debug, Clone)]
pub struct Vertex<L> {
    id: VertexId,
    label: L,
}

impl<L> Vertex<L> {
    /// Create a new vertex with a fresh identity.
    pub fn new(label: L) -> Self {
        Self {
            id: VertexId::next(),
            label,
        }
    }

    /// The identity of this vertex.
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// The caller-supplied label.
    pub fn label(&self) -> &L {
        &self.label
    }
}

impl<L> PartialEq for Vertex<L> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<L> Eq for Vertex<L> {}

impl<L> Hash for Vertex<L> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
