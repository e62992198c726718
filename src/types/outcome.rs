//! Outcome of an edge mutation.

use super::VertexId;

/// What an edge mutation did.
///
/// A missing endpoint is a returned failure, not an error: the graph is left
/// untouched and the caller decides what to do about it.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeOutcome {
    /// The edge was inserted or removed.
    Applied,
    /// Both endpoints are members but nothing changed (edge already present
    /// on insert, absent on removal).
    Unchanged,
    /// The given endpoint is not a member of the graph.
    MissingEndpoint(VertexId),
}

impl EdgeOutcome {
    /// `true` for `Applied` and `Unchanged`.
    pub fn is_success(self) -> bool {
        !self.is_failure()
    }

    /// `true` only for `MissingEndpoint`.
    pub fn is_failure(self) -> bool {
        matches!(self, EdgeOutcome::MissingEndpoint(_))
    }

    /// `true` if the graph was modified.
    pub fn is_applied(self) -> bool {
        self == EdgeOutcome::Applied
    }
}
