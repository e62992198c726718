//! Reachability queries between two member vertices.

use std::collections::HashSet;

use crate::types::{GraphError, GraphResult, Vertex};

use super::traversal::{Frontier, SearchOrder};
use super::Graph;

impl<L> Graph<L> {
    /// Whether `b` is reachable from `a`, searching with a stack.
    pub fn are_connected_dfs(&self, a: &Vertex<L>, b: &Vertex<L>) -> GraphResult<bool> {
        self.are_connected(a, b, SearchOrder::DepthFirst)
    }

    /// Whether `b` is reachable from `a`, searching with a queue.
    pub fn are_connected_bfs(&self, a: &Vertex<L>, b: &Vertex<L>) -> GraphResult<bool> {
        self.are_connected(a, b, SearchOrder::BreadthFirst)
    }

    /// Whether `b` is reachable from `a`.
    ///
    /// Unlike the label-based traversals, vertices are tracked by identity
    /// here. A vertex is always connected to itself.
    pub fn are_connected(
        &self,
        a: &Vertex<L>,
        b: &Vertex<L>,
        order: SearchOrder,
    ) -> GraphResult<bool> {
        self.ensure_members(a, b)?;

        let goal = b.id();
        let mut seen = HashSet::new();
        seen.insert(a.id());
        let mut frontier = Frontier::new(order, a.id());

        while let Some(current) = frontier.pop() {
            if current == goal {
                return Ok(true);
            }
            for neighbor in self.adjacent(current) {
                if seen.insert(neighbor) {
                    frontier.push(neighbor);
                }
            }
        }

        Ok(false)
    }

    /// Both query endpoints must be members.
    pub(crate) fn ensure_members(&self, a: &Vertex<L>, b: &Vertex<L>) -> GraphResult<()> {
        if self.contains(a) && self.contains(b) {
            Ok(())
        } else {
            Err(GraphError::NotOnGraph)
        }
    }
}
