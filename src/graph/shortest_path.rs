//! Unweighted shortest path by level-order expansion.

use std::collections::HashSet;
use std::hash::Hash;

use crate::types::{GraphResult, Vertex, VertexId};

use super::Graph;

impl<L: Clone + Eq + Hash> Graph<L> {
    /// Number of edges on a shortest path from `a` to `b`.
    ///
    /// Returns `Ok(None)` when `b` is unreachable. The target is recognised
    /// by label and visited vertices are tracked by label, same as the
    /// traversals.
    pub fn shortest_path(&self, a: &Vertex<L>, b: &Vertex<L>) -> GraphResult<Option<usize>> {
        self.ensure_members(a, b)?;

        let goal = b.label();
        let mut seen: HashSet<L> = HashSet::new();
        seen.insert(a.label().clone());
        let mut level: Vec<VertexId> = vec![a.id()];
        let mut hops = 0;

        while !level.is_empty() {
            let mut next = Vec::new();
            for &current in &level {
                if self.label(current) == Some(goal) {
                    return Ok(Some(hops));
                }
                for neighbor in self.adjacent(current) {
                    let Some(label) = self.label(neighbor) else {
                        continue;
                    };
                    if seen.insert(label.clone()) {
                        next.push(neighbor);
                    }
                }
            }
            level = next;
            hops += 1;
        }

        log::debug!("no path between {} and {}", a.id(), b.id());
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GraphError;

    #[test]
    fn same_vertex_is_zero_hops() {
        let mut graph = Graph::new();
        let a = Vertex::new("a");
        graph.add_vertex(&a);
        assert_eq!(graph.shortest_path(&a, &a).unwrap(), Some(0));
    }

    #[test]
    fn cycle_takes_shorter_side() {
        let mut graph = Graph::new();
        let ring: Vec<_> = (0..6).map(Vertex::new).collect();
        graph.add_vertices(&ring);
        for i in 0..ring.len() {
            let _ = graph.add_edge(&ring[i], &ring[(i + 1) % ring.len()]);
        }
        assert_eq!(graph.shortest_path(&ring[0], &ring[5]).unwrap(), Some(1));
        assert_eq!(graph.shortest_path(&ring[0], &ring[3]).unwrap(), Some(3));
        assert_eq!(graph.shortest_path(&ring[1], &ring[4]).unwrap(), Some(3));
    }

    #[test]
    fn non_member_is_an_error() {
        let graph: Graph<&str> = Graph::new();
        let a = Vertex::new("a");
        assert!(matches!(
            graph.shortest_path(&a, &a),
            Err(GraphError::NotOnGraph)
        ));
    }
}
