//! Graph traversal algorithms (DFS/BFS) with pluggable visit observers.

use std::collections::{HashSet, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

use crate::types::{Vertex, VertexId};

use super::Graph;

/// Frontier discipline of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchOrder {
    /// Last in, first out.
    DepthFirst,
    /// First in, first out.
    #[default]
    BreadthFirst,
}

impl SearchOrder {
    /// Parse "dfs"/"depth" or "bfs"/"breadth".
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "dfs" | "depth" | "depth-first" => Some(SearchOrder::DepthFirst),
            "bfs" | "breadth" | "breadth-first" => Some(SearchOrder::BreadthFirst),
            _ => None,
        }
    }

    /// Short name used in output.
    pub fn name(self) -> &'static str {
        match self {
            SearchOrder::DepthFirst => "dfs",
            SearchOrder::BreadthFirst => "bfs",
        }
    }
}

/// Search frontier: a deque used as a stack or as a queue.
pub(crate) struct Frontier {
    order: SearchOrder,
    items: VecDeque<VertexId>,
}

impl Frontier {
    pub(crate) fn new(order: SearchOrder, start: VertexId) -> Self {
        let mut items = VecDeque::new();
        items.push_back(start);
        Self { order, items }
    }

    pub(crate) fn push(&mut self, id: VertexId) {
        self.items.push_back(id);
    }

    pub(crate) fn pop(&mut self) -> Option<VertexId> {
        match self.order {
            SearchOrder::DepthFirst => self.items.pop_back(),
            SearchOrder::BreadthFirst => self.items.pop_front(),
        }
    }
}

/// Receives every vertex label a traversal visits, in visitation order.
pub trait TraversalObserver<L> {
    /// Called once per visited vertex.
    fn on_visit(&mut self, label: &L);
}

/// Observer that ignores every visit.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl<L> TraversalObserver<L> for NoopObserver {
    fn on_visit(&mut self, _label: &L) {}
}

/// Observer that emits a `trace` log record per visit.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl<L: Debug> TraversalObserver<L> for LogObserver {
    fn on_visit(&mut self, label: &L) {
        log::trace!("visited {:?}", label);
    }
}

impl<L, F: FnMut(&L)> TraversalObserver<L> for F {
    fn on_visit(&mut self, label: &L) {
        self(label)
    }
}

impl<L: Clone + Eq + Hash> Graph<L> {
    /// Depth-first traversal from `start`, returning labels in visit order.
    ///
    /// Returns `None` if `start` is not a member.
    pub fn depth_first_search(&self, start: &Vertex<L>) -> Option<Vec<L>> {
        self.traverse(start, SearchOrder::DepthFirst, &mut NoopObserver)
    }

    /// [`depth_first_search`](Self::depth_first_search) reporting each visit
    /// to `observer`.
    pub fn depth_first_search_with<O>(&self, start: &Vertex<L>, observer: &mut O) -> Option<Vec<L>>
    where
        O: TraversalObserver<L>,
    {
        self.traverse(start, SearchOrder::DepthFirst, observer)
    }

    /// Breadth-first traversal from `start`, returning labels in level order.
    ///
    /// Returns `None` if `start` is not a member.
    pub fn breadth_first_search(&self, start: &Vertex<L>) -> Option<Vec<L>> {
        self.traverse(start, SearchOrder::BreadthFirst, &mut NoopObserver)
    }

    /// [`breadth_first_search`](Self::breadth_first_search) reporting each
    /// visit to `observer`.
    pub fn breadth_first_search_with<O>(
        &self,
        start: &Vertex<L>,
        observer: &mut O,
    ) -> Option<Vec<L>>
    where
        O: TraversalObserver<L>,
    {
        self.traverse(start, SearchOrder::BreadthFirst, observer)
    }

    /// Traverse everything reachable from `start`.
    ///
    /// Vertices are marked visited by label when they are discovered, so
    /// distinct vertices sharing a label are visited at most once in total.
    pub fn traverse<O>(
        &self,
        start: &Vertex<L>,
        order: SearchOrder,
        observer: &mut O,
    ) -> Option<Vec<L>>
    where
        O: TraversalObserver<L>,
    {
        if !self.contains(start) {
            return None;
        }

        let mut seen: HashSet<L> = HashSet::new();
        seen.insert(start.label().clone());
        let mut frontier = Frontier::new(order, start.id());
        let mut visited = Vec::new();

        while let Some(current) = frontier.pop() {
            for neighbor in self.adjacent(current) {
                let Some(label) = self.label(neighbor) else {
                    continue;
                };
                if seen.insert(label.clone()) {
                    frontier.push(neighbor);
                }
            }

            if let Some(label) = self.label(current) {
                observer.on_visit(label);
                visited.push(label.clone());
            }
        }

        Some(visited)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_graph() -> (Graph<u32>, Vec<Vertex<u32>>) {
        let mut graph = Graph::new();
        let vertices: Vec<_> = (0..4).map(Vertex::new).collect();
        graph.add_vertices(&vertices);
        for pair in vertices.windows(2) {
            let _ = graph.add_edge(&pair[0], &pair[1]);
        }
        (graph, vertices)
    }

    #[test]
    fn search_order_names() {
        assert_eq!(SearchOrder::from_name("DFS"), Some(SearchOrder::DepthFirst));
        assert_eq!(SearchOrder::from_name("breadth"), Some(SearchOrder::BreadthFirst));
        assert_eq!(SearchOrder::from_name("dijkstra"), None);
        assert_eq!(SearchOrder::DepthFirst.name(), "dfs");
    }

    #[test]
    fn non_member_start_yields_none() {
        let (graph, _) = path_graph();
        let stranger = Vertex::new(99);
        assert_eq!(graph.depth_first_search(&stranger), None);
        assert_eq!(graph.breadth_first_search(&stranger), None);
    }

    #[test]
    fn observer_sees_every_visit() {
        let (graph, vertices) = path_graph();
        let mut seen = Vec::new();
        let mut record = |label: &u32| seen.push(*label);
        let result = graph.breadth_first_search_with(&vertices[1], &mut record);
        assert_eq!(result, Some(vec![1, 0, 2, 3]));
        assert_eq!(seen, vec![1, 0, 2, 3]);
    }

    #[test]
    fn log_observer_does_not_change_result() {
        let (graph, vertices) = path_graph();
        let logged = graph.depth_first_search_with(&vertices[0], &mut LogObserver);
        assert_eq!(logged, graph.depth_first_search(&vertices[0]));
    }
}
