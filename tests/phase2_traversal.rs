//! Phase 2 tests: depth-first and breadth-first traversal.

use undigraph::graph::{LogObserver, SearchOrder};
use undigraph::types::Vertex;
use undigraph::Graph;

struct Friends {
    graph: Graph<&'static str>,
    ross: Vertex<&'static str>,
    rachel: Vertex<&'static str>,
    monica: Vertex<&'static str>,
    chandler: Vertex<&'static str>,
    joey: Vertex<&'static str>,
    phoebe: Vertex<&'static str>,
}

/// ross–rachel, ross–phoebe, rachel–monica, monica–chandler, phoebe–joey,
/// joey–chandler.
fn friends() -> Friends {
    let ross = Vertex::new("ross");
    let rachel = Vertex::new("rachel");
    let monica = Vertex::new("monica");
    let chandler = Vertex::new("chandler");
    let joey = Vertex::new("joey");
    let phoebe = Vertex::new("phoebe");

    let mut graph = Graph::new();
    graph.add_vertex(&ross);
    graph.add_vertex(&rachel);
    graph.add_vertices([&monica, &chandler]);
    graph.add_vertices([&joey, &phoebe]);
    for (a, b) in [
        (&ross, &rachel),
        (&ross, &phoebe),
        (&rachel, &monica),
        (&monica, &chandler),
        (&phoebe, &joey),
        (&joey, &chandler),
    ] {
        assert!(graph.add_edge(a, b).is_applied());
    }

    Friends {
        graph,
        ross,
        rachel,
        monica,
        chandler,
        joey,
        phoebe,
    }
}

// ==================== Depth-First ====================

#[test]
fn test_depth_first_search_order() {
    let f = friends();
    assert_eq!(
        f.graph.depth_first_search(&f.ross).unwrap(),
        vec!["ross", "phoebe", "joey", "chandler", "monica", "rachel"]
    );
}

#[test]
fn test_depth_first_search_from_middle() {
    let f = friends();
    let order = f.graph.depth_first_search(&f.monica).unwrap();
    assert_eq!(order[0], "monica");
    assert_eq!(order.len(), 6);
}

#[test]
fn test_depth_first_search_ignores_unreachable() {
    let mut f = friends();
    let janice = Vertex::new("janice");
    f.graph.add_vertex(&janice);

    let order = f.graph.depth_first_search(&f.chandler).unwrap();
    assert!(!order.contains(&"janice"));
    assert_eq!(f.graph.depth_first_search(&janice).unwrap(), vec!["janice"]);
}

// ==================== Breadth-First ====================

#[test]
fn test_breadth_first_search_order() {
    let f = friends();
    assert_eq!(
        f.graph.breadth_first_search(&f.ross).unwrap(),
        vec!["ross", "rachel", "phoebe", "monica", "joey", "chandler"]
    );
}

#[test]
fn test_breadth_first_search_levels() {
    let f = friends();
    let order = f.graph.breadth_first_search(&f.joey).unwrap();
    // phoebe and chandler are one hop from joey, ross and monica two.
    assert_eq!(&order[..3], &["joey", "phoebe", "chandler"]);
    assert_eq!(order[5], "rachel");
}

#[test]
fn test_traversal_of_non_member_is_skipped() {
    let f = friends();
    let emily = Vertex::new("emily");
    assert!(f.graph.depth_first_search(&emily).is_none());
    assert!(f.graph.breadth_first_search(&emily).is_none());
}

#[test]
fn test_each_label_visited_once() {
    let f = friends();
    for start in [&f.ross, &f.rachel, &f.monica, &f.chandler, &f.joey, &f.phoebe] {
        for order in [SearchOrder::DepthFirst, SearchOrder::BreadthFirst] {
            let mut visited = f
                .graph
                .traverse(start, order, &mut LogObserver)
                .unwrap();
            visited.sort_unstable();
            visited.dedup();
            assert_eq!(visited.len(), 6);
        }
    }
}

#[test]
fn test_observer_matches_result() {
    let f = friends();
    let mut echoed = Vec::new();
    let result = f
        .graph
        .depth_first_search_with(&f.ross, &mut |label: &&'static str| echoed.push(*label))
        .unwrap();
    assert_eq!(result, echoed);
}

// ==================== Label Conflation ====================

#[test]
fn test_traversal_conflates_equal_labels() {
    let mut graph = Graph::new();
    let hub = Vertex::new("hub");
    let first = Vertex::new("twin");
    let second = Vertex::new("twin");
    graph.add_vertices([&hub, &first, &second]);
    let _ = graph.add_edge(&hub, &first);
    let _ = graph.add_edge(&hub, &second);

    // Two distinct members reachable, but only one "twin" is reported.
    assert_eq!(graph.breadth_first_search(&hub).unwrap(), vec!["hub", "twin"]);
    assert_eq!(graph.depth_first_search(&hub).unwrap(), vec!["hub", "twin"]);
    // Identity-based connectivity still reaches both.
    assert!(graph.are_connected_bfs(&hub, &second).unwrap());
    assert!(graph.are_connected_dfs(&hub, &first).unwrap());
}
