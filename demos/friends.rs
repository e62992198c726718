//! Build the friends graph and run every query against it.

use undigraph::*;

fn main() -> GraphResult<()> {
    let names = ["ross", "rachel", "monica", "chandler", "joey", "phoebe"];
    let [ross, rachel, monica, chandler, joey, phoebe] = names.map(Vertex::new);
    let janice = Vertex::new("janice");

    let mut graph = Graph::new();
    graph.add_vertex(&ross);
    graph.add_vertex(&rachel);
    graph.add_vertices([&monica, &chandler, &joey, &phoebe, &janice]);

    let _ = graph.add_edge(&ross, &rachel);
    let _ = graph.add_edge(&ross, &phoebe);
    let _ = graph.add_edge(&rachel, &monica);
    let _ = graph.add_edge(&monica, &chandler);
    let _ = graph.add_edge(&phoebe, &joey);
    let _ = graph.add_edge(&joey, &chandler);

    println!(
        "Graph created with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let mut print_visit = |label: &&str| println!("  visit {}", label);
    let dfs = graph.depth_first_search_with(&ross, &mut print_visit);
    println!("DFS: {:?}", dfs);
    println!("BFS: {:?}", graph.breadth_first_search(&ross));

    println!(
        "ross ~ chandler: {}",
        graph.are_connected_dfs(&ross, &chandler)?
    );
    println!(
        "ross ~ janice: {}",
        graph.are_connected_bfs(&ross, &janice)?
    );

    match graph.shortest_path(&ross, &chandler)? {
        Some(hops) => println!("ross -> chandler: {} hops", hops),
        None => println!("ross -> chandler: no path"),
    }

    let emily = Vertex::new("emily");
    if let EdgeOutcome::MissingEndpoint(id) = graph.add_edge(&ross, &emily) {
        println!("emily ({}) is not in the graph", id);
    }
    if let Err(e) = graph.shortest_path(&ross, &emily) {
        println!("shortest_path(ross, emily): {}", e);
    }

    Ok(())
}
