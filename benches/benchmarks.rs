//! Criterion benchmarks for undigraph.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

use undigraph::graph::Graph;
use undigraph::types::Vertex;

/// Build a random graph with roughly `edges_per_vertex` edges per vertex.
fn make_large_graph(vertex_count: usize, edges_per_vertex: usize) -> (Graph<u32>, Vec<Vertex<u32>>) {
    let mut rng = rand::thread_rng();
    let vertices: Vec<Vertex<u32>> = (0..vertex_count as u32).map(Vertex::new).collect();
    let mut graph = Graph::new();
    graph.add_vertices(&vertices);

    for i in 0..vertex_count {
        for _ in 0..edges_per_vertex {
            let target = rng.gen_range(0..vertex_count);
            if target != i {
                let _ = graph.add_edge(&vertices[i], &vertices[target]);
            }
        }
    }

    (graph, vertices)
}

fn bench_mutation(c: &mut Criterion) {
    c.bench_function("add_edge_10k", |b| {
        let vertices: Vec<Vertex<u32>> = (0..10_000).map(Vertex::new).collect();
        b.iter(|| {
            let mut graph = Graph::new();
            graph.add_vertices(&vertices);
            for pair in vertices.windows(2) {
                let _ = graph.add_edge(&pair[0], &pair[1]);
            }
            black_box(graph.edge_count())
        });
    });

    c.bench_function("remove_vertex_hub", |b| {
        let (graph, vertices) = make_large_graph(10_000, 4);
        b.iter(|| {
            let mut graph = graph.clone();
            graph.remove_vertex(&vertices[0]).ok();
            black_box(graph.vertex_count())
        });
    });
}

fn bench_traversal(c: &mut Criterion) {
    let (graph, vertices) = make_large_graph(10_000, 4);

    c.bench_function("bfs_10k", |b| {
        b.iter(|| black_box(graph.breadth_first_search(&vertices[0])));
    });

    c.bench_function("dfs_10k", |b| {
        b.iter(|| black_box(graph.depth_first_search(&vertices[0])));
    });

    c.bench_function("are_connected_bfs_10k", |b| {
        b.iter(|| black_box(graph.are_connected_bfs(&vertices[0], &vertices[9_999])));
    });

    c.bench_function("shortest_path_10k", |b| {
        b.iter(|| black_box(graph.shortest_path(&vertices[0], &vertices[9_999])));
    });
}

criterion_group!(benches, bench_mutation, bench_traversal);
criterion_main!(benches);
