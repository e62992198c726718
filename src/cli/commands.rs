//! CLI command implementations.
//!
//! Every command loads a graph description file, runs one query and writes
//! either plain text or JSON to `out`.

use std::io::Write;
use std::path::Path;

use crate::format::GraphDescription;
use crate::graph::{LabeledGraph, NoopObserver, SearchOrder};
use crate::types::GraphResult;

fn load(path: &Path) -> GraphResult<LabeledGraph<String>> {
    GraphDescription::read_from_file(path)?.build()
}

/// Display counts and the vertex list of a description file.
pub fn cmd_info(path: &Path, json: bool, out: &mut impl Write) -> GraphResult<()> {
    let built = load(path)?;
    let graph = built.graph();

    if json {
        let vertices: Vec<_> = built
            .vertices()
            .map(|v| serde_json::json!({"label": v.label(), "degree": graph.degree(v)}))
            .collect();
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "degrees": vertices,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&info)?)?;
    } else {
        writeln!(out, "File: {}", path.display())?;
        writeln!(out, "Vertices: {}", graph.vertex_count())?;
        writeln!(out, "Edges: {}", graph.edge_count())?;
        for vertex in built.vertices() {
            writeln!(
                out,
                "  {} (degree {})",
                vertex.label(),
                graph.degree(vertex).unwrap_or(0)
            )?;
        }
    }
    Ok(())
}

/// Run a depth- or breadth-first traversal from `start`.
///
/// With `verbose`, every visit is echoed to stderr as it happens.
pub fn cmd_traverse(
    path: &Path,
    start: &str,
    order: SearchOrder,
    verbose: bool,
    json: bool,
    out: &mut impl Write,
) -> GraphResult<()> {
    let built = load(path)?;
    let vertex = built.require(&start.to_string())?;

    let visited = if verbose {
        let mut echo = |label: &String| eprintln!("visit {}", label);
        built.graph().traverse(vertex, order, &mut echo)
    } else {
        built.graph().traverse(vertex, order, &mut NoopObserver)
    };
    let visited = visited.unwrap_or_default();

    if json {
        let result = serde_json::json!({
            "start": start,
            "order": order.name(),
            "visited": visited,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
    } else {
        writeln!(out, "{} from {}: {}", order.name(), start, visited.join(" -> "))?;
    }
    Ok(())
}

/// Check whether two vertices are connected.
pub fn cmd_connected(
    path: &Path,
    a: &str,
    b: &str,
    order: SearchOrder,
    json: bool,
    out: &mut impl Write,
) -> GraphResult<()> {
    let built = load(path)?;
    let va = built.require(&a.to_string())?;
    let vb = built.require(&b.to_string())?;
    let connected = built.graph().are_connected(va, vb, order)?;

    if json {
        let result = serde_json::json!({
            "a": a,
            "b": b,
            "strategy": order.name(),
            "connected": connected,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
    } else if connected {
        writeln!(out, "{} and {} are connected", a, b)?;
    } else {
        writeln!(out, "{} and {} are not connected", a, b)?;
    }
    Ok(())
}

/// Print the hop count of a shortest path.
pub fn cmd_path(path: &Path, a: &str, b: &str, json: bool, out: &mut impl Write) -> GraphResult<()> {
    let built = load(path)?;
    let va = built.require(&a.to_string())?;
    let vb = built.require(&b.to_string())?;
    let hops = built.graph().shortest_path(va, vb)?;

    if json {
        let result = serde_json::json!({"a": a, "b": b, "hops": hops});
        writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
    } else {
        match hops {
            Some(hops) => writeln!(out, "{} -> {}: {} hop(s)", a, b, hops)?,
            None => writeln!(out, "{} -> {}: no path", a, b)?,
        }
    }
    Ok(())
}

/// List the neighbours of a vertex in edge insertion order.
pub fn cmd_neighbors(path: &Path, label: &str, json: bool, out: &mut impl Write) -> GraphResult<()> {
    let built = load(path)?;
    let graph = built.graph();
    let vertex = built.require(&label.to_string())?;
    let neighbors: Vec<&String> = graph
        .neighbors(vertex)
        .filter_map(|id| graph.label(id))
        .collect();

    if json {
        let result = serde_json::json!({"vertex": label, "neighbors": neighbors});
        writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
    } else {
        writeln!(out, "{}:", label)?;
        for neighbor in neighbors {
            writeln!(out, "  {}", neighbor)?;
        }
    }
    Ok(())
}

/// Re-emit the description in normalised form (duplicates collapsed, each
/// edge once).
pub fn cmd_export(path: &Path, pretty: bool, out: &mut impl Write) -> GraphResult<()> {
    let built = load(path)?;
    let desc = GraphDescription::from_graph(built.graph());
    writeln!(out, "{}", desc.to_json(pretty)?)?;
    Ok(())
}
