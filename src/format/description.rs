//! JSON graph descriptions.
//!
//! ```json
//! { "vertices": ["ross", "rachel"], "edges": [["ross", "rachel"]] }
//! ```

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::graph::{Graph, GraphBuilder, LabeledGraph};
use crate::types::GraphResult;

/// A labelled graph as found in a description file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDescription {
    /// Vertex labels in declaration order.
    #[serde(default)]
    pub vertices: Vec<String>,
    /// Edges as label pairs. Both endpoints must be declared.
    #[serde(default)]
    pub edges: Vec<(String, String)>,
}

impl GraphDescription {
    /// Parse a description from a JSON string.
    pub fn from_json_str(json: &str) -> GraphResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a description from any reader.
    pub fn from_reader(reader: impl Read) -> GraphResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Read a description file.
    pub fn read_from_file(path: &Path) -> GraphResult<Self> {
        let data = std::fs::read_to_string(path)?;
        log::debug!("read graph description from {}", path.display());
        Self::from_json_str(&data)
    }

    /// Describe a string-labelled graph, edges listed once each.
    pub fn from_graph(graph: &Graph<String>) -> Self {
        let vertices = graph.labels().cloned().collect();
        let mut edges = Vec::with_capacity(graph.edge_count());
        for id in graph.vertex_ids() {
            for neighbor in graph.adjacent(id).filter(|n| id <= *n) {
                if let (Some(a), Some(b)) = (graph.label(id), graph.label(neighbor)) {
                    edges.push((a.clone(), b.clone()));
                }
            }
        }
        Self { vertices, edges }
    }

    /// Serialize to JSON.
    pub fn to_json(&self, pretty: bool) -> GraphResult<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// A builder pre-loaded with this description.
    pub fn into_builder(self) -> GraphBuilder<String> {
        GraphBuilder::new().vertices(self.vertices).edges(self.edges)
    }

    /// Build the described graph.
    pub fn build(self) -> GraphResult<LabeledGraph<String>> {
        self.into_builder().build()
    }
}
