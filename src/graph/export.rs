//! Graph export for external renderers and scripting

use super::WordGraph;
use petgraph::dot::Dot;
use serde::Serialize;

/// Summary counts for a built graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
    /// Sum of all edge weights (number of adjacent word pairs in the document)
    pub total_weight: u64,
    pub sinks: usize,
}

#[derive(Debug, Serialize)]
struct ExportEdge<'a> {
    source: &'a str,
    target: &'a str,
    weight: u32,
}

#[derive(Debug, Serialize)]
struct ExportGraph<'a> {
    nodes: Vec<&'a str>,
    edges: Vec<ExportEdge<'a>>,
}

impl WordGraph {
    pub fn stats(&self) -> GraphStats {
        let g = self.as_digraph();
        GraphStats {
            nodes: g.node_count(),
            edges: g.edge_count(),
            total_weight: g.edge_weights().map(|&w| u64::from(w)).sum(),
            sinks: g.node_indices().filter(|&n| self.is_sink(n)).count(),
        }
    }

    /// Graphviz DOT with weights as edge labels
    pub fn to_dot(&self) -> String {
        format!("{}", Dot::with_config(self.as_digraph(), &[]))
    }

    /// `{"nodes": [...], "edges": [{"source", "target", "weight"}]}`
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut edges = Vec::with_capacity(self.edge_count());
        for idx in self.as_digraph().node_indices() {
            for (target, weight) in self.successors(idx) {
                edges.push(ExportEdge {
                    source: self.word(idx),
                    target: self.word(target),
                    weight,
                });
            }
        }
        let export = ExportGraph {
            nodes: self.words().collect(),
            edges,
        };
        serde_json::to_string_pretty(&export)
    }
}
