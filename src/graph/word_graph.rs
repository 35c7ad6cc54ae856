//! Word adjacency graph backed by petgraph
//!
//! Nodes are words, edges carry the number of times the target word
//! immediately followed the source word. The graph is filled once by
//! [`GraphBuilder`](super::GraphBuilder) and is read-only afterwards.

use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;
use std::fmt;

/// Directed word graph with occurrence-count weights
#[derive(Debug, Clone, Default)]
pub struct WordGraph {
    /// Node arena; `NodeIndex` order is first-appearance order
    graph: DiGraph<String, u32>,
    /// Node lookup by word
    node_index: HashMap<String, NodeIndex>,
}

impl WordGraph {
    /// Return the node for `word`, creating it if this is its first appearance
    pub(crate) fn ensure_node(&mut self, word: &str) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(word) {
            return idx;
        }
        let idx = self.graph.add_node(word.to_string());
        self.node_index.insert(word.to_string(), idx);
        idx
    }

    /// Record one occurrence of `to` directly following `from`
    pub(crate) fn add_occurrence(&mut self, from: &str, to: &str) {
        let a = self.ensure_node(from);
        let b = self.ensure_node(to);
        match self.graph.find_edge(a, b) {
            Some(edge) => self.graph[edge] += 1,
            None => {
                self.graph.add_edge(a, b, 1);
            }
        }
    }

    /// Get node index by word
    pub fn node_index(&self, word: &str) -> Option<NodeIndex> {
        self.node_index.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.node_index.contains_key(word)
    }

    /// Word stored at a node
    pub fn word(&self, idx: NodeIndex) -> &str {
        &self.graph[idx]
    }

    /// All words in insertion order
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.graph.node_indices().map(|idx| self.graph[idx].as_str())
    }

    /// Outgoing `(neighbor, weight)` pairs in the order the edges were first seen
    pub fn successors(&self, idx: NodeIndex) -> Vec<(NodeIndex, u32)> {
        let mut edges: Vec<(EdgeIndex, NodeIndex, u32)> = self
            .graph
            .edges(idx)
            .map(|e| (e.id(), e.target(), *e.weight()))
            .collect();
        edges.sort_unstable_by_key(|(id, _, _)| *id);
        edges.into_iter().map(|(_, n, w)| (n, w)).collect()
    }

    /// Weight of the edge `from -> to`, if it exists
    pub fn weight(&self, from: &str, to: &str) -> Option<u32> {
        let a = self.node_index(from)?;
        let b = self.node_index(to)?;
        self.graph.find_edge(a, b).map(|e| self.graph[e])
    }

    pub fn has_edge(&self, from: NodeIndex, to: NodeIndex) -> bool {
        self.graph.find_edge(from, to).is_some()
    }

    pub fn is_sink(&self, idx: NodeIndex) -> bool {
        self.graph.edges(idx).next().is_none()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Read-only view for rendering collaborators
    pub fn as_digraph(&self) -> &DiGraph<String, u32> {
        &self.graph
    }
}

/// One line per node: `node -> {neighbor(weight), neighbor(weight)}`
impl fmt::Display for WordGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for idx in self.graph.node_indices() {
            let edges: Vec<String> = self
                .successors(idx)
                .into_iter()
                .map(|(n, w)| format!("{}({})", self.graph[n], w))
                .collect();
            writeln!(f, "{} -> {{{}}}", self.graph[idx], edges.join(", "))?;
        }
        Ok(())
    }
}
