//! Weighted shortest paths (Dijkstra)
//!
//! Edge weights are occurrence counts, so every weight is at least 1 and no
//! negative-cycle handling is needed.
//!
//! The frontier is a `BTreeSet` ordered by `(distance, word)`. Equal
//! distances are therefore popped in lexicographic word order, which makes
//! the chosen path reproducible when several routes cost the same. There is
//! no decrease-key: an improved node is removed and reinserted.

use super::{resolve_one, resolve_pair, ARROW};
use crate::error::{GraphError, GraphResult};
use crate::graph::WordGraph;
use petgraph::graph::NodeIndex;
use std::collections::BTreeSet;
use std::fmt;
use tracing::debug;

/// A path from the query source, with its total weight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath {
    pub nodes: Vec<String>,
    pub length: u64,
}

impl ShortestPath {
    pub fn source(&self) -> &str {
        self.nodes.first().map(String::as_str).unwrap_or_default()
    }

    pub fn target(&self) -> &str {
        self.nodes.last().map(String::as_str).unwrap_or_default()
    }
}

impl fmt::Display for ShortestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.nodes.join(ARROW))
    }
}

/// Dijkstra state over dense node indices
struct Dijkstra<'g> {
    graph: &'g WordGraph,
    dist: Vec<Option<u64>>,
    prev: Vec<Option<NodeIndex>>,
    frontier: BTreeSet<(u64, &'g str, NodeIndex)>,
}

impl<'g> Dijkstra<'g> {
    fn new(graph: &'g WordGraph, source: NodeIndex) -> Self {
        let n = graph.node_count();
        let mut state = Self {
            graph,
            dist: vec![None; n],
            prev: vec![None; n],
            frontier: BTreeSet::new(),
        };
        state.dist[source.index()] = Some(0);
        state.frontier.insert((0, graph.word(source), source));
        state
    }

    /// Finalize the closest frontier node and relax its outgoing edges
    fn step(&mut self) -> Option<NodeIndex> {
        let graph = self.graph;
        let (d, _, u) = self.frontier.pop_first()?;
        for (v, w) in graph.successors(u) {
            let candidate = d + u64::from(w);
            let improves = match self.dist[v.index()] {
                Some(old) if candidate >= old => false,
                Some(old) => {
                    self.frontier.remove(&(old, graph.word(v), v));
                    true
                }
                None => true,
            };
            if improves {
                self.dist[v.index()] = Some(candidate);
                self.prev[v.index()] = Some(u);
                self.frontier.insert((candidate, graph.word(v), v));
            }
        }
        Some(u)
    }

    /// Walk predecessor links back to the source
    fn path_to(&self, target: NodeIndex) -> Option<ShortestPath> {
        let length = self.dist[target.index()]?;
        let mut nodes = vec![self.graph.word(target).to_string()];
        let mut current = target;
        while let Some(p) = self.prev[current.index()] {
            nodes.push(self.graph.word(p).to_string());
            current = p;
        }
        nodes.reverse();
        Some(ShortestPath { nodes, length })
    }
}

/// Shortest path from `from` to `to`.
///
/// Stops as soon as `to` is finalized.
///
/// # Errors
/// - `NodeNotFound` naming the absent endpoint(s)
/// - `NoPath` when `to` is not reachable from `from`
pub fn shortest_path(graph: &WordGraph, from: &str, to: &str) -> GraphResult<ShortestPath> {
    let (source, target) = resolve_pair(graph, from, to)?;
    let mut dijkstra = Dijkstra::new(graph, source);

    while let Some(u) = dijkstra.step() {
        if u != target {
            continue;
        }
        if let Some(path) = dijkstra.path_to(target) {
            debug!("Shortest path {} -> {}: {} (length {})", from, to, path, path.length);
            return Ok(path);
        }
    }

    Err(GraphError::NoPath {
        from: from.to_string(),
        to: to.to_string(),
    })
}

/// Shortest paths from `from` to every other reachable word, in node order.
///
/// Unreachable words are left out.
pub fn shortest_paths_from(graph: &WordGraph, from: &str) -> GraphResult<Vec<ShortestPath>> {
    let source = resolve_one(graph, from)?;
    let mut dijkstra = Dijkstra::new(graph, source);
    while dijkstra.step().is_some() {}

    let paths: Vec<ShortestPath> = graph
        .as_digraph()
        .node_indices()
        .filter(|&n| n != source)
        .filter_map(|n| dijkstra.path_to(n))
        .collect();
    debug!("{} reachable word(s) from {}", paths.len(), from);
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MissingNodes;
    use crate::graph::GraphBuilder;

    #[test]
    fn test_path_to_self() {
        let g = GraphBuilder::from_text("a b c");
        let p = shortest_path(&g, "b", "b").unwrap();
        assert_eq!(p.nodes, vec!["b"]);
        assert_eq!(p.length, 0);
        assert_eq!(p.to_string(), "b");
    }

    #[test]
    fn test_prefers_lighter_route() {
        // a->b weighs 3, the detour a->c->b weighs 2
        let g = GraphBuilder::from_lines(["a b", "a b", "a b", "a c b"]);
        let p = shortest_path(&g, "a", "b").unwrap();
        assert_eq!(p.to_string(), "a→c→b");
        assert_eq!(p.length, 2);
    }

    #[test]
    fn test_tie_goes_through_smaller_word() {
        let g = GraphBuilder::from_lines(["start zulu end", "start alpha end"]);
        for _ in 0..5 {
            let p = shortest_path(&g, "start", "end").unwrap();
            assert_eq!(p.nodes, vec!["start", "alpha", "end"]);
            assert_eq!(p.length, 2);
        }
    }

    #[test]
    fn test_unreachable_is_no_path() {
        let g = GraphBuilder::from_text("a b c");
        let err = shortest_path(&g, "c", "a").unwrap_err();
        assert!(matches!(err, GraphError::NoPath { .. }));
    }

    #[test]
    fn test_missing_endpoint_is_not_no_path() {
        let g = GraphBuilder::from_text("a b c");
        match shortest_path(&g, "a", "zzz").unwrap_err() {
            GraphError::NodeNotFound(MissingNodes::Target(w)) => assert_eq!(w, "zzz"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_all_targets() {
        let g = GraphBuilder::from_lines(["a b c", "x"]);
        // "x" is reachable through the carry c -> x
        let paths = shortest_paths_from(&g, "b").unwrap();
        let rendered: Vec<String> = paths.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["b→c", "b→c→x"]);
        assert!(paths.iter().all(|p| p.source() == "b"));
    }

    #[test]
    fn test_all_targets_omits_unreachable() {
        let g = GraphBuilder::from_text("a b c");
        assert!(shortest_paths_from(&g, "c").unwrap().is_empty());
        assert!(matches!(
            shortest_paths_from(&g, "q"),
            Err(GraphError::NodeNotFound(MissingNodes::Source(_)))
        ));
    }
}
