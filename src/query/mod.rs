//! Queries over a built [`WordGraph`]
//!
//! Everything here borrows the graph immutably. Randomized queries take the
//! generator as a parameter so callers control seeding.

pub mod bridge;
pub mod random_walk;
pub mod rewrite;
pub mod shortest_path;

pub use bridge::{bridge_words, describe_bridges};
pub use random_walk::{FileSink, RandomWalker, Unattended, Walk, WalkControl, WalkSink, WalkTermination};
pub use rewrite::rewrite;
pub use shortest_path::{shortest_path, shortest_paths_from, ShortestPath};

use crate::error::{GraphError, GraphResult, MissingNodes};
use crate::graph::WordGraph;
use petgraph::graph::NodeIndex;

/// Separator used when rendering paths and walks
pub const ARROW: &str = "→";

/// Look up both endpoints of a two-word query
pub(crate) fn resolve_pair(
    graph: &WordGraph,
    from: &str,
    to: &str,
) -> GraphResult<(NodeIndex, NodeIndex)> {
    let missing = match (graph.node_index(from), graph.node_index(to)) {
        (Some(a), Some(b)) => return Ok((a, b)),
        (None, Some(_)) => MissingNodes::Source(from.to_string()),
        (Some(_), None) => MissingNodes::Target(to.to_string()),
        (None, None) => MissingNodes::Both(from.to_string(), to.to_string()),
    };
    Err(GraphError::NodeNotFound(missing))
}

/// Look up the start word of a single-source query
pub(crate) fn resolve_one(graph: &WordGraph, word: &str) -> GraphResult<NodeIndex> {
    graph
        .node_index(word)
        .ok_or_else(|| GraphError::NodeNotFound(MissingNodes::Source(word.to_string())))
}
