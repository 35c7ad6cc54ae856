//! Bridge words: `w` such that `a -> w` and `w -> b` both exist

use super::resolve_pair;
use crate::error::{GraphError, GraphResult};
use crate::graph::WordGraph;
use tracing::debug;

/// Find every bridge word from `from` to `to`, in node insertion order.
///
/// # Errors
/// - `NodeNotFound` naming the absent endpoint(s)
/// - `NoBridge` when both words exist but nothing connects them in two hops
pub fn bridge_words(graph: &WordGraph, from: &str, to: &str) -> GraphResult<Vec<String>> {
    let (a, b) = resolve_pair(graph, from, to)?;

    let mut bridges: Vec<_> = graph
        .successors(a)
        .into_iter()
        .map(|(w, _)| w)
        .filter(|&w| graph.has_edge(w, b))
        .collect();
    // successors come in edge order; report in node order
    bridges.sort_unstable();

    debug!("{} bridge word(s) from {} to {}", bridges.len(), from, to);
    if bridges.is_empty() {
        return Err(GraphError::NoBridge {
            from: from.to_string(),
            to: to.to_string(),
        });
    }
    Ok(bridges.into_iter().map(|w| graph.word(w).to_string()).collect())
}

/// Human sentence for a successful lookup: `x`, `x and y`, `x, y and z`
pub fn describe_bridges(from: &str, to: &str, words: &[String]) -> String {
    let listed = match words {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    };
    format!("The bridge words from {} to {} are: {}.", from, to, listed)
}
