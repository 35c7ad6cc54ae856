//! Random walks that stop on the first repeated edge
//!
//! A walk starts at a uniformly chosen word and repeatedly moves to a
//! uniformly chosen distinct successor. Edge weights do not bias the choice.
//! It ends when it reaches a sink, when it is about to reuse a directed edge
//! (that edge is not recorded), or when the caller's [`WalkControl`] says stop.

use super::ARROW;
use crate::error::{GraphError, GraphResult};
use crate::graph::WordGraph;
use petgraph::graph::NodeIndex;
use rand::Rng;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Why a walk ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkTermination {
    /// Current word has no successors
    SinkReached,
    /// Next edge was already traversed in this walk
    EdgeRepeated,
    /// The control hook asked to stop
    Cancelled,
    /// Nothing to walk
    EmptyGraph,
}

/// A finished walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walk {
    pub path: Vec<String>,
    pub termination: WalkTermination,
}

impl Walk {
    /// The exact string handed to a [`WalkSink`]
    pub fn render(&self) -> String {
        self.path.join(ARROW)
    }

    /// Number of edges traversed
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Decides after every step whether the walk continues
pub trait WalkControl {
    fn proceed(&mut self, path: &[String]) -> bool;
}

/// Never interrupts a walk
#[derive(Debug, Default, Clone, Copy)]
pub struct Unattended;

impl WalkControl for Unattended {
    fn proceed(&mut self, _path: &[String]) -> bool {
        true
    }
}

impl<F> WalkControl for F
where
    F: FnMut(&[String]) -> bool,
{
    fn proceed(&mut self, path: &[String]) -> bool {
        self(path)
    }
}

/// Destination for a rendered walk
pub trait WalkSink {
    fn persist(&mut self, rendered: &str) -> GraphResult<()>;
}

/// Writes the rendered walk verbatim to a file, replacing previous content
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub const DEFAULT_FILE: &'static str = "random_walk_output.txt";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileSink {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FILE)
    }
}

impl WalkSink for FileSink {
    fn persist(&mut self, rendered: &str) -> GraphResult<()> {
        std::fs::write(&self.path, rendered).map_err(|source| GraphError::SinkUnwritable {
            path: self.path.clone(),
            source,
        })?;
        debug!("Wrote walk to {}", self.path.display());
        Ok(())
    }
}

/// One-shot walker over a borrowed graph
pub struct RandomWalker<'g, R> {
    graph: &'g WordGraph,
    rng: R,
}

impl<'g, R: Rng> RandomWalker<'g, R> {
    pub fn new(graph: &'g WordGraph, rng: R) -> Self {
        Self { graph, rng }
    }

    /// Run one walk. Visited-edge state lives only for this call.
    pub fn walk<C: WalkControl>(&mut self, control: &mut C) -> Walk {
        let node_count = self.graph.node_count();
        if node_count == 0 {
            return Walk {
                path: Vec::new(),
                termination: WalkTermination::EmptyGraph,
            };
        }

        let mut current = NodeIndex::new(self.rng.random_range(0..node_count));
        let mut path = vec![self.graph.word(current).to_string()];
        let mut visited: HashSet<(NodeIndex, NodeIndex)> = HashSet::new();

        let termination = loop {
            let successors = self.graph.successors(current);
            if successors.is_empty() {
                break WalkTermination::SinkReached;
            }
            let (next, _) = successors[self.rng.random_range(0..successors.len())];
            if !visited.insert((current, next)) {
                break WalkTermination::EdgeRepeated;
            }
            path.push(self.graph.word(next).to_string());
            current = next;
            if !control.proceed(&path) {
                break WalkTermination::Cancelled;
            }
        };

        debug!("Walk of {} word(s) ended: {:?}", path.len(), termination);
        Walk { path, termination }
    }

    /// Walk, then hand the rendered path to `sink`
    pub fn walk_into<C: WalkControl, S: WalkSink>(
        &mut self,
        control: &mut C,
        sink: &mut S,
    ) -> GraphResult<Walk> {
        let walk = self.walk(control);
        sink.persist(&walk.render())?;
        Ok(walk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[derive(Default)]
    struct MemorySink(Vec<String>);

    impl WalkSink for MemorySink {
        fn persist(&mut self, rendered: &str) -> GraphResult<()> {
            self.0.push(rendered.to_string());
            Ok(())
        }
    }

    fn assert_no_repeated_edge(walk: &Walk) {
        let mut seen = HashSet::new();
        for pair in walk.path.windows(2) {
            assert!(seen.insert((pair[0].clone(), pair[1].clone())), "repeated edge in {:?}", walk.path);
        }
    }

    #[test]
    fn test_empty_graph() {
        let g = GraphBuilder::from_text("");
        let walk = RandomWalker::new(&g, ChaCha8Rng::seed_from_u64(0)).walk(&mut Unattended);
        assert!(walk.path.is_empty());
        assert_eq!(walk.termination, WalkTermination::EmptyGraph);
    }

    #[test]
    fn test_chain_ends_at_sink() {
        let g = GraphBuilder::from_text("a b c d");
        for seed in 0..16 {
            let walk = RandomWalker::new(&g, ChaCha8Rng::seed_from_u64(seed)).walk(&mut Unattended);
            assert_eq!(walk.termination, WalkTermination::SinkReached);
            assert_eq!(walk.path.last().map(String::as_str), Some("d"));
        }
    }

    #[test]
    fn test_cycle_stops_on_repeated_edge() {
        // a -> b -> c -> a, single successor each
        let g = GraphBuilder::from_text("a b c a");
        let walk = RandomWalker::new(&g, ChaCha8Rng::seed_from_u64(3)).walk(&mut Unattended);
        assert_eq!(walk.termination, WalkTermination::EdgeRepeated);
        assert_eq!(walk.path.len(), 4);
        assert_eq!(walk.path.first(), walk.path.last());
        assert_no_repeated_edge(&walk);
    }

    #[test]
    fn test_never_repeats_edges_and_is_bounded() {
        let g = GraphBuilder::from_lines([
            "the quick brown fox jumps over the lazy dog",
            "the dog barks at the fox and the fox runs",
        ]);
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..200 {
            let walk = RandomWalker::new(&g, &mut rng).walk(&mut Unattended);
            assert_no_repeated_edge(&walk);
            assert!(walk.steps() <= g.edge_count());
            assert_ne!(walk.termination, WalkTermination::Cancelled);
        }
    }

    #[test]
    fn test_control_cancels_after_first_step() {
        let g = GraphBuilder::from_text("a b a b a b");
        let mut calls = 0;
        let mut stop_now = |_: &[String]| {
            calls += 1;
            false
        };
        let walk = RandomWalker::new(&g, ChaCha8Rng::seed_from_u64(5)).walk(&mut stop_now);
        assert_eq!(walk.termination, WalkTermination::Cancelled);
        assert_eq!(walk.path.len(), 2);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_same_seed_same_walk() {
        let g = GraphBuilder::from_text("one two three one three two one");
        let a = RandomWalker::new(&g, ChaCha8Rng::seed_from_u64(11)).walk(&mut Unattended);
        let b = RandomWalker::new(&g, ChaCha8Rng::seed_from_u64(11)).walk(&mut Unattended);
        assert_eq!(a, b);
    }

    #[test]
    fn test_sink_receives_rendered_walk() {
        let g = GraphBuilder::from_text("x y");
        let mut sink = MemorySink::default();
        let walk = RandomWalker::new(&g, ChaCha8Rng::seed_from_u64(0))
            .walk_into(&mut Unattended, &mut sink)
            .unwrap();
        assert_eq!(sink.0, vec![walk.render()]);
        assert!(sink.0[0] == "x→y" || sink.0[0] == "y");
    }

    #[test]
    fn test_file_sink_writes_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = FileSink::new(dir.path().join("walk.txt"));
        sink.persist("a→b→c").unwrap();
        assert_eq!(std::fs::read_to_string(sink.path()).unwrap(), "a→b→c");
    }

    #[test]
    fn test_file_sink_reports_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = FileSink::new(dir.path().join("missing").join("walk.txt"));
        assert!(matches!(
            sink.persist("a"),
            Err(GraphError::SinkUnwritable { .. })
        ));
    }
}
