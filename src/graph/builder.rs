//! Single-pass graph construction from document lines

use super::tokenizer::tokenize_line;
use super::WordGraph;
use crate::error::{GraphError, GraphResult};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Builds a [`WordGraph`] one line at a time.
///
/// The last word of each line is carried over and linked to the first word
/// of the next line that has any words.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: WordGraph,
    carry: Option<String>,
    lines: usize,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one raw line
    pub fn push_line(&mut self, line: &str) {
        self.lines += 1;
        let words = tokenize_line(line);
        let (Some(first), Some(last)) = (words.first(), words.last()) else {
            return;
        };

        if let Some(prev) = self.carry.take() {
            self.graph.add_occurrence(&prev, first);
        }
        for pair in words.windows(2) {
            self.graph.add_occurrence(&pair[0], &pair[1]);
        }
        self.carry = Some(last.clone());
    }

    /// Close the document and return the frozen graph
    pub fn finish(mut self) -> WordGraph {
        if let Some(last) = self.carry.take() {
            self.graph.ensure_node(&last);
        }
        info!(
            "Built word graph: {} lines, {} nodes, {} edges",
            self.lines,
            self.graph.node_count(),
            self.graph.edge_count()
        );
        self.graph
    }

    pub fn from_lines<I, S>(lines: I) -> WordGraph
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = Self::new();
        for line in lines {
            builder.push_line(line.as_ref());
        }
        builder.finish()
    }

    pub fn from_text(text: &str) -> WordGraph {
        Self::from_lines(text.lines())
    }

    /// Read a UTF-8 stream line by line.
    ///
    /// `path` is only used to label the error.
    pub fn from_reader<R: BufRead>(reader: R, path: &Path) -> GraphResult<WordGraph> {
        let mut builder = Self::new();
        for line in reader.lines() {
            let line = line.map_err(|source| GraphError::SourceUnreadable {
                path: path.to_path_buf(),
                source,
            })?;
            builder.push_line(&line);
        }
        Ok(builder.finish())
    }

    pub fn from_path(path: &Path) -> GraphResult<WordGraph> {
        debug!("Reading document from {}", path.display());
        let file = File::open(path).map_err(|source| GraphError::SourceUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file), path)
    }
}
