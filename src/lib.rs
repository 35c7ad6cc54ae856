//! wordgraph - word adjacency graphs from plain text
//!
//! Builds a directed graph where an edge `u -> v` counts how often word `v`
//! directly follows word `u` (line breaks included), then answers queries:
//! bridge words, bridge-word text rewriting, weighted shortest paths and
//! random walks.
//!
//! ```
//! use wordgraph::graph::GraphBuilder;
//! use wordgraph::query::bridge_words;
//!
//! let graph = GraphBuilder::from_text("to seek out new life\nand new civilizations");
//! assert_eq!(bridge_words(&graph, "out", "life").unwrap(), vec!["new"]);
//! ```

pub mod config;
pub mod error;
pub mod graph;
pub mod query;

pub use error::{GraphError, GraphResult, MissingNodes};
pub use graph::{GraphBuilder, WordGraph};
