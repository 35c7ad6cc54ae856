//! Word graph construction and storage
//!
//! Pure Rust implementation on petgraph. The graph is built once from a
//! document and never mutated afterwards.

pub mod builder;
pub mod export;
pub mod tokenizer;
pub mod word_graph;

pub use builder::GraphBuilder;
pub use export::GraphStats;
pub use tokenizer::{tokenize_line, tokenize_text};
pub use word_graph::WordGraph;
