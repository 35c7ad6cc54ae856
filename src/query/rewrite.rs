//! Bridge-word-guided text generation

use super::bridge::bridge_words;
use crate::graph::{tokenize_text, WordGraph};
use rand::Rng;

/// Insert a random bridge word between every adjacent pair of `text` that has one.
///
/// Input is lowercased and split on whitespace only; the last word is always
/// kept as-is. Pairs without bridge words (or with unknown words) stay adjacent.
pub fn rewrite<R: Rng>(graph: &WordGraph, text: &str, rng: &mut R) -> String {
    let words = tokenize_text(text);
    let mut out: Vec<String> = Vec::with_capacity(words.len() * 2);

    for pair in words.windows(2) {
        out.push(pair[0].clone());
        if let Ok(mut bridges) = bridge_words(graph, &pair[0], &pair[1]) {
            let pick = rng.random_range(0..bridges.len());
            out.push(bridges.swap_remove(pick));
        }
    }
    if let Some(last) = words.last() {
        out.push(last.clone());
    }

    out.join(" ")
}
