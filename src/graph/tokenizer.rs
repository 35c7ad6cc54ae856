//! Text normalization into words

use regex::Regex;
use std::sync::OnceLock;

static NON_LETTER: OnceLock<Regex> = OnceLock::new();

fn non_letter() -> &'static Regex {
    NON_LETTER.get_or_init(|| Regex::new(r"[^a-z\s]").expect("valid regex"))
}

/// Split one line of a document into graph words.
///
/// Lowercases, turns every character outside `[a-z]` and whitespace into a
/// space, then splits on whitespace runs. Never fails; junk yields no words.
pub fn tokenize_line(line: &str) -> Vec<String> {
    let lowered = line.to_lowercase();
    non_letter()
        .replace_all(&lowered, " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Split free text for rewriting: lowercase and whitespace only.
///
/// Punctuation is kept, so `"cat,"` stays a distinct word that will not
/// match the `cat` node.
pub fn tokenize_text(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
