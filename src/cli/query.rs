//! Query commands - bridge words, rewriting and shortest paths
//!
//! Negative outcomes (unknown word, no bridge, no path) are printed as
//! messages; they never end the session.

use super::Session;
use console::style;
use wordgraph::query::{self, describe_bridges};

pub fn bridge(session: &Session, word1: &str, word2: &str) {
    let (a, b) = (word1.to_lowercase(), word2.to_lowercase());
    match query::bridge_words(&session.graph, &a, &b) {
        Ok(words) => println!("{}", describe_bridges(&a, &b, &words)),
        Err(e) => println!("{}", style(e).yellow()),
    }
}

pub fn rewrite(session: &mut Session, text: &str) {
    let rewritten = query::rewrite(&session.graph, text, &mut session.rng);
    println!("{}", rewritten);
}

pub fn path(session: &Session, from: &str, to: Option<&str>) {
    let from = from.to_lowercase();
    match to {
        Some(to) => {
            let to = to.to_lowercase();
            match query::shortest_path(&session.graph, &from, &to) {
                Ok(path) => {
                    println!("{}", style(&path).cyan());
                    println!("Shortest path length: {}", path.length);
                }
                Err(e) => println!("{}", style(e).yellow()),
            }
        }
        None => match query::shortest_paths_from(&session.graph, &from) {
            Ok(paths) if paths.is_empty() => {
                println!("{}", style(format!("No word is reachable from {}", from)).yellow())
            }
            Ok(paths) => {
                for path in paths {
                    println!(
                        "{} -> {}: {} (length {})",
                        from,
                        path.target(),
                        style(&path).cyan(),
                        path.length
                    );
                }
            }
            Err(e) => println!("{}", style(e).yellow()),
        },
    }
}
