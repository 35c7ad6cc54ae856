//! Numbered menu loop over one loaded graph

use super::{graph, query, walk, Session};
use anyhow::Result;
use console::style;
use std::io::{self, BufRead, Write};
use std::path::Path;

const DOT_FILE: &str = "graph.dot";

const MENU: &str = "\
-----------------------------------
0. Exit
1. Show graph
2. Export graph (DOT)
3. Bridge words
4. Rewrite text with bridge words
5. Shortest path between two words
6. Shortest paths from one word
7. Random walk
-----------------------------------";

/// Print `label` and read one trimmed line; `None` at end of input
fn ask(label: &str) -> Option<String> {
    print!("{} ", label);
    let _ = io::stdout().flush();
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

/// Failed menu actions are printed and the menu comes back
fn report(result: Result<()>) {
    if let Err(e) = result {
        println!("{}", style(format!("{:#}", e)).yellow());
    }
}

pub fn run(session: &mut Session) -> Result<()> {
    println!(
        "Graph ready: {} words, {} edges",
        session.graph.node_count(),
        session.graph.edge_count()
    );

    loop {
        println!("\n{}", MENU);
        let Some(choice) = ask("Choose an option:") else {
            return Ok(());
        };

        match choice.as_str() {
            "0" => return Ok(()),
            "1" => report(graph::show(session)),
            "2" => report(graph::export(session, Some("dot"), Some(Path::new(DOT_FILE)))),
            "3" => {
                let (Some(a), Some(b)) = (ask("First word:"), ask("Second word:")) else {
                    return Ok(());
                };
                query::bridge(session, &a, &b);
            }
            "4" => {
                let Some(text) = ask("Text:") else {
                    return Ok(());
                };
                query::rewrite(session, &text);
            }
            "5" => {
                let (Some(a), Some(b)) = (ask("First word:"), ask("Second word:")) else {
                    return Ok(());
                };
                query::path(session, &a, Some(&b));
            }
            "6" => {
                let Some(word) = ask("Word:") else {
                    return Ok(());
                };
                query::path(session, &word, None);
            }
            "7" => {
                let prompt = session.config.walk.prompt;
                report(walk::run(session, prompt, None));
            }
            other => println!("{}", style(format!("Invalid choice '{}', enter 0-7", other)).red()),
        }
    }
}
