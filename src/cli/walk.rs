//! Walk command - random walk with an optional stop prompt

use super::Session;
use anyhow::Result;
use console::style;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use wordgraph::query::{FileSink, RandomWalker, Unattended, WalkSink, WalkTermination};

/// Shows the walk so far and stops when the user types `q`
struct StdinPrompt;

impl wordgraph::query::WalkControl for StdinPrompt {
    fn proceed(&mut self, path: &[String]) -> bool {
        println!("{}", path.join(" "));
        print!("Type q to stop, Enter to continue: ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            // EOF: nobody left to ask
            Ok(0) => false,
            Ok(_) => !line.trim().eq_ignore_ascii_case("q"),
            Err(_) => false,
        }
    }
}

pub fn run(session: &mut Session, prompt: bool, output: Option<PathBuf>) -> Result<()> {
    let mut sink = FileSink::new(output.unwrap_or_else(|| session.config.walk.output.clone()));
    let mut walker = RandomWalker::new(&session.graph, &mut session.rng);

    let walk = if prompt {
        walker.walk(&mut StdinPrompt)
    } else {
        walker.walk(&mut Unattended)
    };

    let reason = match walk.termination {
        WalkTermination::SinkReached => "reached a word with no successors",
        WalkTermination::EdgeRepeated => "next edge was already walked",
        WalkTermination::Cancelled => "stopped by user",
        WalkTermination::EmptyGraph => "graph is empty",
    };
    let rendered = walk.render();
    println!("Random walk: \"{}\"", style(&rendered).cyan());

    // the walk is already on screen if the file cannot be written
    sink.persist(&rendered)?;
    println!(
        "{} steps, {}. Written to {}",
        walk.steps(),
        reason,
        style(sink.path().display()).cyan()
    );
    Ok(())
}
