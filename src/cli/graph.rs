//! Graph commands - print, export and summarize the word graph

use super::Session;
use anyhow::{Context, Result};
use console::style;
use std::path::Path;
use wordgraph::config::ExportFormat;

/// Print the adjacency listing
pub fn show(session: &Session) -> Result<()> {
    print!("{}", session.graph);
    Ok(())
}

/// Write DOT or JSON to a file or stdout
pub fn export(session: &Session, format: Option<&str>, output: Option<&Path>) -> Result<()> {
    let format = match format {
        Some("json") => ExportFormat::Json,
        Some(_) => ExportFormat::Dot,
        None => session.config.export.format,
    };
    let rendered = match format {
        ExportFormat::Dot => session.graph.to_dot(),
        ExportFormat::Json => session
            .graph
            .to_json()
            .context("Failed to serialize graph")?,
    };

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Graph written to {}", style(path.display()).cyan());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}

/// Show graph statistics
pub fn stats(session: &Session, json: bool) -> Result<()> {
    let stats = session.graph.stats();
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("\n{} Graph Statistics\n", style("📊").bold());
    println!("  {}: {}", style("Words").cyan(), style(stats.nodes).bold());
    println!("  {}: {}", style("Edges").cyan(), style(stats.edges).bold());
    println!(
        "  {}: {}",
        style("Word pairs").cyan(),
        style(stats.total_weight).bold()
    );
    println!("  {}: {}", style("Sinks").cyan(), style(stats.sinks).bold());
    Ok(())
}
