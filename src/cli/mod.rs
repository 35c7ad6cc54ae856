//! CLI command definitions and handlers

mod graph;
mod interactive;
mod query;
mod walk;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::{Path, PathBuf};
use tracing::debug;
use wordgraph::config::Config;
use wordgraph::graph::{GraphBuilder, WordGraph};

/// wordgraph - word adjacency graphs from plain text
#[derive(Parser, Debug)]
#[command(name = "wordgraph")]
#[command(
    version,
    about = "Build a word adjacency graph from a text file and query it",
    long_about = "wordgraph reads a text file, links every word to the word that follows it \
(across line breaks too) and weighs each link by how often it occurs.\n\n\
Run without a subcommand for the interactive menu:\n  \
wordgraph story.txt",
    after_help = "\
Examples:
  wordgraph story.txt show                   Print every node with its weighted successors
  wordgraph story.txt bridge new life        Words that sit between 'new' and 'life'
  wordgraph story.txt rewrite seek new life  Insert bridge words into a sentence
  wordgraph story.txt path to life           Cheapest route between two words
  wordgraph story.txt path to                Cheapest routes to every reachable word
  wordgraph story.txt walk --no-prompt       Random walk written to random_walk_output.txt
  wordgraph story.txt export | dot -Tpng -o graph.png"
)]
pub struct Cli {
    /// Text file to build the graph from
    pub input: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Seed for rewrite and walk (overrides config and WORDGRAPH_SEED)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Config file (default: ./wordgraph.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every node as `word -> {next(weight), ...}`
    Show,

    /// Export the graph for external rendering
    Export {
        /// Output format: dot, json (default from config)
        #[arg(long, short = 'f', value_parser = ["dot", "json"])]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Show node, edge and sink counts
    Stats {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Query bridge words between two words
    Bridge { word1: String, word2: String },

    /// Insert bridge words into new text
    Rewrite {
        /// Text to rewrite (several arguments are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Shortest path between two words, or from one word to all others
    Path {
        from: String,
        to: Option<String>,
    },

    /// Random walk until a sink, a repeated edge, or `q`
    Walk {
        /// Do not ask before each step
        #[arg(long)]
        no_prompt: bool,

        /// Where to write the walk (default from config)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
}

/// Everything a command needs: the frozen graph, settings and the rng
pub(crate) struct Session {
    pub graph: WordGraph,
    pub config: Config,
    pub rng: ChaCha8Rng,
}

impl Session {
    fn open(input: &Path, config: Config, seed: Option<u64>) -> Result<Self> {
        let graph = GraphBuilder::from_path(input)
            .with_context(|| format!("Failed to build graph from {}", input.display()))?;
        let seed = seed.or(config.seed).unwrap_or_else(rand::random);
        debug!("Using rng seed {}", seed);
        Ok(Self {
            graph,
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("Cannot determine working directory")?;
    let config = Config::resolve(cli.config.as_deref(), &cwd)?;
    let mut session = Session::open(&cli.input, config, cli.seed)?;

    match cli.command {
        Some(Commands::Show) => graph::show(&session),
        Some(Commands::Export { format, output }) => {
            graph::export(&session, format.as_deref(), output.as_deref())
        }
        Some(Commands::Stats { json }) => graph::stats(&session, json),
        Some(Commands::Bridge { word1, word2 }) => {
            query::bridge(&session, &word1, &word2);
            Ok(())
        }
        Some(Commands::Rewrite { text }) => {
            query::rewrite(&mut session, &text.join(" "));
            Ok(())
        }
        Some(Commands::Path { from, to }) => {
            query::path(&session, &from, to.as_deref());
            Ok(())
        }
        Some(Commands::Walk { no_prompt, output }) => {
            let prompt = session.config.walk.prompt && !no_prompt;
            walk::run(&mut session, prompt, output)
        }
        None => interactive::run(&mut session),
    }
}
