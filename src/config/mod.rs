//! Configuration module for wordgraph
//!
//! This module handles:
//! - Project-level settings (wordgraph.toml)
//! - User-level settings (~/.config/wordgraph/config.toml)
//! - Environment overrides

mod settings;

pub use settings::{Config, ExportConfig, ExportFormat, WalkConfig, PROJECT_FILE, SEED_ENV};
