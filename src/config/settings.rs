//! wordgraph settings
//!
//! Loaded from, in increasing priority:
//! - `~/.config/wordgraph/config.toml`
//! - `wordgraph.toml` in the working directory
//! - the `WORDGRAPH_SEED` environment variable
//!
//! ```toml
//! seed = 42
//!
//! [walk]
//! output = "random_walk_output.txt"
//! prompt = true
//!
//! [export]
//! format = "dot"
//! ```

use crate::query::FileSink;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const PROJECT_FILE: &str = "wordgraph.toml";
pub const SEED_ENV: &str = "WORDGRAPH_SEED";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Dot,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct WalkConfig {
    /// File the rendered walk is written to
    pub output: PathBuf,
    /// Ask before every step whether to stop
    pub prompt: bool,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(FileSink::DEFAULT_FILE),
            prompt: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ExportConfig {
    pub format: ExportFormat,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Fixed seed for rewrite and walk; random when unset
    pub seed: Option<u64>,
    pub walk: WalkConfig,
    pub export: ExportConfig,
}

impl Config {
    /// Resolve settings for a run: an explicit file must load, otherwise
    /// fall back to the search order in the module docs
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_path(path),
            None => Ok(Self::load(dir)),
        }
    }

    /// Load config from all sources (see module docs)
    pub fn load(dir: &Path) -> Self {
        let mut config = Self::user_config_path()
            .filter(|p| p.exists())
            .and_then(|p| Self::from_file(&p))
            .unwrap_or_default();

        let project = dir.join(PROJECT_FILE);
        if project.exists() {
            if let Some(local) = Self::from_file(&project) {
                config = local;
            }
        }

        config.apply_env();
        config
    }

    /// Load one named file; read and parse failures are errors
    pub fn from_path(path: &Path) -> Result<Self> {
        let mut config = load_toml_config(path)?;
        debug!("Loaded config from {}", path.display());
        config.apply_env();
        Ok(config)
    }

    /// Read one TOML file; unreadable or invalid files are logged and skipped
    pub fn from_file(path: &Path) -> Option<Self> {
        match load_toml_config(path) {
            Ok(config) => {
                debug!("Loaded config from {}", path.display());
                Some(config)
            }
            Err(e) => {
                warn!("Failed to load {}: {:#}", path.display(), e);
                None
            }
        }
    }

    /// Get the user config file path
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("wordgraph").join("config.toml"))
    }

    /// `WORDGRAPH_SEED` replaces `seed`; values that are not a u64 are ignored
    pub(crate) fn apply_env(&mut self) {
        let Ok(raw) = std::env::var(SEED_ENV) else {
            return;
        };
        match raw.trim().parse() {
            Ok(seed) => self.seed = Some(seed),
            Err(_) => warn!("Ignoring {}={:?}: not a u64", SEED_ENV, raw),
        }
    }
}

fn load_toml_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("Invalid config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.walk.output, PathBuf::from("random_walk_output.txt"));
        assert!(config.walk.prompt);
        assert_eq!(config.export.format, ExportFormat::Dot);
    }

    #[test]
    fn test_toml_parsing() {
        let toml_str = r#"
seed = 7

[walk]
output = "walks/out.txt"
prompt = false

[export]
format = "json"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.walk.output, PathBuf::from("walks/out.txt"));
        assert!(!config.walk.prompt);
        assert_eq!(config.export.format, ExportFormat::Json);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str("[walk]\nprompt = false\n").unwrap();
        assert_eq!(config.walk.output, PathBuf::from("random_walk_output.txt"));
        assert!(!config.walk.prompt);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_project_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(PROJECT_FILE), "[export]\nformat = \"json\"\n").unwrap();
        let config = Config::from_file(&dir.path().join(PROJECT_FILE)).unwrap();
        assert_eq!(config.export.format, ExportFormat::Json);
    }

    #[test]
    fn test_invalid_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PROJECT_FILE);
        std::fs::write(&path, "this is [[ not valid toml {{{}}}").unwrap();
        assert!(Config::from_file(&path).is_none());
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(Config::from_path(&missing).is_err());
        assert!(Config::resolve(Some(&missing), dir.path()).is_err());
    }

    // The only test that touches WORDGRAPH_SEED, so parallel tests never race on it
    #[test]
    fn test_env_seed_overrides_every_file() {
        let dir = tempfile::tempdir().unwrap();
        let explicit = dir.path().join("custom.toml");
        std::fs::write(&explicit, "seed = 1\n").unwrap();
        std::fs::write(dir.path().join(PROJECT_FILE), "seed = 3\n").unwrap();

        std::env::set_var(SEED_ENV, "2");
        assert_eq!(Config::from_path(&explicit).unwrap().seed, Some(2));
        assert_eq!(Config::load(dir.path()).seed, Some(2));
        assert_eq!(Config::resolve(Some(&explicit), dir.path()).unwrap().seed, Some(2));

        let mut config = Config {
            seed: Some(9),
            ..Config::default()
        };
        std::env::set_var(SEED_ENV, " 17 ");
        config.apply_env();
        assert_eq!(config.seed, Some(17));

        // invalid values are logged and leave the file's seed alone
        std::env::set_var(SEED_ENV, "not-a-number");
        assert_eq!(Config::from_path(&explicit).unwrap().seed, Some(1));
        config.apply_env();
        assert_eq!(config.seed, Some(17));

        std::env::remove_var(SEED_ENV);
        assert_eq!(Config::from_path(&explicit).unwrap().seed, Some(1));
        assert_eq!(Config::load(dir.path()).seed, Some(3));
    }
}
