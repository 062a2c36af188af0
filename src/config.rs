// src/config.rs
use crate::error::{GraphError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx", "md"];
pub const DEFAULT_OUT: &str = "./graph.json";
pub const DEFAULT_CLUSTER_DEPTH: usize = 2;
pub const DEFAULT_ITERATIONS: usize = 35;
pub const DEFAULT_DAMPING: f64 = 0.85;

/// Infrastructure directories never entered during discovery: dependency
/// caches, version control, build output, coverage reports.
pub const PRUNE_DIRS: &[&str] = &[
    "node_modules",
    ".next",
    ".git",
    ".obsidian",
    "dist",
    "build",
    "out",
    "coverage",
    "target",
];

/// Fully resolved scan configuration. `root` is canonical and absolute so
/// the resolver's inside-root guard works on lexically normalized paths.
#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
    pub out: PathBuf,
    pub extensions: Vec<String>,
    pub cluster_depth: usize,
    pub iterations: usize,
    pub damping: f64,
    pub verbose: bool,
}

impl Config {
    /// Builds a default configuration for the given (already canonical) root.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            out: PathBuf::from(DEFAULT_OUT),
            extensions: DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect(),
            cluster_depth: DEFAULT_CLUSTER_DEPTH,
            iterations: DEFAULT_ITERATIONS,
            damping: DEFAULT_DAMPING,
            verbose: false,
        }
    }

    /// Validates tunables before a scan.
    ///
    /// # Errors
    /// Returns `InvalidConfig` when a tunable is out of range.
    pub fn validate(&self) -> Result<()> {
        if self.extensions.is_empty() {
            return Err(GraphError::InvalidConfig(
                "extension allowlist is empty".to_string(),
            ));
        }
        if self.cluster_depth == 0 {
            return Err(GraphError::InvalidConfig(
                "cluster depth must be at least 1".to_string(),
            ));
        }
        if self.iterations == 0 {
            return Err(GraphError::InvalidConfig(
                "iteration count must be at least 1".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&self.damping) {
            return Err(GraphError::InvalidConfig(format!(
                "damping factor {} is outside [0, 1)",
                self.damping
            )));
        }
        Ok(())
    }
}

/// Optional `repograph.toml` at the scan root. Every field is optional;
/// CLI flags win over file values.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub out: Option<PathBuf>,
    pub extensions: Option<Vec<String>>,
    pub cluster_depth: Option<usize>,
    pub iterations: Option<usize>,
    pub damping: Option<f64>,
}

impl FileConfig {
    pub const FILE_NAME: &'static str = "repograph.toml";

    /// Loads `repograph.toml` from the scan root if present.
    ///
    /// # Errors
    /// A missing file yields defaults; a malformed file is a configuration
    /// error, not a silent skip.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(Self::FILE_NAME);
        let Ok(text) = fs::read_to_string(&path) else {
            return Ok(Self::default());
        };
        toml::from_str(&text).map_err(|e| {
            GraphError::InvalidConfig(format!("{}: {e}", path.display()))
        })
    }
}

/// Splits a comma-separated extension list, trimming entries, dropping
/// empties, and lowercasing (extensions compare case-insensitively).
#[must_use]
pub fn parse_extensions(list: &str) -> Vec<String> {
    list.split(',')
        .map(|s| s.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}
