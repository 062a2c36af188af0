// src/cli.rs
use crate::config::{self, Config, FileConfig};
use crate::error::{GraphError, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "repograph",
    version,
    about = "Builds a file reference graph with importance, clusters, and cycles"
)]
pub struct Cli {
    /// Root directory to scan
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Output path for the graph document
    #[arg(long, short, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Comma-separated extension allowlist (default: js,jsx,ts,tsx,md)
    #[arg(long, value_name = "LIST")]
    pub ext: Option<String>,

    /// Directory depth for cluster keys
    #[arg(long, value_name = "N")]
    pub cluster_depth: Option<usize>,

    /// PageRank iteration count
    #[arg(long, value_name = "N")]
    pub iterations: Option<usize>,

    /// PageRank damping factor
    #[arg(long, value_name = "FACTOR")]
    pub damping: Option<f64>,

    /// Watch the root and rebuild the graph on change
    #[arg(long)]
    pub watch: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    /// Resolves the effective configuration: built-in defaults, then an
    /// optional `repograph.toml` at the scan root, then CLI flags.
    ///
    /// # Errors
    /// Fails when the root cannot be canonicalized, the config file is
    /// malformed, or a tunable is out of range.
    pub fn to_config(&self) -> Result<Config> {
        let root = self.root.canonicalize().map_err(|source| GraphError::Io {
            source,
            path: self.root.clone(),
        })?;

        let file = FileConfig::load(&root)?;
        let mut cfg = Config::new(root);

        if let Some(out) = self.out.clone().or(file.out) {
            cfg.out = out;
        }
        if let Some(list) = &self.ext {
            cfg.extensions = config::parse_extensions(list);
        } else if let Some(exts) = file.extensions {
            cfg.extensions = exts
                .iter()
                .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
                .filter(|e| !e.is_empty())
                .collect();
        }
        if let Some(depth) = self.cluster_depth.or(file.cluster_depth) {
            cfg.cluster_depth = depth;
        }
        if let Some(iterations) = self.iterations.or(file.iterations) {
            cfg.iterations = iterations;
        }
        if let Some(damping) = self.damping.or(file.damping) {
            cfg.damping = damping;
        }
        cfg.verbose = self.verbose;

        cfg.validate()?;
        Ok(cfg)
    }
}
