// src/scan.rs
//! Pipeline orchestration: discover -> assemble -> annotate -> write.
//! The whole graph is rebuilt from scratch on each run; it is a pure
//! function of the file tree at scan time.

use crate::config::Config;
use crate::discovery;
use crate::error::Result;
use crate::graph::{builder, document, metrics};
use std::path::PathBuf;

/// Counts reported after a successful run.
#[derive(Debug, Clone)]
pub struct ScanSummary {
    pub out: PathBuf,
    pub nodes: usize,
    pub edges: usize,
    pub clusters: usize,
    pub cycles: usize,
    pub unresolved: usize,
}

/// Runs the full pipeline once.
///
/// # Errors
/// Per-file problems are absorbed upstream; the only error surfaced here is
/// a failure to produce the output document.
pub fn run(config: &Config) -> Result<ScanSummary> {
    let files = discovery::discover(config);

    let mut graph = builder::assemble(config, &files);
    let annotations = metrics::annotate(&mut graph, config);
    let unresolved = graph.unresolved.len();

    let doc = document::GraphDocument::new(&config.root, graph, annotations);
    document::write(&doc, &config.out)?;

    Ok(ScanSummary {
        out: config.out.clone(),
        nodes: doc.stats.nodes,
        edges: doc.stats.edges,
        clusters: doc.stats.clusters,
        cycles: doc.stats.cycles,
        unresolved,
    })
}
