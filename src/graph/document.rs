// src/graph/document.rs
//! The portable output document consumed by the external visualizer.
//! Field names and the `id`/`path` redundancy are a compatibility contract.

use crate::error::{GraphError, Result};
use crate::graph::metrics::Annotations;
use crate::graph::{Cluster, Cycle, Edge, Graph, Node, Unresolved};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const SCHEMA_VERSION: &str = "0.1.3";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphDocument {
    pub schema_version: String,
    pub generated_at: String,
    pub root: String,
    pub stats: Stats,
    pub clusters: Vec<Cluster>,
    pub cycles: Vec<Cycle>,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub unresolved: Vec<Unresolved>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Stats {
    pub nodes: usize,
    pub edges: usize,
    pub clusters: usize,
    pub cycles: usize,
}

impl GraphDocument {
    #[must_use]
    pub fn new(root: &Path, graph: Graph, annotations: Annotations) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            root: root.to_string_lossy().into_owned(),
            stats: Stats {
                nodes: graph.nodes.len(),
                edges: graph.edges.len(),
                clusters: annotations.clusters.len(),
                cycles: annotations.cycles.len(),
            },
            clusters: annotations.clusters,
            cycles: annotations.cycles,
            nodes: graph.nodes,
            edges: graph.edges,
            unresolved: graph.unresolved,
        }
    }
}

/// Writes the document as pretty-printed JSON, creating parent directories.
///
/// # Errors
/// This is the pipeline's only fatal failure point: any I/O or
/// serialization error here aborts the run.
pub fn write(document: &GraphDocument, out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| GraphError::WriteDocument {
                source,
                path: out.to_path_buf(),
            })?;
        }
    }

    let file = fs::File::create(out).map_err(|source| GraphError::WriteDocument {
        source,
        path: out.to_path_buf(),
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, document)?;
    // BufWriter's drop ignores flush errors; a short write (disk full) must
    // surface here, not report success over a truncated document.
    writer.flush().map_err(|source| GraphError::WriteDocument {
        source,
        path: out.to_path_buf(),
    })?;
    Ok(())
}
