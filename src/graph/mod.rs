// src/graph/mod.rs
//! The reference graph: node/edge data model, extraction, resolution,
//! assembly, metrics, and the output document.

pub mod builder;
pub mod document;
pub mod extract;
pub mod markdown;
pub mod metrics;
pub mod resolver;

use serde::Serialize;

/// Reference kind carried on every edge and unresolved record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    Import,
    Wikilink,
    Mdlink,
}

/// A file in the scanned tree.
///
/// `id` and `path` both hold the root-relative, forward-slash path; existing
/// consumers of the document rely on that redundancy. `degree` and `score`
/// are attached after assembly and the node is immutable from then on.
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    pub id: String,
    pub label: String,
    pub ext: String,
    pub path: String,
    pub degree: usize,
    pub score: f64,
}

/// A directed reference between two nodes, by id only. Parallel edges with
/// the same endpoints are kept; deduplication is deliberately not done.
#[derive(Debug, Clone, Serialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub kind: EdgeKind,
    pub cycle: bool,
}

/// A group of nodes sharing a directory-prefix key.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    pub id: String,
    pub label: String,
    pub node_ids: Vec<String>,
}

/// A strongly connected component of size >= 2.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cycle {
    pub id: String,
    pub node_ids: Vec<String>,
}

/// A reference specifier that could not be mapped to an in-tree file.
/// Informational only; never part of the graph proper.
#[derive(Debug, Clone, Serialize)]
pub struct Unresolved {
    pub from: String,
    pub target: String,
    #[serde(rename = "type")]
    pub kind: EdgeKind,
}

/// The assembled graph, before and after metric annotation.
#[derive(Debug, Default)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub unresolved: Vec<Unresolved>,
}
