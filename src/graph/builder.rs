// src/graph/builder.rs
//! Graph assembly: seeds nodes from discovery, grows them through
//! resolution, and records one edge per successful reference.

use crate::config::Config;
use crate::graph::extract;
use crate::graph::markdown::{self, MdRef};
use crate::graph::resolver::{self, BasenameIndex, Resolution};
use crate::graph::{Edge, EdgeKind, Graph, Node, Unresolved};
use crate::lang::Lang;
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Per-file extraction output.
enum FileRefs {
    Code(Vec<String>),
    Markdown(Vec<MdRef>),
    None,
}

/// Builds the node/edge set for the discovered files.
///
/// Read + parse is per-file and read-only, so it runs in parallel; `collect`
/// preserves input order, and all node/edge insertion below happens on one
/// thread in discovery order, keeping node-id assignment deterministic.
#[must_use]
pub fn assemble(config: &Config, files: &[PathBuf]) -> Graph {
    let basenames = resolver::build_basename_index(files);
    let extracted: Vec<FileRefs> = files.par_iter().map(|f| extract_refs(f)).collect();

    let mut assembler = Assembler::new(&config.root);
    for file in files {
        assembler.add_node(file);
    }

    for (file, refs) in files.iter().zip(extracted) {
        match refs {
            FileRefs::Code(specs) => assembler.add_code_refs(file, &specs),
            FileRefs::Markdown(links) => assembler.add_md_refs(file, &links, &basenames),
            FileRefs::None => {}
        }
    }

    assembler.finish()
}

/// Reads and extracts one file. Read and parse failures are absorbed here:
/// the file keeps its node from discovery, just with no outgoing edges.
fn extract_refs(file: &Path) -> FileRefs {
    let Some(lang) = Lang::from_path(file) else {
        return FileRefs::None;
    };
    let Ok(content) = fs::read_to_string(file) else {
        return FileRefs::None;
    };

    if lang.is_code() {
        FileRefs::Code(extract::extract(lang, &content))
    } else {
        FileRefs::Markdown(markdown::extract(&content))
    }
}

struct Assembler<'a> {
    root: &'a Path,
    nodes: Vec<Node>,
    ids: HashSet<String>,
    edges: Vec<Edge>,
    unresolved: Vec<Unresolved>,
}

impl<'a> Assembler<'a> {
    fn new(root: &'a Path) -> Self {
        Self {
            root,
            nodes: Vec::new(),
            ids: HashSet::new(),
            edges: Vec::new(),
            unresolved: Vec::new(),
        }
    }

    /// Inserts a node for `abs` unless one already exists, returning its id.
    fn add_node(&mut self, abs: &Path) -> String {
        let id = rel_id(self.root, abs);
        if self.ids.insert(id.clone()) {
            self.nodes.push(Node {
                id: id.clone(),
                label: abs
                    .file_name()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| id.clone()),
                ext: abs
                    .extension()
                    .map(|s| s.to_string_lossy().to_ascii_lowercase())
                    .unwrap_or_default(),
                path: id.clone(),
                degree: 0,
                score: 0.0,
            });
        }
        id
    }

    fn add_code_refs(&mut self, from: &Path, specs: &[String]) {
        let from_id = rel_id(self.root, from);
        for spec in specs {
            match resolver::resolve_import(self.root, from, spec) {
                Resolution::Resolved(target) => self.add_edge(&from_id, &target, EdgeKind::Import),
                Resolution::External => {}
                Resolution::Unresolved => self.unresolved.push(Unresolved {
                    from: from_id.clone(),
                    target: spec.clone(),
                    kind: EdgeKind::Import,
                }),
            }
        }
    }

    fn add_md_refs(&mut self, from: &Path, links: &[MdRef], basenames: &BasenameIndex) {
        let from_id = rel_id(self.root, from);
        for link in links {
            let resolved = match link.kind {
                EdgeKind::Wikilink => {
                    resolver::resolve_wikilink(self.root, basenames, &link.target)
                }
                _ => resolver::resolve_mdlink(self.root, from, &link.target),
            };

            match resolved {
                Some(target) => self.add_edge(&from_id, &target, link.kind),
                None => self.unresolved.push(Unresolved {
                    from: from_id.clone(),
                    target: link.target.clone(),
                    kind: link.kind,
                }),
            }
        }
    }

    fn add_edge(&mut self, from_id: &str, target: &Path, kind: EdgeKind) {
        let target_id = self.add_node(target);
        self.edges.push(Edge {
            source: from_id.to_string(),
            target: target_id,
            kind,
            cycle: false,
        });
    }

    /// Attaches combined in-plus-out degree and returns the finished graph.
    fn finish(mut self) -> Graph {
        let mut degree: HashMap<&str, usize> = HashMap::new();
        for edge in &self.edges {
            *degree.entry(edge.source.as_str()).or_default() += 1;
            *degree.entry(edge.target.as_str()).or_default() += 1;
        }
        let degrees: Vec<usize> = self
            .nodes
            .iter()
            .map(|n| degree.get(n.id.as_str()).copied().unwrap_or(0))
            .collect();
        for (node, d) in self.nodes.iter_mut().zip(degrees) {
            node.degree = d;
        }

        Graph {
            nodes: self.nodes,
            edges: self.edges,
            unresolved: self.unresolved,
        }
    }
}

/// Root-relative, forward-slash-normalized node id.
fn rel_id(root: &Path, abs: &Path) -> String {
    let rel = abs.strip_prefix(root).unwrap_or(abs);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
