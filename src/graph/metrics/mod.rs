// src/graph/metrics/mod.rs
//! Graph-analytic annotations over the assembled graph: directory
//! clustering, PageRank importance, and SCC cycle detection. Clustering and
//! PageRank are independent; edge cycle flags depend on the SCC output.

pub mod cluster;
pub mod pagerank;
pub mod scc;

use crate::config::Config;
use crate::graph::{Cluster, Cycle, Graph};
use std::collections::{HashMap, HashSet};

/// Computed annotations for a finished graph. Node scores and edge cycle
/// flags are written in place; clusters and cycles are returned here.
#[derive(Debug, Default)]
pub struct Annotations {
    pub clusters: Vec<Cluster>,
    pub cycles: Vec<Cycle>,
}

#[must_use]
pub fn annotate(graph: &mut Graph, config: &Config) -> Annotations {
    let index: HashMap<&str, usize> = graph
        .nodes
        .iter()
        .enumerate()
        .map(|(i, n)| (n.id.as_str(), i))
        .collect();
    let edges: Vec<(usize, usize)> = graph
        .edges
        .iter()
        .filter_map(|e| {
            Some((
                *index.get(e.source.as_str())?,
                *index.get(e.target.as_str())?,
            ))
        })
        .collect();

    let clusters = cluster::compute(&graph.nodes, config.cluster_depth);

    let scores = pagerank::compute(graph.nodes.len(), &edges, config.iterations, config.damping);
    for (node, score) in graph.nodes.iter_mut().zip(scores) {
        node.score = score;
    }

    let components = scc::cycles(graph.nodes.len(), &edges);

    // The flag means "this edge touches a cyclic region": both endpoints are
    // members of some reported SCC, not necessarily on a minimal cycle path.
    let members: HashSet<usize> = components.iter().flatten().copied().collect();
    for (edge, &(s, t)) in graph.edges.iter_mut().zip(&edges) {
        edge.cycle = members.contains(&s) && members.contains(&t);
    }

    let cycles = components
        .into_iter()
        .enumerate()
        .map(|(i, comp)| Cycle {
            id: format!("cycle:{}", i + 1),
            node_ids: comp
                .into_iter()
                .map(|idx| graph.nodes[idx].id.clone())
                .collect(),
        })
        .collect();

    Annotations { clusters, cycles }
}
