// src/graph/metrics/cluster.rs
//! Directory-prefix clustering: one non-overlapping cluster per node.

use crate::graph::{Cluster, Node};
use std::collections::HashMap;

/// Sentinel key for files directly at the scan root.
pub const ROOT_KEY: &str = "(root)";

/// Derives the cluster key for a node path: the first `depth` directory
/// components (filename excluded). No directory components means the file
/// sits at the root and gets the sentinel key.
#[must_use]
pub fn cluster_key(path: &str, depth: usize) -> String {
    let mut parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    parts.pop(); // the filename never contributes to the key
    let keep = depth.min(parts.len());
    if keep == 0 {
        return ROOT_KEY.to_string();
    }
    parts[..keep].join("/")
}

/// Groups all nodes by cluster key, preserving first-seen key order so the
/// output is deterministic for a fixed node order.
#[must_use]
pub fn compute(nodes: &[Node], depth: usize) -> Vec<Cluster> {
    let mut order: Vec<String> = Vec::new();
    let mut members: HashMap<String, Vec<String>> = HashMap::new();

    for node in nodes {
        let key = cluster_key(&node.path, depth);
        if !members.contains_key(&key) {
            order.push(key.clone());
        }
        members.entry(key).or_default().push(node.id.clone());
    }

    order
        .into_iter()
        .map(|key| {
            let node_ids = members.remove(&key).unwrap_or_default();
            Cluster {
                id: format!("cluster:{key}"),
                label: key,
                node_ids,
            }
        })
        .collect()
}
