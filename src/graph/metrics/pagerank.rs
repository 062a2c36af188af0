// src/graph/metrics/pagerank.rs
//! `PageRank` importance scoring over the directed reference graph.
//!
//! Fixed iteration count (no convergence-based early exit), then a linear
//! min/max rescale to [0, 1]. Parallel edges weigh multiply: each edge
//! record contributes to out-degree and to the incoming list.

/// Computes rescaled `PageRank` scores per node index, rounded to 4 decimal
/// digits. Nodes with no successors distribute their score over all N nodes.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn compute(
    node_count: usize,
    edges: &[(usize, usize)],
    iterations: usize,
    damping: f64,
) -> Vec<f64> {
    if node_count == 0 {
        return Vec::new();
    }
    let n = node_count as f64;

    let mut out_degree = vec![0usize; node_count];
    let mut incoming: Vec<Vec<usize>> = vec![Vec::new(); node_count];
    for &(source, target) in edges {
        out_degree[source] += 1;
        incoming[target].push(source);
    }

    let mut ranks = vec![1.0 / n; node_count];
    for _ in 0..iterations {
        let mut next = vec![0.0; node_count];
        for (v, next_rank) in next.iter_mut().enumerate() {
            let mut sum = 0.0;
            for &source in &incoming[v] {
                // Sink guard: a contributor with no successors divides by N,
                // never by zero.
                let denom = if out_degree[source] == 0 {
                    n
                } else {
                    out_degree[source] as f64
                };
                sum += ranks[source] / denom;
            }
            *next_rank = (1.0 - damping) / n + damping * sum;
        }
        ranks = next;
    }

    rescale(&ranks)
}

/// Linear min/max rescale. When every score ties, the span falls back to 1
/// and everything maps to 0.0 rather than dividing by zero.
fn rescale(ranks: &[f64]) -> Vec<f64> {
    let min = ranks.iter().copied().fold(f64::INFINITY, f64::min);
    let max = ranks.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = if max - min > 0.0 { max - min } else { 1.0 };
    ranks.iter().map(|r| round4((r - min) / span)).collect()
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITERS: usize = 35;
    const DAMPING: f64 = 0.85;

    #[test]
    fn test_empty_graph() {
        assert!(compute(0, &[], ITERS, DAMPING).is_empty());
    }

    #[test]
    fn test_single_node_maps_to_zero() {
        // One node ties with itself; the rescale span fallback applies.
        assert_eq!(compute(1, &[], ITERS, DAMPING), vec![0.0]);
    }

    #[test]
    fn test_importer_ranks_below_imported() {
        // a -> b: b receives rank, a only keeps the teleport share.
        let scores = compute(2, &[(0, 1)], ITERS, DAMPING);
        assert_eq!(scores, vec![0.0, 1.0]);
    }

    #[test]
    fn test_symmetric_cycle_ties() {
        let scores = compute(2, &[(0, 1), (1, 0)], ITERS, DAMPING);
        assert_eq!(scores, vec![0.0, 0.0]);
    }

    #[test]
    fn test_hub_scores_highest() {
        // Three files import the hub; the hub imports nothing.
        let edges = [(0, 3), (1, 3), (2, 3)];
        let scores = compute(4, &edges, ITERS, DAMPING);
        assert_eq!(scores[3], 1.0);
        for &s in &scores {
            assert!((0.0..=1.0).contains(&s));
        }
    }

    #[test]
    fn test_rounding_to_four_digits() {
        let scores = compute(3, &[(0, 2), (1, 2), (2, 0)], ITERS, DAMPING);
        for s in scores {
            let scaled = s * 10_000.0;
            assert!((scaled - scaled.round()).abs() < 1e-9, "score {s} not rounded");
        }
    }
}
