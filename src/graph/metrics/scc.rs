// src/graph/metrics/scc.rs
//! Tarjan's strongly connected components with an explicit frame stack, so
//! graphs with tens of thousands of nodes cannot overflow the call stack.

const UNVISITED: usize = usize::MAX;

/// Reported cycles: SCCs of size >= 2, in completion order. Single-node
/// components are discarded even when they carry a self-loop.
#[must_use]
pub fn cycles(node_count: usize, edges: &[(usize, usize)]) -> Vec<Vec<usize>> {
    tarjan(node_count, edges)
        .into_iter()
        .filter(|component| component.len() >= 2)
        .collect()
}

/// All strongly connected components, in the order Tarjan completes them.
/// Component member order is stack pop order, matching the classic
/// discovery-index/low-link formulation.
#[must_use]
pub fn tarjan(node_count: usize, edges: &[(usize, usize)]) -> Vec<Vec<usize>> {
    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); node_count];
    for &(source, target) in edges {
        adjacency[source].push(target);
    }

    let mut index = vec![UNVISITED; node_count];
    let mut low = vec![0usize; node_count];
    let mut on_stack = vec![false; node_count];
    let mut stack: Vec<usize> = Vec::new();
    let mut next_index = 0usize;
    let mut components = Vec::new();

    // (node, next unvisited child position) frames replace recursion.
    let mut frames: Vec<(usize, usize)> = Vec::new();

    for start in 0..node_count {
        if index[start] != UNVISITED {
            continue;
        }
        index[start] = next_index;
        low[start] = next_index;
        next_index += 1;
        stack.push(start);
        on_stack[start] = true;
        frames.push((start, 0));

        while let Some(frame) = frames.last_mut() {
            let v = frame.0;
            let child = frame.1;

            if child < adjacency[v].len() {
                frame.1 += 1;
                let w = adjacency[v][child];
                if index[w] == UNVISITED {
                    index[w] = next_index;
                    low[w] = next_index;
                    next_index += 1;
                    stack.push(w);
                    on_stack[w] = true;
                    frames.push((w, 0));
                } else if on_stack[w] {
                    low[v] = low[v].min(index[w]);
                }
            } else {
                frames.pop();
                if low[v] == index[v] {
                    let mut component = Vec::new();
                    while let Some(w) = stack.pop() {
                        on_stack[w] = false;
                        component.push(w);
                        if w == v {
                            break;
                        }
                    }
                    components.push(component);
                }
                if let Some(parent) = frames.last_mut() {
                    low[parent.0] = low[parent.0].min(low[v]);
                }
            }
        }
    }

    components
}
