//! Layer assignment (longest path).
//!
//! Uses a Kahn traversal over the forward edges: vertices without incoming forward edges start
//! at layer 0, seeded in ascending id order; every other vertex lands one layer below its deepest
//! predecessor. The order in which vertices leave the queue is their discovery order, which
//! [`crate::order`] uses to order each layer.

use crate::indexed::IndexedGraph;
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranking {
    /// Layer per vertex index.
    pub layer: Vec<usize>,
    /// Vertex indices in discovery order.
    pub discovery: Vec<usize>,
}

/// `back` flags the edges to ignore, as produced by [`crate::acyclic::back_edges`].
pub fn longest_path(g: &IndexedGraph<'_>, back: &[bool]) -> Ranking {
    let n = g.vertex_count();
    let mut indegree = vec![0usize; n];
    for (e_ix, &(_, t)) in g.edges().iter().enumerate() {
        if !back[e_ix] {
            indegree[t] += 1;
        }
    }

    let mut queue: VecDeque<usize> = g
        .by_ascending_id()
        .into_iter()
        .filter(|&ix| indegree[ix] == 0)
        .collect();

    let mut layer = vec![0usize; n];
    let mut discovery: Vec<usize> = Vec::with_capacity(n);
    while let Some(v) = queue.pop_front() {
        discovery.push(v);
        for &e_ix in g.out_edges(v) {
            if back[e_ix] {
                continue;
            }
            let (_, w) = g.edges()[e_ix];
            layer[w] = layer[w].max(layer[v] + 1);
            indegree[w] -= 1;
            if indegree[w] == 0 {
                queue.push_back(w);
            }
        }
    }

    // Removing back edges leaves a DAG, so every vertex is reached. Keep the result total even if
    // that ever stops holding.
    if discovery.len() != n {
        debug_assert!(false, "layering left {} vertices unvisited", n - discovery.len());
        let mut seen = vec![false; n];
        for &v in &discovery {
            seen[v] = true;
        }
        discovery.extend((0..n).filter(|&v| !seen[v]));
    }

    Ranking { layer, discovery }
}
