//! Break cycles with a DFS feedback arc set.
//!
//! Roots are visited in ascending vertex id order and out edges in insertion order. An edge that
//! reaches a vertex still on the DFS stack is a back edge; removing every back edge leaves a DAG.
//! Back edges are only ignored for layering: they keep their direction and are routed like any
//! other edge. Self loops are always back edges, so they never constrain layers.

use crate::indexed::IndexedGraph;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnStack,
    Done,
}

/// One flag per edge index, `true` for back edges.
pub fn back_edges(g: &IndexedGraph<'_>) -> Vec<bool> {
    let mut back = vec![false; g.edge_count()];
    let mut mark = vec![Mark::Unvisited; g.vertex_count()];
    // (vertex, position in its out-edge list). Explicit so deep chains cannot overflow the stack.
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in g.by_ascending_id() {
        if mark[root] != Mark::Unvisited {
            continue;
        }
        mark[root] = Mark::OnStack;
        stack.push((root, 0));

        while let Some(top) = stack.last_mut() {
            let (v, next) = *top;
            let Some(&e_ix) = g.out_edges(v).get(next) else {
                mark[v] = Mark::Done;
                stack.pop();
                continue;
            };
            top.1 += 1;

            let (_, w) = g.edges()[e_ix];
            match mark[w] {
                Mark::OnStack => {
                    tracing::trace!(
                        u = g.id(v),
                        v = g.id(w),
                        "ignoring back edge for layering"
                    );
                    back[e_ix] = true;
                }
                Mark::Unvisited => {
                    mark[w] = Mark::OnStack;
                    stack.push((w, 0));
                }
                Mark::Done => {}
            }
        }
    }

    back
}
