//! Helper algorithms over [`Graph`](super::Graph).

use super::{Graph, VertexId};
use rustc_hash::FxHashMap;

/// Strongly connected components that contain a cycle: components with more than one vertex,
/// plus single vertices with a self loop.
///
/// Vertices inside a component are listed in graph insertion order; components are sorted by
/// their first vertex id.
pub fn find_cycles(g: &Graph) -> Vec<Vec<VertexId>> {
    const UNVISITED: usize = usize::MAX;

    let ids: Vec<VertexId> = g.vertices().collect();
    let position: FxHashMap<VertexId, usize> =
        ids.iter().enumerate().map(|(i, &v)| (v, i)).collect();
    let mut successors: Vec<Vec<usize>> = vec![Vec::new(); ids.len()];
    let mut self_loop = vec![false; ids.len()];
    for e in g.edges() {
        let (Some(&u), Some(&v)) = (position.get(&e.u), position.get(&e.v)) else {
            continue;
        };
        successors[u].push(v);
        self_loop[u] |= u == v;
    }

    let mut index = vec![UNVISITED; ids.len()];
    let mut lowlink = vec![0; ids.len()];
    let mut on_stack = vec![false; ids.len()];
    let mut stack: Vec<usize> = Vec::new();
    let mut next_index = 0;
    let mut sccs: Vec<Vec<usize>> = Vec::new();
    // (vertex, position in its successor list). Explicit so deep chains cannot overflow the stack.
    let mut call: Vec<(usize, usize)> = Vec::new();

    for root in 0..ids.len() {
        if index[root] != UNVISITED {
            continue;
        }
        call.push((root, 0));
        index[root] = next_index;
        lowlink[root] = next_index;
        next_index += 1;
        stack.push(root);
        on_stack[root] = true;

        while let Some(top) = call.last_mut() {
            let (v, next) = *top;
            if let Some(&w) = successors[v].get(next) {
                top.1 += 1;
                if index[w] == UNVISITED {
                    index[w] = next_index;
                    lowlink[w] = next_index;
                    next_index += 1;
                    stack.push(w);
                    on_stack[w] = true;
                    call.push((w, 0));
                } else if on_stack[w] {
                    lowlink[v] = lowlink[v].min(index[w]);
                }
                continue;
            }

            call.pop();
            if let Some(&(parent, _)) = call.last() {
                lowlink[parent] = lowlink[parent].min(lowlink[v]);
            }
            if lowlink[v] == index[v] {
                let mut scc: Vec<usize> = Vec::new();
                while let Some(w) = stack.pop() {
                    on_stack[w] = false;
                    scc.push(w);
                    if w == v {
                        break;
                    }
                }
                sccs.push(scc);
            }
        }
    }

    let mut cycles: Vec<Vec<VertexId>> = sccs
        .into_iter()
        .filter(|scc| scc.len() > 1 || self_loop[scc[0]])
        .map(|mut scc| {
            scc.sort_unstable();
            scc.into_iter().map(|ix| ids[ix]).collect()
        })
        .collect();
    cycles.sort_by(|a, b| a.first().cmp(&b.first()));
    cycles
}

pub fn is_acyclic(g: &Graph) -> bool {
    find_cycles(g).is_empty()
}
