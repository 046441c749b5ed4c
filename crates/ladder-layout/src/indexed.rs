//! Dense, index-based view of a graph for one layout run.
//!
//! Vertex indices follow graph insertion order, edge indices follow edge insertion order. Every
//! later pass works on `usize` indices so lookups are plain slice accesses.

use crate::graphlib::{DirectedGraph, EdgeData, EdgeKey, VertexData, VertexId};
use rustc_hash::FxHashMap;

pub struct IndexedGraph<'a> {
    ids: Vec<VertexId>,
    data: Vec<&'a VertexData>,
    edges: Vec<(usize, usize)>,
    edge_data: Vec<&'a EdgeData>,
    out: Vec<Vec<usize>>,
}

impl<'a> IndexedGraph<'a> {
    pub fn new<G: DirectedGraph>(g: &'a G) -> Self {
        let (ids, data): (Vec<VertexId>, Vec<&VertexData>) = g
            .vertices()
            .filter_map(|id| g.vertex(id).map(|d| (id, d)))
            .unzip();
        let index: FxHashMap<VertexId, usize> =
            ids.iter().enumerate().map(|(ix, &id)| (id, ix)).collect();

        let mut edges: Vec<(usize, usize)> = Vec::new();
        let mut edge_data: Vec<&EdgeData> = Vec::new();
        let mut out: Vec<Vec<usize>> = vec![Vec::new(); ids.len()];
        for EdgeKey { u, v } in g.edges() {
            // The graph invariant guarantees both endpoints; skip rather than panic if another
            // `DirectedGraph` implementation breaks it.
            let (Some(&s), Some(&t), Some(d)) = (index.get(&u), index.get(&v), g.edge(u, v))
            else {
                continue;
            };
            out[s].push(edges.len());
            edges.push((s, t));
            edge_data.push(d);
        }

        Self {
            ids,
            data,
            edges,
            edge_data,
            out,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.ids.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn id(&self, ix: usize) -> VertexId {
        self.ids[ix]
    }

    pub fn data(&self, ix: usize) -> &'a VertexData {
        self.data[ix]
    }

    /// `(source, target)` vertex indices per edge.
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    pub fn edge_key(&self, e_ix: usize) -> EdgeKey {
        let (s, t) = self.edges[e_ix];
        EdgeKey::new(self.ids[s], self.ids[t])
    }

    pub fn edge_data(&self, e_ix: usize) -> &'a EdgeData {
        self.edge_data[e_ix]
    }

    /// Outgoing edge indices of a vertex, in edge insertion order.
    pub fn out_edges(&self, ix: usize) -> &[usize] {
        &self.out[ix]
    }

    /// Vertex indices sorted by ascending id.
    pub fn by_ascending_id(&self) -> Vec<usize> {
        let mut ixs: Vec<usize> = (0..self.ids.len()).collect();
        ixs.sort_by_key(|&ix| self.ids[ix]);
        ixs
    }
}
