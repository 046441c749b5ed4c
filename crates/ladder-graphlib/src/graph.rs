//! The persistent [`Graph`] container.
//!
//! Mutations take `&self` and return a fresh graph. Preconditions are checked before anything is
//! copied, so a rejected mutation costs nothing and the receiver is never observed half-updated.
//!
//! Payloads are normalised on the way in: non-finite pins and cached routes with non-finite
//! points are dropped, so every graph serializes to exchange JSON that reads back equal.

mod data;
mod edge_key;

pub mod alg;

pub use data::{EdgeData, Point, VertexData};
pub use edge_key::EdgeKey;

use crate::error::{Error, Result};
use rustc_hash::FxBuildHasher;

type IndexMap<K, V> = indexmap::IndexMap<K, V, FxBuildHasher>;

/// Vertex ids double as z-order and lookup keys in the editor.
pub type VertexId = u32;

/// Capabilities the layout engine and the exchange codec need from a graph.
pub trait DirectedGraph: Sized {
    fn vertices(&self) -> impl Iterator<Item = VertexId> + '_;
    fn edges(&self) -> impl Iterator<Item = EdgeKey> + '_;
    fn vertex(&self, id: VertexId) -> Option<&VertexData>;
    fn edge(&self, u: VertexId, v: VertexId) -> Option<&EdgeData>;
    fn add_vertex(&self, id: VertexId, data: VertexData) -> Result<Self>;
    fn add_edge(&self, u: VertexId, v: VertexId, data: EdgeData) -> Result<Self>;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    vertices: IndexMap<VertexId, VertexData>,
    edges: IndexMap<EdgeKey, EdgeData>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph in one pass, checking the same preconditions as the persistent mutations.
    pub fn build(
        vertices: impl IntoIterator<Item = (VertexId, VertexData)>,
        edges: impl IntoIterator<Item = (VertexId, VertexId, EdgeData)>,
    ) -> Result<Self> {
        let mut g = Graph::new();
        for (id, data) in vertices {
            g.insert_vertex(id, data)?;
        }
        for (u, v, data) in edges {
            g.insert_edge(u, v, data)?;
        }
        Ok(g)
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn has_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.edges.contains_key(&EdgeKey::new(u, v))
    }

    pub fn vertex(&self, id: VertexId) -> Option<&VertexData> {
        self.vertices.get(&id)
    }

    pub fn edge(&self, u: VertexId, v: VertexId) -> Option<&EdgeData> {
        self.edges.get(&EdgeKey::new(u, v))
    }

    /// Vertex ids in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.keys().copied()
    }

    /// Edge keys in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeKey> + '_ {
        self.edges.keys().copied()
    }

    pub fn vertex_entries(&self) -> impl Iterator<Item = (VertexId, &VertexData)> + '_ {
        self.vertices.iter().map(|(&id, d)| (id, d))
    }

    pub fn edge_entries(&self) -> impl Iterator<Item = (EdgeKey, &EdgeData)> + '_ {
        self.edges.iter().map(|(&k, d)| (k, d))
    }

    // Adjacency queries scan the edge list. The layout engine builds its own indexed adjacency
    // once per run; these are for editor-side lookups on a single vertex.

    pub fn out_edges(&self, id: VertexId) -> impl Iterator<Item = EdgeKey> + '_ {
        self.edges().filter(move |e| e.u == id)
    }

    pub fn in_edges(&self, id: VertexId) -> impl Iterator<Item = EdgeKey> + '_ {
        self.edges().filter(move |e| e.v == id)
    }

    pub fn successors(&self, id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.out_edges(id).map(|e| e.v)
    }

    pub fn predecessors(&self, id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.in_edges(id).map(|e| e.u)
    }

    /// Vertices without incoming edges, in insertion order.
    pub fn sources(&self) -> Vec<VertexId> {
        self.vertices()
            .filter(|&id| self.in_edges(id).next().is_none())
            .collect()
    }

    pub fn add_vertex(&self, id: VertexId, data: VertexData) -> Result<Self> {
        if self.has_vertex(id) {
            return Err(Error::DuplicateVertex { id });
        }
        let mut next = self.clone();
        next.vertices.insert(id, data.normalized());
        Ok(next)
    }

    pub fn add_edge(&self, u: VertexId, v: VertexId, data: EdgeData) -> Result<Self> {
        self.check_new_edge(u, v)?;
        let mut next = self.clone();
        next.edges.insert(EdgeKey::new(u, v), data.normalized());
        Ok(next)
    }

    /// Replaces a vertex payload in place; the vertex keeps its position in iteration order.
    pub fn update_vertex(&self, id: VertexId, data: VertexData) -> Result<Self> {
        if !self.has_vertex(id) {
            return Err(Error::UnknownVertex { id });
        }
        let mut next = self.clone();
        if let Some(slot) = next.vertices.get_mut(&id) {
            *slot = data.normalized();
        }
        Ok(next)
    }

    pub fn update_edge(&self, u: VertexId, v: VertexId, data: EdgeData) -> Result<Self> {
        if !self.has_edge(u, v) {
            return Err(Error::UnknownEdge { u, v });
        }
        let mut next = self.clone();
        if let Some(slot) = next.edges.get_mut(&EdgeKey::new(u, v)) {
            *slot = data.normalized();
        }
        Ok(next)
    }

    /// Removes a vertex together with every edge that starts or ends at it.
    pub fn remove_vertex(&self, id: VertexId) -> Result<Self> {
        if !self.has_vertex(id) {
            return Err(Error::UnknownVertex { id });
        }
        let mut next = self.clone();
        next.vertices.shift_remove(&id);
        next.edges.retain(|e, _| !e.touches(id));
        Ok(next)
    }

    pub fn remove_edge(&self, u: VertexId, v: VertexId) -> Result<Self> {
        if !self.has_edge(u, v) {
            return Err(Error::UnknownEdge { u, v });
        }
        let mut next = self.clone();
        next.edges.shift_remove(&EdgeKey::new(u, v));
        Ok(next)
    }

    fn check_new_edge(&self, u: VertexId, v: VertexId) -> Result<()> {
        for id in [u, v] {
            if !self.has_vertex(id) {
                return Err(Error::UnknownVertex { id });
            }
        }
        if self.has_edge(u, v) {
            return Err(Error::DuplicateEdge { u, v });
        }
        Ok(())
    }

    // In-place inserts for one-pass construction, where there is no older snapshot to preserve.

    fn insert_vertex(&mut self, id: VertexId, data: VertexData) -> Result<()> {
        if self.has_vertex(id) {
            return Err(Error::DuplicateVertex { id });
        }
        self.vertices.insert(id, data.normalized());
        Ok(())
    }

    fn insert_edge(&mut self, u: VertexId, v: VertexId, data: EdgeData) -> Result<()> {
        self.check_new_edge(u, v)?;
        self.edges.insert(EdgeKey::new(u, v), data.normalized());
        Ok(())
    }
}

impl DirectedGraph for Graph {
    fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        Graph::vertices(self)
    }

    fn edges(&self) -> impl Iterator<Item = EdgeKey> + '_ {
        Graph::edges(self)
    }

    fn vertex(&self, id: VertexId) -> Option<&VertexData> {
        Graph::vertex(self, id)
    }

    fn edge(&self, u: VertexId, v: VertexId) -> Option<&EdgeData> {
        Graph::edge(self, u, v)
    }

    fn add_vertex(&self, id: VertexId, data: VertexData) -> Result<Self> {
        Graph::add_vertex(self, id, data)
    }

    fn add_edge(&self, u: VertexId, v: VertexId, data: EdgeData) -> Result<Self> {
        Graph::add_edge(self, u, v, data)
    }
}

/// One greater than the largest vertex id, or `0` for an empty graph.
///
/// Saturates at `VertexId::MAX`; adding a vertex with the returned id then fails with
/// [`Error::DuplicateVertex`] instead of silently reusing a wrapped id.
pub fn next_vertex_id<G: DirectedGraph>(g: &G) -> VertexId {
    g.vertices()
        .max()
        .map_or(0, |max| max.saturating_add(1))
}
