//! Edge key types.
//!
//! The editor never needs parallel edges, so an edge is identified by its endpoints alone.

use super::VertexId;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    pub u: VertexId,
    pub v: VertexId,
}

impl EdgeKey {
    pub fn new(u: VertexId, v: VertexId) -> Self {
        Self { u, v }
    }

    pub fn touches(&self, id: VertexId) -> bool {
        self.u == id || self.v == id
    }
}

impl From<(VertexId, VertexId)> for EdgeKey {
    fn from((u, v): (VertexId, VertexId)) -> Self {
        Self { u, v }
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.u, self.v)
    }
}
