#![forbid(unsafe_code)]

//! Graph container APIs used by the ladder editor.
//!
//! A [`Graph`] is a value: every mutation returns a new graph and leaves the receiver untouched,
//! so older snapshots held by an undo history stay valid. Vertices are keyed by integer ids,
//! edges by their `(u, v)` endpoint pair, and both iterate in insertion order.
//!
//! The persisted representation is the exchange record
//! `{"vertices":[{"u","d"}],"edges":[{"u","v","d"}]}` (see [`exchange`]).

pub mod error;
pub mod exchange;
pub mod graph;

pub use error::{Error, Result};
pub use graph::{
    DirectedGraph, EdgeData, EdgeKey, Graph, Point, VertexData, VertexId, alg, next_vertex_id,
};
