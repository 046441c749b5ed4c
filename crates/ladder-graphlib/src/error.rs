use crate::graph::VertexId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("vertex {id} already exists")]
    DuplicateVertex { id: VertexId },

    #[error("edge {u} -> {v} already exists")]
    DuplicateEdge { u: VertexId, v: VertexId },

    #[error("vertex {id} does not exist")]
    UnknownVertex { id: VertexId },

    #[error("edge {u} -> {v} does not exist")]
    UnknownEdge { u: VertexId, v: VertexId },

    #[error("Malformed exchange data: {message}")]
    MalformedExchangeData { message: String },
}
