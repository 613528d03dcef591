use thiserror::Error;

/// Errors produced by graph construction, mutation and queries.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// A vertex index outside `[0, vertex_count)`.
    #[error("invalid vertex {vertex} (graph has {vertex_count} vertices)")]
    InvalidVertex { vertex: usize, vertex_count: usize },

    /// A construction argument that cannot describe a graph.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The matrix and list views disagree about the edge `u -> v`.
    #[error("views disagree on edge {u} -> {v}: {reason}")]
    Inconsistent { u: usize, v: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, GraphError>;
