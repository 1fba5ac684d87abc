use thiserror::Error;

use crate::distance::Distance;
use crate::graph::VertexId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Source index outside `0..vertex_count`; raised before any relaxation.
    #[error("source vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    InvalidSource { vertex: VertexId, vertex_count: usize },

    #[error("edge {u} -> {v} has an endpoint outside 0..{vertex_count}")]
    InvalidEdge { u: VertexId, v: VertexId, vertex_count: usize },

    /// A cycle of negative total weight is reachable from the source.
    #[error("negative-weight cycle reachable from the source")]
    NegativeCycleDetected,

    #[error("engines disagree at vertex {vertex}: sequential={sequential}, parallel={parallel}")]
    Mismatch { vertex: VertexId, sequential: Distance, parallel: Distance },

    #[error("engines disagree on the outcome: sequential {sequential}, parallel {parallel}")]
    OutcomeMismatch { sequential: &'static str, parallel: &'static str },

    #[error("invalid value {value:?} for {key}")]
    InvalidConfig { key: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;
