//! Network-subsystem error type.

use thiserror::Error;

use ta_core::{CoreError, CrossingId, NodeId};

/// Errors produced by `ta-network`.
///
/// Construction errors (`DuplicateCrossing`, `UnknownCrossing`,
/// `EmptyNetwork`, `Parse`, `Io`) abort the build; there is no partial
/// graph.  `NoPath` and the lookup errors are local to one query.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("{0} appears more than once in the crossing table")]
    DuplicateCrossing(CrossingId),

    #[error("segment #{segment} references unknown {crossing}")]
    UnknownCrossing { segment: usize, crossing: CrossingId },

    #[error("no crossing could be assigned to an area; the street graph is empty")]
    EmptyNetwork,

    #[error("{0} could not be assigned to any area and was dropped")]
    Unresolved(CrossingId),

    #[error("no path from {from} to {to}")]
    NoPath { from: NodeId, to: NodeId },

    #[error("node {0} not found in street graph")]
    NodeNotFound(NodeId),

    #[error("{0} is not part of the street graph")]
    CrossingNotFound(CrossingId),

    #[error("table parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
