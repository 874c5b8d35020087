//! Error taxonomy shared by graph construction, tree exchange and enumeration.
//!
//! Every variant is a structural or contract violation detected at the call
//! that caused it. None of them are transient.
use thiserror::Error;

use crate::graph::EdgeId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No spanning tree exists.
    #[error("graph is disconnected ({components} components)")]
    Disconnected { components: usize },

    #[error("graph has no vertices")]
    EmptyGraph,

    /// `position` is the index of the offending entry in the input edge list.
    #[error("self-loop at input position {position}")]
    SelfLoop { position: usize },

    #[error("edge at input position {position} duplicates an earlier edge")]
    DuplicateEdge { position: usize },

    /// The weight does not compare equal to itself (NaN).
    #[error("weight at input position {position} is not comparable")]
    IncomparableWeight { position: usize },

    #[error("cannot replace {old} with {new}: {fault}")]
    InvalidReplacement {
        old: EdgeId,
        new: EdgeId,
        fault: ReplacementFault,
    },

    #[error("{edge} is both fixed and restricted")]
    InvalidPartition { edge: EdgeId },

    #[error("{edge} does not belong to this graph")]
    UnknownEdge { edge: EdgeId },

    #[error("vertex pair is not an edge of the graph")]
    NoSuchEdge,

    #[error("edge set is not a spanning tree of the graph")]
    NotASpanningTree,
}

/// Which precondition of a swap was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReplacementFault {
    #[error("old edge is not in the tree")]
    OldEdgeNotInTree,
    #[error("new edge is already in the tree")]
    NewEdgeInTree,
    #[error("new edge does not cross the fundamental cut of the old edge")]
    CutNotCrossed,
}
