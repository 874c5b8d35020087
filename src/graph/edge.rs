use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Handle of an edge inside one [`WeightedGraph`](super::WeightedGraph).
///
/// Ids are assigned in lexicographic order of the normalized endpoints, so
/// comparing two ids compares the edges in the graph's canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

/// Stored form of an edge: endpoints as vertex indices with `lo < hi`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EdgeData<W> {
    pub lo: usize,
    pub hi: usize,
    pub weight: W,
    /// Index of this edge in the caller's input list.
    pub position: usize,
}
