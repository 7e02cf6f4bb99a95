//! Strongly typed node identifier.
//!
//! `NodeId` is `Copy + Ord + Hash` so it can be used as a map key or sorted
//! without ceremony.  The inner integer is `pub` to allow direct indexing into
//! per-run search arenas, but callers should prefer `.index()` for clarity.

use std::fmt;

/// Index of a node in a map's dense node arena (`0..map.node_count()`).
///
/// For a rectangular grid the id is `y * width + x`, but the search never
/// relies on that layout.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u32);

impl NodeId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl From<NodeId> for usize {
    #[inline(always)]
    fn from(id: NodeId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for NodeId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<NodeId, Self::Error> {
        u32::try_from(n).map(NodeId)
    }
}
