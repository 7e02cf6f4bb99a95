//! Search result.

use pf_core::NodeId;

/// The nodes of a shortest path, **end first**, start last.
///
/// The order is the one produced by walking parent links back from the goal;
/// use [`iter_from_start`](Self::iter_from_start) for travel order.  An empty
/// path means the end was unreachable, which is a normal outcome and not an
/// error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Path {
    nodes: Vec<NodeId>,
}

impl Path {
    /// The "no path" result.
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn from_end_to_start(nodes: Vec<NodeId>) -> Self {
        Self { nodes }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes, endpoints included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges walked: `len() - 1`, or 0 for an empty path.  With
    /// unit edge costs this is also the path cost.
    pub fn steps(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Nodes in end → start order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// The end node (first element).
    pub fn first(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    /// The start node (last element).
    pub fn last(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// Nodes in start → end order.
    pub fn iter_from_start(&self) -> impl DoubleEndedIterator<Item = NodeId> + '_ {
        self.nodes.iter().rev().copied()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }
}
