//! The map abstraction consumed by the search.
//!
//! # Pluggability
//!
//! `pf-search` is generic over [`Map`], so other topologies (hex grids,
//! portal graphs, test doubles) can be searched without touching the
//! algorithm.  The concrete rectangular grid lives in `pf-map`.
//!
//! # Contract
//!
//! - Node ids are dense: every id handed out is `< node_count()`.
//! - `adjacent_nodes` is a pure read and enumerates neighbours in a fixed
//!   order, so repeated searches break ties identically.
//! - Edge cost is exactly 1 per step; `heuristic` must never overestimate the
//!   remaining step count and must be consistent (`h(a) <= 1 + h(b)` for every
//!   edge `a → b`), otherwise the returned path is not guaranteed optimal.

use crate::{NodeId, PfResult};

/// Read-only view of a searchable map.
///
/// The mutation surface (binding start/end, toggling cells) belongs to the
/// concrete type, not to this trait: the search never mutates the map.
pub trait Map {
    /// Size of the node arena.  Search state is allocated to this length.
    fn node_count(&self) -> usize;

    /// The designated start node.
    ///
    /// Returns [`PfError::EndpointUnset`](crate::PfError::EndpointUnset) if
    /// no start has been bound.
    fn start_node(&self) -> PfResult<NodeId>;

    /// The designated end node.  Same error contract as [`start_node`](Self::start_node).
    fn end_node(&self) -> PfResult<NodeId>;

    /// Append the passable neighbours of `node` to `out`.
    ///
    /// Takes a caller-owned buffer so the search's inner loop does not
    /// allocate per expansion.  Implementations must not clear `out`.
    fn adjacent_nodes(&self, node: NodeId, out: &mut Vec<NodeId>);

    /// Admissible, consistent estimate of the steps from `from` to `to`.
    fn heuristic(&self, from: NodeId, to: NodeId) -> u32;
}

impl<M: Map + ?Sized> Map for &M {
    fn node_count(&self) -> usize {
        (**self).node_count()
    }

    fn start_node(&self) -> PfResult<NodeId> {
        (**self).start_node()
    }

    fn end_node(&self) -> PfResult<NodeId> {
        (**self).end_node()
    }

    fn adjacent_nodes(&self, node: NodeId, out: &mut Vec<NodeId>) {
        (**self).adjacent_nodes(node, out)
    }

    fn heuristic(&self, from: NodeId, to: NodeId) -> u32 {
        (**self).heuristic(from, to)
    }
}
