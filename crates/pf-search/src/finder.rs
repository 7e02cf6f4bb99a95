//! A* search.
//!
//! # State ownership
//!
//! The map owns node identity and passability and is only ever borrowed
//! immutably.  Everything a run mutates (`g`, `h`, parent links, open/closed
//! status) lives in a flat arena indexed by [`NodeId`] inside the
//! [`PathFinder`], and is reset at the start of every run.  Parent links are
//! `Option<NodeId>` indices, not references.
//!
//! Consequences:
//!
//! - Running the same finder twice on an unchanged map yields identical paths.
//! - Any number of finders can search one shared map concurrently.
//! - A single finder is `&mut`-exclusive for the duration of a run.
//!
//! # Cost model
//!
//! Every step costs exactly 1.  With an admissible, consistent heuristic a
//! closed node's `g` is final, so closed neighbours are skipped outright and
//! the first time the end node is closed its path is a shortest one.
//!
//! # Complexity
//!
//! O(V log V) time and O(V) memory for V = `map.node_count()`.  There is no
//! iteration cap or cancellation: on very large maps with an unreachable goal
//! the search runs until every reachable node has been closed.

use log::{debug, trace};

use pf_core::{Map, NodeId, PfResult};

use crate::Path;
use crate::open_set::OpenSet;

// ── Per-run node state ────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
enum Status {
    #[default]
    Unseen,
    Open,
    Closed,
}

#[derive(Copy, Clone, Debug, Default)]
struct NodeState {
    /// Steps from start along the best known path.
    g: u32,
    /// Heuristic to the end; set once, on discovery.
    h: u32,
    parent: Option<NodeId>,
    status: Status,
}

// ── SearchStats ───────────────────────────────────────────────────────────────

/// Counters for the most recent run of a [`PathFinder`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes whose neighbours were enumerated.
    pub expanded: usize,
    /// Nodes inserted into the open set for the first time.
    pub discovered: usize,
    /// Open nodes whose `g` was lowered through a cheaper parent.
    pub improved: usize,
    /// `true` if the end node was reached.
    pub found: bool,
}

// ── PathFinder ────────────────────────────────────────────────────────────────

/// Reusable A* engine.
///
/// Holding on to a `PathFinder` between runs keeps its arena, heap, and
/// neighbour buffer allocated.  For one-off searches use [`generate_roads`].
#[derive(Debug, Default)]
pub struct PathFinder {
    nodes: Vec<NodeState>,
    open: OpenSet,
    neighbours: Vec<NodeId>,
    stats: SearchStats,
}

impl PathFinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counters from the last run that got past endpoint validation.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Find a shortest path from `map.start_node()` to `map.end_node()`.
    ///
    /// Returns the nodes end → start, or an empty [`Path`] if the end is
    /// unreachable.  Fails with
    /// [`PfError::EndpointUnset`](pf_core::PfError::EndpointUnset) before any
    /// search state is touched if either endpoint is missing.
    pub fn generate_roads<M: Map + ?Sized>(&mut self, map: &M) -> PfResult<Path> {
        let start = map.start_node()?;
        let end = map.end_node()?;

        self.reset(map.node_count());

        let mut current = start;
        self.nodes[start.index()] = NodeState { status: Status::Closed, ..NodeState::default() };

        while current != end {
            self.stats.expanded += 1;
            self.expand(map, current, end);

            let Some(next) = self.pop_open() else {
                break;
            };
            current = next;
            self.nodes[current.index()].status = Status::Closed;
        }

        if current != end {
            debug!(
                "astar: {start} -> {end}: no path ({} expanded, {} discovered)",
                self.stats.expanded, self.stats.discovered
            );
            return Ok(Path::empty());
        }

        self.stats.found = true;
        let path = self.reconstruct(end);
        debug!(
            "astar: {start} -> {end}: {} steps ({} expanded, {} discovered, {} improved)",
            path.steps(),
            self.stats.expanded,
            self.stats.discovered,
            self.stats.improved
        );
        Ok(path)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn reset(&mut self, node_count: usize) {
        self.nodes.clear();
        self.nodes.resize(node_count, NodeState::default());
        self.open.clear();
        self.neighbours.clear();
        self.stats = SearchStats::default();
    }

    /// Relax every neighbour of `current` (already closed).
    fn expand<M: Map + ?Sized>(&mut self, map: &M, current: NodeId, end: NodeId) {
        let g_next = self.nodes[current.index()].g + 1;
        trace!("astar: expand {current} g={}", g_next - 1);

        self.neighbours.clear();
        map.adjacent_nodes(current, &mut self.neighbours);

        for &n in &self.neighbours {
            let state = &mut self.nodes[n.index()];
            match state.status {
                Status::Closed => {}
                Status::Open => {
                    if g_next < state.g {
                        state.g = g_next;
                        state.parent = Some(current);
                        self.open.push(n, state.g, state.h);
                        self.stats.improved += 1;
                    }
                }
                Status::Unseen => {
                    *state = NodeState {
                        g: g_next,
                        h: map.heuristic(n, end),
                        parent: Some(current),
                        status: Status::Open,
                    };
                    self.open.push(n, state.g, state.h);
                    self.stats.discovered += 1;
                }
            }
        }
    }

    /// Next live open node, discarding entries superseded by a cheaper `g`.
    fn pop_open(&mut self) -> Option<NodeId> {
        while let Some(entry) = self.open.pop() {
            let state = &self.nodes[entry.node.index()];
            if state.status == Status::Open && state.g == entry.g {
                return Some(entry.node);
            }
        }
        None
    }

    /// Walk parent links from `end` to the parentless start.
    fn reconstruct(&self, end: NodeId) -> Path {
        let mut nodes = Vec::with_capacity(self.nodes[end.index()].g as usize + 1);
        let mut cur = Some(end);
        while let Some(node) = cur {
            nodes.push(node);
            cur = self.nodes[node.index()].parent;
        }
        Path::from_end_to_start(nodes)
    }
}

/// One-off search with a fresh [`PathFinder`].
pub fn generate_roads<M: Map + ?Sized>(map: &M) -> PfResult<Path> {
    PathFinder::new().generate_roads(map)
}
