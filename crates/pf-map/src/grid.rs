//! Rectangular obstacle grid.
//!
//! # Data layout
//!
//! Cells are stored row-major in a flat `Vec<bool>` (`true` = passable).
//! A cell's `NodeId` is its position in that vector:
//!
//! ```text
//! id = y * width + x        x = id % width        y = id / width
//! ```
//!
//! so the node arena the search allocates lines up one-to-one with the cell
//! array, and neighbour lookups are index arithmetic with no hashing.
//!
//! # Endpoints
//!
//! Start and end are optional bindings.  Both setters validate bounds and
//! passability, and a bound endpoint cannot be blocked afterwards, so a
//! `GridMap` never holds an endpoint on an impassable cell.

use pf_core::{Coord, Direction, Endpoint, Map, NodeId, PfError, PfResult};

// ── GridMap ───────────────────────────────────────────────────────────────────

/// A `width × height` grid of passable/blocked cells with optional start and
/// end designations.
///
/// # Example
///
/// ```
/// use pf_core::Map;
/// use pf_map::GridMap;
///
/// let mut map = GridMap::new(3, 3).unwrap();
/// map.set_passable(1, 1, false).unwrap();
/// map.set_start(0, 0).unwrap();
/// map.set_end(2, 2).unwrap();
/// assert_eq!(map.node_count(), 9);
/// assert_eq!(map.passable_count(), 8);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridMap {
    width: u32,
    height: u32,
    passable: Vec<bool>,
    start: Option<NodeId>,
    end: Option<NodeId>,
}

impl GridMap {
    /// Construct an all-passable grid with no endpoints bound.
    ///
    /// Fails with [`PfError::InvalidDimensions`] if either side is zero or
    /// the cell count does not fit a `NodeId`.
    pub fn new(width: u32, height: u32) -> PfResult<Self> {
        let cells = match width.checked_mul(height) {
            Some(n) if n > 0 => n,
            _ => return Err(PfError::InvalidDimensions { width, height }),
        };
        Ok(Self {
            width,
            height,
            passable: vec![true; cells as usize],
            start: None,
            end: None,
        })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    // ── Cell lookup ───────────────────────────────────────────────────────

    /// `NodeId` of the cell at `(x, y)`.
    pub fn node_at(&self, x: u32, y: u32) -> PfResult<NodeId> {
        if !self.contains(x, y) {
            return Err(PfError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.id_unchecked(Coord::new(x, y)))
    }

    /// Coordinates of `node`.  `node` must come from this map.
    #[inline]
    pub fn coord(&self, node: NodeId) -> Coord {
        debug_assert!(node.index() < self.passable.len());
        Coord::new(node.0 % self.width, node.0 / self.width)
    }

    pub fn is_passable(&self, x: u32, y: u32) -> PfResult<bool> {
        let id = self.node_at(x, y)?;
        Ok(self.passable[id.index()])
    }

    /// Number of passable cells.
    pub fn passable_count(&self) -> usize {
        self.passable.iter().filter(|&&p| p).count()
    }

    /// Iterator over the coordinates of every passable cell, row-major.
    pub fn open_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.passable
            .iter()
            .enumerate()
            .filter(|&(_, &p)| p)
            .map(|(i, _)| self.coord(NodeId(i as u32)))
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Mark a cell passable or blocked.
    ///
    /// Blocking a cell currently bound as start or end fails with
    /// [`PfError::Blocked`] and leaves the grid unchanged.
    pub fn set_passable(&mut self, x: u32, y: u32, passable: bool) -> PfResult<()> {
        let id = self.node_at(x, y)?;
        if !passable && (self.start == Some(id) || self.end == Some(id)) {
            return Err(PfError::Blocked { x, y });
        }
        self.passable[id.index()] = passable;
        Ok(())
    }

    /// Bind the start endpoint to `(x, y)`.
    pub fn set_start(&mut self, x: u32, y: u32) -> PfResult<()> {
        self.start = Some(self.endpoint_at(x, y)?);
        Ok(())
    }

    /// Bind the end endpoint to `(x, y)`.
    pub fn set_end(&mut self, x: u32, y: u32) -> PfResult<()> {
        self.end = Some(self.endpoint_at(x, y)?);
        Ok(())
    }

    /// Coordinates of the bound start, if any.
    pub fn start(&self) -> Option<Coord> {
        self.start.map(|id| self.coord(id))
    }

    /// Coordinates of the bound end, if any.
    pub fn end(&self) -> Option<Coord> {
        self.end.map(|id| self.coord(id))
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn endpoint_at(&self, x: u32, y: u32) -> PfResult<NodeId> {
        let id = self.node_at(x, y)?;
        if !self.passable[id.index()] {
            return Err(PfError::Blocked { x, y });
        }
        Ok(id)
    }

    #[inline]
    fn id_unchecked(&self, c: Coord) -> NodeId {
        NodeId(c.y * self.width + c.x)
    }
}

// ── Map impl ──────────────────────────────────────────────────────────────────

impl Map for GridMap {
    fn node_count(&self) -> usize {
        self.passable.len()
    }

    fn start_node(&self) -> PfResult<NodeId> {
        self.start.ok_or(PfError::EndpointUnset(Endpoint::Start))
    }

    fn end_node(&self) -> PfResult<NodeId> {
        self.end.ok_or(PfError::EndpointUnset(Endpoint::End))
    }

    /// Up, down, left, right; cells off the grid or blocked are skipped.
    fn adjacent_nodes(&self, node: NodeId, out: &mut Vec<NodeId>) {
        let here = self.coord(node);
        for dir in Direction::ALL {
            let Some(next) = here.step(dir) else { continue };
            if !self.contains(next.x, next.y) {
                continue;
            }
            let id = self.id_unchecked(next);
            if self.passable[id.index()] {
                out.push(id);
            }
        }
    }

    /// Manhattan distance.
    #[inline]
    fn heuristic(&self, from: NodeId, to: NodeId) -> u32 {
        self.coord(from).manhattan(self.coord(to))
    }
}
