//! Grid coordinates and the four cardinal step directions.
//!
//! `y` grows downward: "up" is `y - 1`, "down" is `y + 1`.  Coordinates are
//! unsigned, so stepping off the top or left edge yields `None` rather than
//! wrapping.

use std::fmt;

/// Immutable `(x, y)` identity of a grid cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: u32,
    pub y: u32,
}

impl Coord {
    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// `|Δx| + |Δy|`, the exact step count between two cells on an
    /// obstacle-free 4-connected grid.
    #[inline]
    pub fn manhattan(self, other: Coord) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// `true` if `other` differs by exactly one in exactly one axis.
    #[inline]
    pub fn is_adjacent(self, other: Coord) -> bool {
        self.manhattan(other) == 1
    }

    /// The neighbouring coordinate in `dir`, or `None` if that would step
    /// below zero or overflow.  Upper bounds are the map's business.
    #[inline]
    pub fn step(self, dir: Direction) -> Option<Coord> {
        match dir {
            Direction::Up => self.y.checked_sub(1).map(|y| Coord::new(self.x, y)),
            Direction::Down => self.y.checked_add(1).map(|y| Coord::new(self.x, y)),
            Direction::Left => self.x.checked_sub(1).map(|x| Coord::new(x, self.y)),
            Direction::Right => self.x.checked_add(1).map(|x| Coord::new(x, self.y)),
        }
    }
}

impl From<(u32, u32)> for Coord {
    fn from((x, y): (u32, u32)) -> Self {
        Coord::new(x, y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// Cardinal direction of a single grid step.  No diagonals.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Neighbour enumeration order.  Adjacency queries must follow it so
    /// tie-breaks in the search are reproducible.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}
