//! Open set: a binary heap of discovered, not-yet-closed nodes.
//!
//! # Ordering
//!
//! Entries pop in this order:
//!
//! 1. lowest `f = g + h`;
//! 2. then lowest `h` (the node closest to the goal);
//! 3. then the most recently pushed entry (LIFO).
//!
//! Rule 3 mirrors popping the last element of a stably sorted array, the
//! classic list-based open set.  Every push gets a fresh sequence number, so
//! the order is total and a search is reproducible run to run.
//!
//! # Lazy deletion
//!
//! Lowering a node's `g` pushes a second entry instead of re-keying the old
//! one.  The caller decides staleness on pop by comparing the entry's `g`
//! against the node's current state; `BinaryHeap` has no decrease-key.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use pf_core::NodeId;

/// One heap entry.  `g` is a snapshot taken at push time.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OpenEntry {
    pub node: NodeId,
    pub g: u32,
    pub h: u32,
    seq: u64,
}

impl OpenEntry {
    /// `g + h`, widened so it cannot overflow.
    #[inline]
    pub fn f(&self) -> u64 {
        self.g as u64 + self.h as u64
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: "greater" pops first, so the cost
        // comparisons are flipped.
        other
            .f()
            .cmp(&self.f())
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue over [`OpenEntry`].
#[derive(Debug, Default)]
pub struct OpenSet {
    heap: BinaryHeap<OpenEntry>,
    next_seq: u64,
}

impl OpenSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: NodeId, g: u32, h: u32) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(OpenEntry { node, g, h, seq });
    }

    /// Remove and return the best entry, stale or not.
    pub fn pop(&mut self) -> Option<OpenEntry> {
        self.heap.pop()
    }

    /// Drop all entries and restart the sequence, keeping the allocation.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.next_seq = 0;
    }

    /// Heap entries, including superseded ones.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
