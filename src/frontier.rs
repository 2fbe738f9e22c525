//! Min-priority frontier shared by UCS, GBFS and A*.
//!
//! Entries with equal priority come out in the order they went in.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::board::Board;

#[derive(Debug)]
struct Entry {
    priority: u32,
    seq: u64,
    board: Board,
    cost: u32,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// `BinaryHeap` is a max-heap, so both keys are reversed
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Frontier {
        Frontier::default()
    }

    /// Queues `board` reached at path cost `cost`, ordered by `priority`.
    pub fn push(&mut self, board: Board, priority: u32, cost: u32) {
        self.heap.push(Entry {
            priority,
            seq: self.next_seq,
            board,
            cost,
        });
        self.next_seq += 1;
    }

    /// Removes the lowest-priority board with its path cost.
    pub fn pop(&mut self) -> Option<(Board, u32)> {
        self.heap.pop().map(|e| (e.board, e.cost))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
