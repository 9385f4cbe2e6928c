use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tilepath_core::Point;

/// Heap entry, ordered so that `BinaryHeap` (a max-heap) pops the lowest
/// priority first. Equal priorities pop the smallest point first.
#[derive(Clone, Copy, Debug)]
struct Entry {
    priority: f64,
    pos: Point,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.pos.cmp(&self.pos))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// Min-priority queue of grid points.
///
/// A point may be queued any number of times. Nothing is ever removed
/// except by [`get`](Frontier::get): consumers are expected to discard the
/// stale copies themselves.
#[derive(Clone, Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
}

impl Frontier {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no entry is queued.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of queued entries, stale ones included.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Queue `pos` with `priority`.
    pub fn put(&mut self, pos: Point, priority: f64) {
        self.heap.push(Entry { priority, pos });
    }

    /// Remove and return the lowest-priority point.
    pub fn get(&mut self) -> Option<Point> {
        self.heap.pop().map(|e| e.pos)
    }
}
