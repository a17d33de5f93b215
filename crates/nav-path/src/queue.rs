//! `HybridQueue` — a FIFO frontier that can also take delayed entries.
//!
//! # Why this exists
//!
//! The search is a plain BFS: grid steps cost one queue position each, so
//! a `VecDeque` is the right frontier and dequeue order equals distance
//! order.  Transports break that — a boat is worth many walking steps —
//! but switching the whole frontier to a cost-keyed priority queue would
//! tax the millions of unit-cost grid entries to serve a handful of
//! transport entries.
//!
//! Instead, a delayed entry is parked in a small side heap keyed by its
//! **release position**: the count of dequeues after which it becomes
//! visible.  Unit enqueues stay O(1); the side heap holds only transport
//! destinations, so its log factor is negligible.
//!
//! # Draining
//!
//! If the FIFO runs dry while delayed entries are still future-dated, the
//! earliest one is released immediately — the queue always drains, and
//! relative delay order is preserved.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use nav_core::PackedPoint;

/// FIFO traversal queue with delayed insertion.
pub struct HybridQueue {
    ready: VecDeque<PackedPoint>,
    /// `(release position, raw point bits)` — raw bits as the secondary key
    /// give deterministic tie-breaking.
    delayed: BinaryHeap<Reverse<(u64, u32)>>,
    /// Total dequeues so far; the clock that release positions are measured
    /// against.
    popped: u64,
    capacity: usize,
}

impl HybridQueue {
    /// A queue intended to hold at most `capacity` pending entries.
    ///
    /// The bound is advisory (enforced by a debug assertion): the planner's
    /// visited-node limit keeps the queue from growing past it in practice,
    /// and storage grows on demand rather than being pre-reserved.
    pub fn with_capacity(capacity: usize) -> HybridQueue {
        HybridQueue {
            ready: VecDeque::with_capacity(1024.min(capacity)),
            delayed: BinaryHeap::new(),
            popped: 0,
            capacity,
        }
    }

    /// Append at the frontier: visible after every currently-pending entry.
    #[inline]
    pub fn enqueue(&mut self, p: PackedPoint) {
        debug_assert!(self.len() < self.capacity, "queue capacity exceeded");
        self.ready.push_back(p);
    }

    /// Append `delay` effective positions deeper than a plain enqueue
    /// would.  `enqueue_delayed(p, 0)` behaves like `enqueue(p)`.
    pub fn enqueue_delayed(&mut self, p: PackedPoint, delay: u32) {
        debug_assert!(self.len() < self.capacity, "queue capacity exceeded");
        let release = self.popped + self.len() as u64 + delay as u64;
        self.delayed.push(Reverse((release, p.0)));
    }

    /// Pop the next visible point, or `None` when fully drained.
    pub fn dequeue(&mut self) -> Option<PackedPoint> {
        if let Some(&Reverse((release, bits))) = self.delayed.peek() {
            if release <= self.popped || self.ready.is_empty() {
                self.delayed.pop();
                self.popped += 1;
                return Some(PackedPoint(bits));
            }
        }
        let p = self.ready.pop_front()?;
        self.popped += 1;
        Some(p)
    }

    /// Pending entries only — the delay formula's notion of queue depth.
    #[inline]
    pub fn len(&self) -> usize {
        self.ready.len() + self.delayed.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ready.is_empty() && self.delayed.is_empty()
    }
}
