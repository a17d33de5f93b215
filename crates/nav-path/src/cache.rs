//! The visited/parent cache — the BFS tree and the blacklist.
//!
//! First-writer-wins is the load-bearing rule: the first `put` for a point
//! is the shortest-order discovery, every later attempt is a longer or
//! equal path and is refused.  That single rule gives the search its tree
//! shape, prevents cycles, and makes pre-seeding work — blacklisted points
//! and start nodes are inserted before expansion begins, so expansion can
//! never claim them.

use rustc_hash::FxHashMap;

use nav_core::PackedPoint;

/// Parent link of a visited point.
///
/// `Root` and `Blacklisted` are distinct on purpose: both terminate path
/// reconstruction and both refuse later writers, but only `Root` marks a
/// legitimate search origin.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Parent {
    /// A seed of the search (agent position or teleport destination).
    Root,
    /// Pre-seeded as forbidden; never expanded into.
    Blacklisted,
    /// Reached by a step or transport from this point.
    Step(PackedPoint),
}

/// Dense point→parent map for one search session.
#[derive(Default)]
pub struct VisitedCache {
    cache: FxHashMap<PackedPoint, Parent>,
}

impl VisitedCache {
    pub fn new() -> VisitedCache {
        let mut cache = FxHashMap::default();
        cache.reserve(20_000);
        VisitedCache { cache }
    }

    /// Record `point → parent` unless `point` was already claimed.
    ///
    /// Returns `true` if the write happened.
    #[inline]
    pub fn put(&mut self, point: PackedPoint, parent: Parent) -> bool {
        match self.cache.entry(point) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(v) => {
                v.insert(parent);
                true
            }
        }
    }

    /// Mark `point` as a search origin.
    #[inline]
    pub fn seed(&mut self, point: PackedPoint) -> bool {
        self.put(point, Parent::Root)
    }

    /// Mark `point` as forbidden.  Must happen before expansion starts.
    #[inline]
    pub fn blacklist(&mut self, point: PackedPoint) -> bool {
        self.put(point, Parent::Blacklisted)
    }

    #[inline]
    pub fn get(&self, point: PackedPoint) -> Option<Parent> {
        self.cache.get(&point).copied()
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Reconstruct the route ending at `point`: walk parent links back to a
    /// root, then return the sequence root→`point` inclusive.
    pub fn path(&self, point: PackedPoint) -> Vec<PackedPoint> {
        let mut path = vec![point];
        let mut cur = point;
        while let Some(Parent::Step(prev)) = self.get(cur) {
            path.push(prev);
            cur = prev;
        }
        path.reverse();
        path
    }
}
