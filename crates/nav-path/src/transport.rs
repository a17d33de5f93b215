//! Scripted transports: doors, boats, ladders, shortcuts.
//!
//! A transport is a fixed-duration connector between two tiles that are
//! not grid-adjacent.  Which transports exist can change between searches
//! (quest progress, unlocked shortcuts), so the origin→edges graph is
//! rebuilt from the [`TransportCatalog`] collaborator at the start of
//! every search and never mutated during one.

use rustc_hash::FxHashMap;

use nav_core::PackedPoint;

/// One scripted connector as described by the catalog.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transport {
    pub origin: PackedPoint,
    pub destination: PackedPoint,
    /// Base traversal time in game ticks.
    pub duration: u32,
}

/// A transport as stored in the per-search graph (origin implicit in the
/// map key).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct TransportEdge {
    pub destination: PackedPoint,
    pub duration: u32,
}

/// Source of the currently-available transports.
pub trait TransportCatalog {
    fn transports(&self) -> Vec<Transport>;
}

impl TransportCatalog for [Transport] {
    fn transports(&self) -> Vec<Transport> {
        self.to_vec()
    }
}

impl<const N: usize> TransportCatalog for [Transport; N] {
    fn transports(&self) -> Vec<Transport> {
        self.to_vec()
    }
}

impl TransportCatalog for Vec<Transport> {
    fn transports(&self) -> Vec<Transport> {
        self.clone()
    }
}

// ── TransportGraph ────────────────────────────────────────────────────────────

/// Per-search origin→edges mapping.
#[derive(Default)]
pub struct TransportGraph {
    edges: FxHashMap<PackedPoint, Vec<TransportEdge>>,
}

impl TransportGraph {
    pub fn new() -> TransportGraph {
        TransportGraph::default()
    }

    /// Drop the previous mapping and rebuild it from the catalog.
    pub fn refresh(&mut self, catalog: &(impl TransportCatalog + ?Sized)) {
        self.edges.clear();
        for t in catalog.transports() {
            self.edges
                .entry(t.origin)
                .or_default()
                .push(TransportEdge { destination: t.destination, duration: t.duration });
        }
    }

    /// All transport edges leaving `origin` (empty if none).
    #[inline]
    pub fn edges_from(&self, origin: PackedPoint) -> &[TransportEdge] {
        self.edges.get(&origin).map_or(&[], Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
