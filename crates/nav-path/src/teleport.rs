//! Teleports: long-range, usability-gated jumps.
//!
//! Unlike transports, a teleport has no origin tile — the agent can cast
//! it from wherever it stands, which is why teleport destinations become
//! extra *start* seeds of the multi-source search rather than graph edges.
//! The catalog evaluates usability (runes, level, unlocks…) against the
//! current world state and returns only teleports the agent could use
//! right now; it is queried fresh per search.

use nav_core::PackedPoint;

/// A currently-usable teleport.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Teleport {
    pub destination: PackedPoint,
    /// Display name, carried through to the route metadata so the caller
    /// knows which teleport to actuate.
    pub name: String,
}

impl Teleport {
    pub fn new(destination: PackedPoint, name: impl Into<String>) -> Teleport {
        Teleport { destination, name: name.into() }
    }
}

/// Source of the currently-usable teleports.
pub trait TeleportCatalog {
    fn teleports(&self) -> Vec<Teleport>;
}

impl TeleportCatalog for [Teleport] {
    fn teleports(&self) -> Vec<Teleport> {
        self.to_vec()
    }
}

impl<const N: usize> TeleportCatalog for [Teleport; N] {
    fn teleports(&self) -> Vec<Teleport> {
        self.to_vec()
    }
}

impl TeleportCatalog for Vec<Teleport> {
    fn teleports(&self) -> Vec<Teleport> {
        self.clone()
    }
}
