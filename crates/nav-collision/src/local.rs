//! Instance-local collision snapshot.
//!
//! While the agent is inside an instanced region the global map is useless:
//! instance tiles live in the reserved local address space (x >
//! [`nav_core::point::SCENE_X_MIN`]) and their passability exists only in
//! the live scene.  The world-state provider captures that scene as a
//! `LocalCollisionMap` at the start of a search; the snapshot never goes
//! stale mid-search and carries no lazy-load race.
//!
//! Queries are directional blocked-predicates rather than a whole-tile
//! flags byte, one per compass direction, because scene collision is
//! naturally expressed per movement direction.

use nav_core::{Dir, PackedPoint, TileFlags};

use crate::CollisionQuery;

/// A scene-relative passability snapshot for one instanced region.
#[derive(Clone)]
pub struct LocalCollisionMap {
    /// World-space coordinate of the snapshot's south-west corner on plane 0.
    base_x: u16,
    base_y: u16,
    width: u16,
    height: u16,
    planes: u8,
    /// One flags byte per tile, plane-major then row-major.
    flags: Vec<u8>,
}

impl LocalCollisionMap {
    /// Wrap a captured scene.
    ///
    /// `flags.len()` must equal `planes * height * width`.
    pub fn new(
        base_x: u16,
        base_y: u16,
        width: u16,
        height: u16,
        planes: u8,
        flags: Vec<u8>,
    ) -> LocalCollisionMap {
        assert_eq!(
            flags.len(),
            planes as usize * height as usize * width as usize,
            "flags length does not match snapshot dimensions",
        );
        LocalCollisionMap { base_x, base_y, width, height, planes, flags }
    }

    #[inline]
    fn tile(&self, x: u16, y: u16, plane: u8) -> Option<TileFlags> {
        if plane >= self.planes || x < self.base_x || y < self.base_y {
            return None;
        }
        let lx = (x - self.base_x) as usize;
        let ly = (y - self.base_y) as usize;
        if lx >= self.width as usize || ly >= self.height as usize {
            return None;
        }
        let idx = (plane as usize * self.height as usize + ly) * self.width as usize + lx;
        Some(TileFlags(self.flags[idx]))
    }

    /// `true` if a step from `(x, y, plane)` in direction `d` is blocked.
    ///
    /// Anything outside the snapshot is blocked.
    #[inline]
    pub fn blocked(&self, d: Dir, x: u16, y: u16, plane: u8) -> bool {
        match self.tile(x, y, plane) {
            Some(f) => !f.allows(d),
            None => true,
        }
    }
}

impl CollisionQuery for LocalCollisionMap {
    #[inline]
    fn walkable(&self, p: PackedPoint) -> bool {
        matches!(self.tile(p.x(), p.y(), p.plane()), Some(f) if !f.is_blocked())
    }
}
