//! Compass directions and per-tile passability flags.
//!
//! Each world tile carries one [`TileFlags`] byte with one bit per compass
//! direction; a set bit means a step in that direction is open.  Two byte
//! values double as fast paths: [`TileFlags::OPEN`] (all eight bits set)
//! and [`TileFlags::BLOCKED`] (none), letting the expansion loop skip the
//! per-direction tests on the vast majority of tiles.

use crate::point::PackedPoint;

// ── Dir ───────────────────────────────────────────────────────────────────────

/// One of the eight compass directions an agent can step in.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dir {
    West,
    East,
    South,
    North,
    SouthWest,
    SouthEast,
    NorthWest,
    NorthEast,
}

impl Dir {
    /// All eight directions, cardinals first — the expansion order.
    pub const ALL: [Dir; 8] = [
        Dir::West,
        Dir::East,
        Dir::South,
        Dir::North,
        Dir::SouthWest,
        Dir::SouthEast,
        Dir::NorthWest,
        Dir::NorthEast,
    ];

    /// The flag bit for this direction in a [`TileFlags`] byte.
    #[inline]
    pub fn bit(self) -> u8 {
        match self {
            Dir::West => 1 << 0,
            Dir::East => 1 << 1,
            Dir::South => 1 << 2,
            Dir::North => 1 << 3,
            Dir::SouthWest => 1 << 4,
            Dir::SouthEast => 1 << 5,
            Dir::NorthWest => 1 << 6,
            Dir::NorthEast => 1 << 7,
        }
    }

    /// The `(Δx, Δy)` of one step in this direction.
    #[inline]
    pub fn step(self) -> (i32, i32) {
        match self {
            Dir::West => (-1, 0),
            Dir::East => (1, 0),
            Dir::South => (0, -1),
            Dir::North => (0, 1),
            Dir::SouthWest => (-1, -1),
            Dir::SouthEast => (1, -1),
            Dir::NorthWest => (-1, 1),
            Dir::NorthEast => (1, 1),
        }
    }

    /// The neighbor of `p` one step in this direction.
    #[inline]
    pub fn neighbor(self, p: PackedPoint) -> PackedPoint {
        let (dx, dy) = self.step();
        p.dxy(dx, dy)
    }

    /// The direction pointing back where this one came from.
    #[inline]
    pub fn opposite(self) -> Dir {
        match self {
            Dir::West => Dir::East,
            Dir::East => Dir::West,
            Dir::South => Dir::North,
            Dir::North => Dir::South,
            Dir::SouthWest => Dir::NorthEast,
            Dir::SouthEast => Dir::NorthWest,
            Dir::NorthWest => Dir::SouthEast,
            Dir::NorthEast => Dir::SouthWest,
        }
    }
}

// ── TileFlags ─────────────────────────────────────────────────────────────────

/// Per-tile passability byte: one bit per [`Dir`], set = open.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileFlags(pub u8);

impl TileFlags {
    /// All eight directions open — the fast-path value for plain ground.
    pub const OPEN: TileFlags = TileFlags(0xFF);
    /// Fully blocked — also the value of any tile absent from the map.
    pub const BLOCKED: TileFlags = TileFlags(0x00);

    /// `true` if a step in direction `d` is open.
    #[inline]
    pub fn allows(self, d: Dir) -> bool {
        self.0 & d.bit() != 0
    }

    #[inline]
    pub fn is_open(self) -> bool {
        self == TileFlags::OPEN
    }

    #[inline]
    pub fn is_blocked(self) -> bool {
        self == TileFlags::BLOCKED
    }

    /// Flags with direction `d` open.
    #[inline]
    pub fn with(self, d: Dir) -> TileFlags {
        TileFlags(self.0 | d.bit())
    }

    /// Flags with direction `d` closed.
    #[inline]
    pub fn without(self, d: Dir) -> TileFlags {
        TileFlags(self.0 & !d.bit())
    }
}
