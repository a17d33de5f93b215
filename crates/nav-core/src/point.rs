//! Packed tile coordinates.
//!
//! # Encoding
//!
//! The whole world grid fits in one `u32`:
//!
//! ```text
//! bit  0..14   x      (14 bits, 0–16383)
//! bit 14..29   y      (15 bits, 0–32767)
//! bit 29..32   plane  ( 3 bits, 0–7)
//! ```
//!
//! A search touches millions of tiles, so nodes are passed around as this
//! single integer and only unpacked at API edges.  The offset helpers
//! ([`PackedPoint::dx`], [`dy`](PackedPoint::dy), [`dxy`](PackedPoint::dxy))
//! add directly to the packed value instead of decode/re-encode — one add
//! per neighbor in the expansion hot loop.
//!
//! # Local address space
//!
//! x values above [`SCENE_X_MIN`] never occur in the static world and are
//! reserved for instance-relative coordinates (see `nav-collision`).

use std::fmt;

/// Highest valid x coordinate (14 bits).
pub const MAX_X: u16 = (1 << 14) - 1;
/// Highest valid y coordinate (15 bits).
pub const MAX_Y: u16 = (1 << 15) - 1;
/// Highest valid plane (3 bits).
pub const MAX_PLANE: u8 = 7;

/// x values strictly above this mark the instance-local address space.
pub const SCENE_X_MIN: u16 = 6000;

const Y_SHIFT: u32 = 14;
const PLANE_SHIFT: u32 = 29;
const X_MASK: u32 = 0x3FFF;
const Y_MASK: u32 = 0x7FFF;

// ── PackedPoint ───────────────────────────────────────────────────────────────

/// A tile coordinate packed into a single `u32`.
///
/// The inner value is `pub` so dense collections can key on the raw bits;
/// callers should prefer the accessors.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackedPoint(pub u32);

impl PackedPoint {
    /// Pack `(x, y, plane)`.
    ///
    /// Out-of-range components are rejected by a debug assertion and masked
    /// in release builds.
    #[inline]
    pub fn new(x: u16, y: u16, plane: u8) -> PackedPoint {
        debug_assert!(x <= MAX_X, "x {x} exceeds {MAX_X}");
        debug_assert!(y <= MAX_Y, "y {y} exceeds {MAX_Y}");
        debug_assert!(plane <= MAX_PLANE, "plane {plane} exceeds {MAX_PLANE}");
        PackedPoint(
            (x as u32 & X_MASK)
                | ((y as u32 & Y_MASK) << Y_SHIFT)
                | ((plane as u32 & 7) << PLANE_SHIFT),
        )
    }

    #[inline]
    pub fn x(self) -> u16 {
        (self.0 & X_MASK) as u16
    }

    #[inline]
    pub fn y(self) -> u16 {
        ((self.0 >> Y_SHIFT) & Y_MASK) as u16
    }

    #[inline]
    pub fn plane(self) -> u8 {
        ((self.0 >> PLANE_SHIFT) & 7) as u8
    }

    /// Unpack into a [`Coord`].
    #[inline]
    pub fn coord(self) -> Coord {
        Coord { x: self.x(), y: self.y(), plane: self.plane() }
    }

    /// `true` if this point lies in the reserved instance-local address
    /// space (x > [`SCENE_X_MIN`]).
    #[inline]
    pub fn is_scene_local(self) -> bool {
        self.x() > SCENE_X_MIN
    }

    /// Shift x by `n` without unpacking.
    ///
    /// The shift must not move x outside its field; debug builds assert
    /// this, release builds keep the bare add.
    #[inline]
    pub fn dx(self, n: i32) -> PackedPoint {
        debug_assert!(
            (0..=MAX_X as i32).contains(&(self.x() as i32 + n)),
            "x offset {n} overflows the x field at {self}",
        );
        PackedPoint(self.0.wrapping_add(n as u32))
    }

    /// Shift y by `n` without unpacking.  Same field caveat as [`dx`](Self::dx).
    #[inline]
    pub fn dy(self, n: i32) -> PackedPoint {
        debug_assert!(
            (0..=MAX_Y as i32).contains(&(self.y() as i32 + n)),
            "y offset {n} overflows the y field at {self}",
        );
        PackedPoint(self.0.wrapping_add((n as u32) << Y_SHIFT))
    }

    /// Shift x and y in one add.  Same field caveats as [`dx`](Self::dx).
    #[inline]
    pub fn dxy(self, dx: i32, dy: i32) -> PackedPoint {
        debug_assert!((0..=MAX_X as i32).contains(&(self.x() as i32 + dx)));
        debug_assert!((0..=MAX_Y as i32).contains(&(self.y() as i32 + dy)));
        PackedPoint(
            self.0
                .wrapping_add(dx as u32)
                .wrapping_add((dy as u32) << Y_SHIFT),
        )
    }
}

impl From<Coord> for PackedPoint {
    #[inline]
    fn from(c: Coord) -> PackedPoint {
        PackedPoint::new(c.x, c.y, c.plane)
    }
}

impl fmt::Display for PackedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x(), self.y(), self.plane())
    }
}

// ── Coord ─────────────────────────────────────────────────────────────────────

/// An unpacked tile coordinate.
///
/// Used at API edges and wherever arithmetic on individual components is
/// clearer than bit games (instance translation, tests, demos).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: u16,
    pub y: u16,
    pub plane: u8,
}

impl Coord {
    #[inline]
    pub fn new(x: u16, y: u16, plane: u8) -> Coord {
        Coord { x, y, plane }
    }

    /// Pack into a [`PackedPoint`].
    #[inline]
    pub fn packed(self) -> PackedPoint {
        PackedPoint::new(self.x, self.y, self.plane)
    }

    /// Chebyshev distance: `max(|Δx|, |Δy|)`.
    ///
    /// The natural walking metric on this grid, since all eight directional
    /// moves cost one step.  Plane differences are ignored.
    #[inline]
    pub fn chebyshev(self, other: Coord) -> u16 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        dx.max(dy)
    }
}

impl From<PackedPoint> for Coord {
    #[inline]
    fn from(p: PackedPoint) -> Coord {
        p.coord()
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.plane)
    }
}
