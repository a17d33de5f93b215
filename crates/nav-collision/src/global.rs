//! The static world collision map.
//!
//! # Data layout
//!
//! One [`TileFlags`] byte per tile, grouped into 64×64-tile **region
//! blocks** stored in a hash map keyed by `(plane, region_x, region_y)`.
//! The inhabited world covers a small fraction of the 16384×32768×8
//! coordinate space, so sparse region blocks beat a flat array by two
//! orders of magnitude in memory.  A tile whose region is absent is fully
//! blocked.
//!
//! # Resource format (`NAVC`)
//!
//! ```text
//! magic   b"NAVC"
//! version u8      (currently 1)
//! count   u32 LE  number of region records
//! record  u8 plane, u16 LE region_x, u16 LE region_y, 4096 flag bytes
//! ```
//!
//! The map is loaded once ([`GlobalCollisionMap::load`]) before any search
//! runs and never mutated afterwards; concurrent unsynchronized reads are
//! fine.  [`GlobalCollisionMapBuilder`] plus [`write_to`]
//! (GlobalCollisionMap::write_to) mint resources programmatically for
//! tests, demos, and offline map extraction.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use rustc_hash::FxHashMap;

use nav_core::{Dir, PackedPoint, TileFlags};

use crate::error::{CollisionError, CollisionResult};
use crate::CollisionQuery;

/// Region side length in tiles.
pub const REGION_SIZE: u16 = 64;
const REGION_AREA: usize = (REGION_SIZE as usize) * (REGION_SIZE as usize);

const MAGIC: [u8; 4] = *b"NAVC";
const VERSION: u8 = 1;

/// Highest region coordinate that fits the 10-bit key fields.
const MAX_REGION: u16 = (1 << 10) - 1;

/// `(plane, region_x, region_y)` packed into a map key.
#[inline]
fn region_key(x: u16, y: u16, plane: u8) -> u32 {
    let rx = (x / REGION_SIZE) as u32;
    let ry = (y / REGION_SIZE) as u32;
    (plane as u32) << 20 | rx << 10 | ry
}

#[inline]
fn tile_index(x: u16, y: u16) -> usize {
    let lx = (x % REGION_SIZE) as usize;
    let ly = (y % REGION_SIZE) as usize;
    ly * REGION_SIZE as usize + lx
}

// ── GlobalCollisionMap ────────────────────────────────────────────────────────

/// Immutable passability flags for the entire static world.
#[derive(Debug)]
pub struct GlobalCollisionMap {
    regions: FxHashMap<u32, Box<[u8; REGION_AREA]>>,
}

impl GlobalCollisionMap {
    pub fn builder() -> GlobalCollisionMapBuilder {
        GlobalCollisionMapBuilder::new()
    }

    /// Load the map from a `NAVC` resource file.
    pub fn load(path: &Path) -> CollisionResult<GlobalCollisionMap> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Load the map from any `NAVC`-format byte stream.
    pub fn from_reader<R: Read>(mut r: R) -> CollisionResult<GlobalCollisionMap> {
        let mut header = [0u8; 9];
        read_exact(&mut r, &mut header, 9)?;
        if header[0..4] != MAGIC {
            return Err(CollisionError::Resource("bad magic".into()));
        }
        if header[4] != VERSION {
            return Err(CollisionError::Version(header[4]));
        }
        let count = u32::from_le_bytes([header[5], header[6], header[7], header[8]]);

        let mut regions = FxHashMap::default();
        regions.reserve(count as usize);
        for _ in 0..count {
            let mut rec = [0u8; 5];
            read_exact(&mut r, &mut rec, 5)?;
            let plane = rec[0];
            let rx = u16::from_le_bytes([rec[1], rec[2]]);
            let ry = u16::from_le_bytes([rec[3], rec[4]]);
            if plane > nav_core::point::MAX_PLANE {
                return Err(CollisionError::Resource(format!("bad plane {plane}")));
            }
            if rx > MAX_REGION || ry > MAX_REGION {
                return Err(CollisionError::Resource(format!("bad region ({rx}, {ry})")));
            }

            let mut block = Box::new([0u8; REGION_AREA]);
            read_exact(&mut r, &mut block[..], REGION_AREA)?;
            let key = region_key(rx * REGION_SIZE, ry * REGION_SIZE, plane);
            regions.insert(key, block);
        }

        log::debug!("loaded collision map: {} region blocks", regions.len());
        Ok(GlobalCollisionMap { regions })
    }

    /// Write the map in `NAVC` format.  Records are emitted in key order so
    /// output is deterministic.
    pub fn write_to<W: Write>(&self, mut w: W) -> CollisionResult<()> {
        w.write_all(&MAGIC)?;
        w.write_all(&[VERSION])?;
        w.write_all(&(self.regions.len() as u32).to_le_bytes())?;

        let mut keys: Vec<u32> = self.regions.keys().copied().collect();
        keys.sort_unstable();
        for key in keys {
            let plane = (key >> 20) as u8;
            let rx = ((key >> 10) & 0x3FF) as u16;
            let ry = (key & 0x3FF) as u16;
            w.write_all(&[plane])?;
            w.write_all(&rx.to_le_bytes())?;
            w.write_all(&ry.to_le_bytes())?;
            w.write_all(&self.regions[&key][..])?;
        }
        Ok(())
    }

    /// Convenience wrapper around [`write_to`](Self::write_to) for files.
    pub fn save(&self, path: &Path) -> CollisionResult<()> {
        let file = File::create(path)?;
        self.write_to(BufWriter::new(file))
    }

    /// The passability flags of one tile.  Absent regions are
    /// [`TileFlags::BLOCKED`].
    #[inline]
    pub fn flags(&self, x: u16, y: u16, plane: u8) -> TileFlags {
        match self.regions.get(&region_key(x, y, plane)) {
            Some(block) => TileFlags(block[tile_index(x, y)]),
            None => TileFlags::BLOCKED,
        }
    }

    /// Number of loaded region blocks.
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }
}

impl CollisionQuery for GlobalCollisionMap {
    #[inline]
    fn walkable(&self, p: PackedPoint) -> bool {
        !self.flags(p.x(), p.y(), p.plane()).is_blocked()
    }
}

/// `Read::read_exact` that reports how many bytes actually arrived when
/// the stream ends early, instead of a bare `Io`.
fn read_exact<R: Read>(r: &mut R, buf: &mut [u8], expected: usize) -> CollisionResult<()> {
    let mut filled = 0;
    while filled < buf.len() {
        match r.read(&mut buf[filled..]) {
            Ok(0) => return Err(CollisionError::Truncated { expected, got: filled }),
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(CollisionError::Io(e)),
        }
    }
    Ok(())
}

// ── GlobalCollisionMapBuilder ─────────────────────────────────────────────────

/// Construct a [`GlobalCollisionMap`] tile by tile, then call
/// [`build`](Self::build).
///
/// # Example
///
/// ```
/// use nav_collision::{CollisionQuery, GlobalCollisionMap};
/// use nav_core::PackedPoint;
///
/// let mut b = GlobalCollisionMap::builder();
/// b.open_rect(100, 100, 109, 109, 0);
/// let map = b.build();
/// assert!(map.walkable(PackedPoint::new(105, 105, 0)));
/// assert!(!map.walkable(PackedPoint::new(99, 105, 0)));
/// ```
pub struct GlobalCollisionMapBuilder {
    regions: FxHashMap<u32, Box<[u8; REGION_AREA]>>,
}

impl GlobalCollisionMapBuilder {
    pub fn new() -> Self {
        Self { regions: FxHashMap::default() }
    }

    /// Set one tile's flags, materializing its region block if needed.
    pub fn set(&mut self, x: u16, y: u16, plane: u8, flags: TileFlags) {
        let block = self
            .regions
            .entry(region_key(x, y, plane))
            .or_insert_with(|| Box::new([0u8; REGION_AREA]));
        block[tile_index(x, y)] = flags.0;
    }

    /// Current flags of a tile (BLOCKED if unset).
    pub fn get(&self, x: u16, y: u16, plane: u8) -> TileFlags {
        match self.regions.get(&region_key(x, y, plane)) {
            Some(block) => TileFlags(block[tile_index(x, y)]),
            None => TileFlags::BLOCKED,
        }
    }

    /// Mark the inclusive rectangle walkable, opening each direction bit
    /// only where the neighbor is also inside the rectangle.  Interior
    /// tiles end up as the `OPEN` fast-path byte.
    pub fn open_rect(&mut self, x0: u16, y0: u16, x1: u16, y1: u16, plane: u8) {
        for x in x0..=x1 {
            for y in y0..=y1 {
                let mut flags = TileFlags::BLOCKED;
                for d in Dir::ALL {
                    let (dx, dy) = d.step();
                    let nx = x as i32 + dx;
                    let ny = y as i32 + dy;
                    if nx >= x0 as i32 && nx <= x1 as i32 && ny >= y0 as i32 && ny <= y1 as i32 {
                        flags = flags.with(d);
                    }
                }
                self.set(x, y, plane, flags);
            }
        }
    }

    /// Close off one tile and the matching direction bits of its eight
    /// neighbors, so no step can enter it.
    pub fn block(&mut self, x: u16, y: u16, plane: u8) {
        self.set(x, y, plane, TileFlags::BLOCKED);
        for d in Dir::ALL {
            let (dx, dy) = d.step();
            let nx = x as i32 + dx;
            let ny = y as i32 + dy;
            if nx < 0 || ny < 0 {
                continue;
            }
            let (nx, ny) = (nx as u16, ny as u16);
            let toward_blocked = match self.get(nx, ny, plane) {
                f if f.is_blocked() => continue,
                f => f.without(d.opposite()),
            };
            self.set(nx, ny, plane, toward_blocked);
        }
    }

    pub fn build(self) -> GlobalCollisionMap {
        GlobalCollisionMap { regions: self.regions }
    }
}

impl Default for GlobalCollisionMapBuilder {
    fn default() -> Self {
        Self::new()
    }
}
