//! Chunk-template translation for instanced regions.
//!
//! An instanced region is assembled from 8×8-tile **chunks** copied out of
//! the static world.  The scene carries a template table: for each chunk
//! slot `(plane, cx, cy)` a packed `i32` describing which world chunk was
//! copied in and how it was rotated:
//!
//! ```text
//! bit  1..3   rotation            (0–3, quarter turns)
//! bit  3..14  template chunk y    (× 8 tiles)
//! bit 14..24  template chunk x    (× 8 tiles)
//! bit 24..26  template plane
//! ```
//!
//! [`InstanceTemplates::template_of`] maps a scene tile back to the static
//! world tile it was copied from (for looking up quests, objects, or
//! collision baked against the template), and
//! [`InstanceTemplates::instance_points_of`] runs the other way, finding
//! every scene tile that is a copy of a given world tile — a template
//! chunk may appear more than once.

use nav_core::Coord;

/// Tiles per chunk side.
pub const CHUNK_SIZE: u16 = 8;

/// Chunk slots per scene side (104-tile scene).
const SCENE_CHUNKS: usize = 13;
/// Scene planes.
const SCENE_PLANES: usize = 4;

/// The scene's chunk-template table plus its world base coordinate.
pub struct InstanceTemplates {
    base_x: u16,
    base_y: u16,
    /// `SCENE_PLANES × SCENE_CHUNKS × SCENE_CHUNKS` packed chunk entries,
    /// plane-major.
    chunks: Vec<i32>,
}

impl InstanceTemplates {
    /// Wrap a captured template table.
    ///
    /// `chunks` is indexed `[plane][chunk_x][chunk_y]`, flattened; its
    /// length must be `4 * 13 * 13`.
    pub fn new(base_x: u16, base_y: u16, chunks: Vec<i32>) -> InstanceTemplates {
        assert_eq!(
            chunks.len(),
            SCENE_PLANES * SCENE_CHUNKS * SCENE_CHUNKS,
            "chunk table has wrong dimensions",
        );
        InstanceTemplates { base_x, base_y, chunks }
    }

    #[inline]
    fn chunk(&self, plane: usize, cx: usize, cy: usize) -> i32 {
        self.chunks[(plane * SCENE_CHUNKS + cx) * SCENE_CHUNKS + cy]
    }

    /// The static-world tile this scene tile was copied from.
    ///
    /// `scene_x`/`scene_y` are scene-relative (0–103).  Returns `None` for
    /// out-of-scene inputs or empty chunk slots.
    pub fn template_of(&self, scene_x: u16, scene_y: u16, plane: u8) -> Option<Coord> {
        if plane as usize >= SCENE_PLANES {
            return None;
        }
        let cx = (scene_x / CHUNK_SIZE) as usize;
        let cy = (scene_y / CHUNK_SIZE) as usize;
        if cx >= SCENE_CHUNKS || cy >= SCENE_CHUNKS {
            return None;
        }

        let data = self.chunk(plane as usize, cx, cy);
        if data == -1 {
            return None;
        }
        let rotation = (data >> 1 & 0x3) as u8;
        let template_y = ((data >> 3 & 0x7FF) as u16) * CHUNK_SIZE;
        let template_x = ((data >> 14 & 0x3FF) as u16) * CHUNK_SIZE;
        let template_plane = (data >> 24 & 0x3) as u8;

        let world = Coord::new(
            template_x + (scene_x & (CHUNK_SIZE - 1)),
            template_y + (scene_y & (CHUNK_SIZE - 1)),
            template_plane,
        );
        // Undo the instance rotation to land on the unrotated template.
        Some(rotate_in_chunk(world, 4 - rotation))
    }

    /// Every scene tile that is an instance copy of the world tile
    /// `template`.  Empty if the template's chunk is not present in the
    /// scene.  Coordinates are world-space (scene base applied).
    pub fn instance_points_of(&self, template: Coord) -> Vec<Coord> {
        let mut points = Vec::new();
        for plane in 0..SCENE_PLANES {
            for cx in 0..SCENE_CHUNKS {
                for cy in 0..SCENE_CHUNKS {
                    let data = self.chunk(plane, cx, cy);
                    if data == -1 {
                        continue;
                    }
                    let rotation = (data >> 1 & 0x3) as u8;
                    let template_y = ((data >> 3 & 0x7FF) as u16) * CHUNK_SIZE;
                    let template_x = ((data >> 14 & 0x3FF) as u16) * CHUNK_SIZE;
                    let template_plane = (data >> 24 & 0x3) as u8;

                    let in_chunk = template.x >= template_x
                        && template.x < template_x + CHUNK_SIZE
                        && template.y >= template_y
                        && template.y < template_y + CHUNK_SIZE
                        && template.plane == template_plane;
                    if !in_chunk {
                        continue;
                    }

                    let p = Coord::new(
                        self.base_x + cx as u16 * CHUNK_SIZE + (template.x & (CHUNK_SIZE - 1)),
                        self.base_y + cy as u16 * CHUNK_SIZE + (template.y & (CHUNK_SIZE - 1)),
                        plane as u8,
                    );
                    points.push(rotate_in_chunk(p, rotation));
                }
            }
        }
        points
    }
}

/// Rotate a tile by `rotation` quarter turns around the center of its own
/// 8×8 chunk.
pub fn rotate_in_chunk(c: Coord, rotation: u8) -> Coord {
    let chunk_x = c.x & !(CHUNK_SIZE - 1);
    let chunk_y = c.y & !(CHUNK_SIZE - 1);
    let x = c.x & (CHUNK_SIZE - 1);
    let y = c.y & (CHUNK_SIZE - 1);
    match rotation & 3 {
        1 => Coord::new(chunk_x + y, chunk_y + (CHUNK_SIZE - 1 - x), c.plane),
        2 => Coord::new(
            chunk_x + (CHUNK_SIZE - 1 - x),
            chunk_y + (CHUNK_SIZE - 1 - y),
            c.plane,
        ),
        3 => Coord::new(chunk_x + (CHUNK_SIZE - 1 - y), chunk_y + x, c.plane),
        _ => c,
    }
}
