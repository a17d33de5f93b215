//! `nav-collision` — per-tile passability for the static world and for
//! instanced regions.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`global`]   | `GlobalCollisionMap` (region blocks + resource I/O), `GlobalCollisionMapBuilder` |
//! | [`local`]    | `LocalCollisionMap` — scene-relative snapshot for instances |
//! | [`instance`] | Chunk-template decode and world↔instance translation     |
//! | [`error`]    | `CollisionError`, `CollisionResult<T>`                   |
//!
//! # Lifecycle
//!
//! The global map is loaded once from its binary resource before any search
//! runs and is immutable afterwards; wrap it in an `Arc` and share it freely
//! across sessions.  Local maps are throwaway snapshots taken per search
//! while the agent is inside an instanced region.

pub mod error;
pub mod global;
pub mod instance;
pub mod local;


use nav_core::PackedPoint;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CollisionError, CollisionResult};
pub use global::{GlobalCollisionMap, GlobalCollisionMapBuilder};
pub use instance::{InstanceTemplates, CHUNK_SIZE};
pub use local::LocalCollisionMap;

/// Common query surface over the {global, local} collision capability set.
pub trait CollisionQuery {
    /// `true` if an agent can stand on `p` at all.
    fn walkable(&self, p: PackedPoint) -> bool;
}
