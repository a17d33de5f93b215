//! `nav-core` — foundational types for the `rust_nav` route planner.
//!
//! This crate is a dependency of every other `nav-*` crate.  It intentionally
//! has no `nav-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                            |
//! |-------------|-----------------------------------------------------|
//! | [`point`]   | `PackedPoint` codec, `Coord`                        |
//! | [`dir`]     | `Dir` compass enum, `TileFlags` passability byte    |
//! | [`error`]   | `NavError`, `NavResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                |
//! |---------|-------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.   |

pub mod dir;
pub mod error;
pub mod point;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use dir::{Dir, TileFlags};
pub use error::{NavError, NavResult};
pub use point::{Coord, PackedPoint};
