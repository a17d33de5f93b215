//! Collision-subsystem error type.

use thiserror::Error;

/// Errors produced by `nav-collision`.
///
/// A failed resource load is fatal for route planning (a `Pathfinder`
/// cannot be built without a global map) but not process-fatal; callers
/// decide what to do about it.
#[derive(Debug, Error)]
pub enum CollisionError {
    #[error("collision resource: {0}")]
    Resource(String),

    #[error("collision resource truncated: expected {expected} bytes, got {got}")]
    Truncated { expected: usize, got: usize },

    #[error("unsupported collision resource version {0}")]
    Version(u8),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CollisionResult<T> = Result<T, CollisionError>;
