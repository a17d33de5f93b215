//! Planner error type.
//!
//! An empty [`Route`](crate::Route) means "no path exists" and is *not* an
//! error; `PathError` is reserved for faults — a collaborator that could
//! not answer, or a broken collision resource.  Callers can therefore tell
//! "unreachable target" apart from "the search broke".

use thiserror::Error;

use nav_collision::CollisionError;
use nav_core::NavError;

/// Errors produced by `nav-path`.
#[derive(Debug, Error)]
pub enum PathError {
    /// A world-state provider or catalog failed mid-search.
    #[error("world state: {0}")]
    World(#[from] NavError),

    #[error("collision: {0}")]
    Collision(#[from] CollisionError),
}

pub type PathResult<T> = Result<T, PathError>;
