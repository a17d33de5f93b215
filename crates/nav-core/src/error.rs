//! Base error type.
//!
//! Sub-crates define their own error enums and either convert into
//! `NavError` via `From` impls or wrap it as one variant.  Collaborator
//! implementations (world-state providers, catalogs) report faults through
//! `NavError` so the planner can distinguish "no path" from "something
//! broke".

use thiserror::Error;

/// The common error base for the `nav-*` crates and their collaborators.
#[derive(Debug, Error)]
pub enum NavError {
    /// A world-state provider could not answer a query (disconnected client,
    /// stale scene, missing instance data…).
    #[error("world state unavailable: {0}")]
    WorldState(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `nav-*` crates.
pub type NavResult<T> = Result<T, NavError>;
