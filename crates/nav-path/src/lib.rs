//! `nav-path` — the route planner itself.
//!
//! A multi-source breadth-first search over the collision world: the
//! frontier is seeded with the agent's position and the destination of
//! every usable teleport, grid steps cost one queue position each, and
//! fixed-duration transports (doors, boats…) are folded into the same FIFO
//! frontier by inserting their destinations deeper into the queue (see
//! [`queue`] and [`delay`]).
//!
//! # Crate layout
//!
//! | Module         | Contents                                              |
//! |----------------|-------------------------------------------------------|
//! | [`pathfinder`] | `Pathfinder`, `Goal`, `Route` — the orchestrator      |
//! | [`world`]      | `WorldState` collaborator trait                       |
//! | [`transport`]  | `Transport`, `TransportGraph`, `TransportCatalog`     |
//! | [`teleport`]   | `Teleport`, `TeleportCatalog`                         |
//! | [`queue`]      | `HybridQueue` — FIFO with delayed insertion           |
//! | [`cache`]      | `VisitedCache`, `Parent` — BFS tree + blacklist       |
//! | [`delay`]      | Integer delay costing for transport edges             |
//! | [`error`]      | `PathError`, `PathResult<T>`                          |
//!
//! # Session model
//!
//! Every [`Pathfinder::find`](pathfinder::Pathfinder::find) call builds its
//! own queue, visited cache, and transport graph and throws them away at
//! the end; only the `Arc<GlobalCollisionMap>` is shared.  Searches are
//! synchronous and single-threaded — run them off any latency-sensitive
//! thread.

pub mod cache;
pub mod delay;
pub mod error;
pub mod pathfinder;
pub mod queue;
pub mod teleport;
pub mod transport;
pub mod world;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cache::{Parent, VisitedCache};
pub use delay::transport_delay;
pub use error::{PathError, PathResult};
pub use pathfinder::{Goal, Pathfinder, Route};
pub use queue::HybridQueue;
pub use teleport::{Teleport, TeleportCatalog};
pub use transport::{Transport, TransportCatalog, TransportEdge, TransportGraph};
pub use world::WorldState;
