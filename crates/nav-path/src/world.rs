//! The world-state collaborator.
//!
//! The planner never talks to a game client directly; everything dynamic
//! comes in through this trait, so applications (and tests) can supply any
//! snapshot they like.  Implementations must answer consistently for the
//! duration of one `find()` call.

use nav_collision::LocalCollisionMap;
use nav_core::{NavResult, PackedPoint};

/// Current agent and scene state, queried once per search.
pub trait WorldState {
    /// The agent's current tile.
    fn position(&self) -> PackedPoint;

    /// `true` while the agent is inside an instanced region.
    fn in_instance(&self) -> bool;

    /// Snapshot the scene's collision while instanced.
    ///
    /// Only called when [`in_instance`](Self::in_instance) returns `true`.
    ///
    /// # Errors
    ///
    /// Implementations report an unavailable scene as
    /// [`NavError::WorldState`](nav_core::NavError); the planner surfaces
    /// it as a failure, not an empty route.
    fn local_collision(&self) -> NavResult<LocalCollisionMap>;

    /// `true` if `dest` is a short, unobstructed walk from the agent.
    ///
    /// Used to filter teleport seeds: a teleport whose destination is
    /// already a few steps away cannot beat walking, so it is not worth a
    /// frontier seed.  The default keeps every teleport.
    fn within_short_walk(&self, dest: PackedPoint) -> bool {
        let _ = dest;
        false
    }
}
