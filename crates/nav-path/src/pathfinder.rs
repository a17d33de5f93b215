//! The search orchestrator.
//!
//! One `Pathfinder` is built per destination (a single tile or a target
//! area) against a shared, immutable global collision map.  Each
//! [`find`](Pathfinder::find) call runs one complete multi-source BFS with
//! throwaway session state:
//!
//! 1. **Seed** — the agent's position plus the destination of every usable
//!    teleport worth seeding, all marked as roots and enqueued; blacklist
//!    points are claimed first so expansion can never enter them.
//! 2. **Expand** — grid neighbors via the collision flags (with the
//!    OPEN/BLOCKED fast paths), then transport edges pushed deeper into
//!    the frontier by the integer delay model.
//! 3. **Terminate** — goal dequeued (reconstruct), queue drained (no
//!    path), or visited-node bound exceeded (search abandoned).  The
//!    latter two produce an *empty route*, not an error: unreachable
//!    targets are an expected outcome.

use std::sync::Arc;

use rustc_hash::FxHashSet;

use nav_collision::{CollisionQuery, GlobalCollisionMap, LocalCollisionMap};
use nav_core::{Dir, PackedPoint};

use crate::cache::{Parent, VisitedCache};
use crate::delay::transport_delay;
use crate::error::PathResult;
use crate::queue::HybridQueue;
use crate::teleport::{Teleport, TeleportCatalog};
use crate::transport::{TransportCatalog, TransportGraph};
use crate::world::WorldState;

/// Upper bound on visited nodes before a search is abandoned.
///
/// The sole safety valve against unbounded work on unreachable goals —
/// there is deliberately no wall-clock timeout.
pub const DEFAULT_NODE_LIMIT: usize = 10_000_000;

/// One game tick covers this many queue positions at walking pace; scales
/// transport durations into the delay model's unit.
const STEPS_PER_TICK: u32 = 2;

// ── Route ─────────────────────────────────────────────────────────────────────

/// The planner's answer: an ordered walk from a start node to the goal.
///
/// An empty route is the defined "no path" value.  When the route begins
/// at a teleport destination, that teleport rides along so the caller
/// knows to cast it before walking.
#[derive(Clone, Debug, Default)]
pub struct Route {
    /// Tiles from start to goal, inclusive.  Consecutive entries are grid
    /// neighbors except across a transport edge.
    pub points: Vec<PackedPoint>,
    /// The teleport to cast first, if the route starts at one.
    pub teleport: Option<Teleport>,
}

impl Route {
    pub fn empty() -> Route {
        Route::default()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }
}

// ── Goal ──────────────────────────────────────────────────────────────────────

/// What the search is trying to reach.
#[derive(Clone, Debug)]
pub enum Goal {
    /// A single tile; validated walkable before any expansion.
    Point(PackedPoint),
    /// Any member tile of an area; no walkability pre-check (the area may
    /// include instance-local points the global map knows nothing about).
    Area(Vec<PackedPoint>),
}

// ── Pathfinder ────────────────────────────────────────────────────────────────

/// Plans walking routes to one goal.  Cheap to construct; reusable across
/// `find` calls and safe to share between threads (all mutable state is
/// per-session).
pub struct Pathfinder {
    collision: Arc<GlobalCollisionMap>,
    goal: Goal,
    blacklist: Vec<PackedPoint>,
    node_limit: usize,
}

impl Pathfinder {
    pub fn new(collision: Arc<GlobalCollisionMap>, goal: Goal) -> Pathfinder {
        Pathfinder { collision, goal, blacklist: Vec::new(), node_limit: DEFAULT_NODE_LIMIT }
    }

    /// Shorthand for a single-tile goal.
    pub fn to_point(collision: Arc<GlobalCollisionMap>, target: PackedPoint) -> Pathfinder {
        Pathfinder::new(collision, Goal::Point(target))
    }

    /// Shorthand for an area goal.
    pub fn to_area(
        collision: Arc<GlobalCollisionMap>,
        points: impl IntoIterator<Item = PackedPoint>,
    ) -> Pathfinder {
        Pathfinder::new(collision, Goal::Area(points.into_iter().collect()))
    }

    /// Forbid these tiles entirely: they are claimed before the search
    /// starts and never expanded into, even when they sit on the only
    /// geometrically shortest path.
    pub fn with_blacklist(mut self, points: impl IntoIterator<Item = PackedPoint>) -> Pathfinder {
        self.blacklist = points.into_iter().collect();
        self
    }

    /// Override the visited-node bound (tests use tiny values to exercise
    /// the abandonment path).
    pub fn with_node_limit(mut self, limit: usize) -> Pathfinder {
        self.node_limit = limit;
        self
    }

    /// Run one search against the current world state.
    ///
    /// Returns an empty [`Route`] when no path exists, the target fails
    /// validation, or the node bound is exceeded.  `Err` is reserved for
    /// collaborator faults.
    pub fn find(
        &self,
        world: &impl WorldState,
        transports: &(impl TransportCatalog + ?Sized),
        teleports: &(impl TeleportCatalog + ?Sized),
    ) -> PathResult<Route> {
        let position = world.position();
        let in_instance = world.in_instance();
        let local = if in_instance { Some(world.local_collision()?) } else { None };

        let mut graph = TransportGraph::new();
        graph.refresh(transports);

        // Teleports whose destination is already a short walk away cannot
        // beat walking; everything else becomes an extra start seed.
        let teleport_seeds: Vec<Teleport> = teleports
            .teleports()
            .into_iter()
            .filter(|t| !world.within_short_walk(t.destination))
            .collect();

        let mut session = Session {
            visited: VisitedCache::new(),
            // One dequeue can add up to eight neighbors before the node
            // bound is re-checked, so give the queue a little headroom.
            queue: HybridQueue::with_capacity(self.node_limit.saturating_add(64)),
            graph,
            local,
            in_instance,
            transports_seen: 0,
        };

        for &p in &self.blacklist {
            session.visited.blacklist(p);
        }
        session.enqueue_seed(position);
        for t in &teleport_seeds {
            session.enqueue_seed(t.destination);
        }

        let goal = match &self.goal {
            Goal::Point(target) => {
                if !self.collision.walkable(*target) {
                    log::debug!("target {target} is not walkable, no search performed");
                    return Ok(Route::empty());
                }
                GoalSet::Point(*target)
            }
            Goal::Area(points) => {
                if points.is_empty() {
                    return Ok(Route::empty());
                }
                GoalSet::Area(points.iter().copied().collect())
            }
        };

        while let Some(node) = session.queue.dequeue() {
            if session.visited.len() > self.node_limit {
                log::debug!("abandoning search after {} nodes", session.visited.len());
                return Ok(Route::empty());
            }
            if goal.matches(node) {
                let points = session.visited.path(node);
                log::info!("route of {} steps, {} nodes visited", points.len(), session.visited.len());
                let teleport = points
                    .first()
                    .and_then(|start| teleport_seeds.iter().find(|t| t.destination == *start))
                    .cloned();
                return Ok(Route { points, teleport });
            }
            self.expand(node, &mut session);
        }

        log::debug!("frontier exhausted after {} nodes, no route", session.visited.len());
        Ok(Route::empty())
    }

    /// Push `node`'s open grid neighbors and outgoing transports onto the
    /// frontier.
    fn expand(&self, node: PackedPoint, s: &mut Session) {
        if node.is_scene_local() {
            // Instance-local address space: only the scene snapshot knows
            // these tiles, and transports never originate here.
            if s.in_instance {
                if let Some(local) = &s.local {
                    let (x, y, plane) = (node.x(), node.y(), node.plane());
                    for d in Dir::ALL {
                        if !local.blocked(d, x, y, plane) {
                            Session::step(&mut s.visited, &mut s.queue, node, d.neighbor(node));
                        }
                    }
                }
            }
            return;
        }

        let flags = self.collision.flags(node.x(), node.y(), node.plane());
        if flags.is_blocked() {
            // Fully blocked tiles expand nothing, transports included.
            return;
        }
        if flags.is_open() {
            for d in Dir::ALL {
                Session::step(&mut s.visited, &mut s.queue, node, d.neighbor(node));
            }
        } else {
            for d in Dir::ALL {
                if flags.allows(d) {
                    Session::step(&mut s.visited, &mut s.queue, node, d.neighbor(node));
                }
            }
        }

        for edge in s.graph.edges_from(node) {
            s.transports_seen += 1;
            let delay = transport_delay(
                edge.duration.saturating_mul(STEPS_PER_TICK),
                s.queue.len(),
                s.transports_seen,
            );
            if s.visited.put(edge.destination, Parent::Step(node)) {
                s.queue.enqueue_delayed(edge.destination, delay);
            }
        }
    }
}

// ── Session ───────────────────────────────────────────────────────────────────

/// Per-`find` state; never reused or shared.
struct Session {
    visited: VisitedCache,
    queue: HybridQueue,
    graph: TransportGraph,
    local: Option<LocalCollisionMap>,
    in_instance: bool,
    transports_seen: u32,
}

impl Session {
    /// Seed a start node: claimed as root (blacklist wins if it got there
    /// first) and enqueued unconditionally.
    fn enqueue_seed(&mut self, p: PackedPoint) {
        self.visited.seed(p);
        self.queue.enqueue(p);
    }

    /// Claim a grid neighbor; enqueue it only as first writer.
    #[inline]
    fn step(visited: &mut VisitedCache, queue: &mut HybridQueue, from: PackedPoint, to: PackedPoint) {
        if visited.put(to, Parent::Step(from)) {
            queue.enqueue(to);
        }
    }
}

// ── GoalSet ───────────────────────────────────────────────────────────────────

/// Goal membership test, prepared once per search.
enum GoalSet {
    Point(PackedPoint),
    Area(FxHashSet<PackedPoint>),
}

impl GoalSet {
    #[inline]
    fn matches(&self, node: PackedPoint) -> bool {
        match self {
            GoalSet::Point(p) => node == *p,
            GoalSet::Area(set) => set.contains(&node),
        }
    }
}
