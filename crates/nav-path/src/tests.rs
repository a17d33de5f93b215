//! Unit tests for nav-path.
//!
//! All searches run on hand-built collision maps; no resource file or live
//! world is involved.

#[cfg(test)]
mod helpers {
    use std::sync::Arc;

    use nav_collision::{GlobalCollisionMap, LocalCollisionMap};
    use nav_core::{NavError, NavResult, PackedPoint};

    use crate::world::WorldState;

    /// A single open rectangle on plane 0.
    pub fn open_field(x0: u16, y0: u16, x1: u16, y1: u16) -> Arc<GlobalCollisionMap> {
        let mut b = GlobalCollisionMap::builder();
        b.open_rect(x0, y0, x1, y1, 0);
        Arc::new(b.build())
    }

    /// Two disconnected open islands: A at (100..=110)² and B at
    /// (200..=210, 100..=110), both plane 0.
    pub fn two_islands() -> Arc<GlobalCollisionMap> {
        let mut b = GlobalCollisionMap::builder();
        b.open_rect(100, 100, 110, 110, 0);
        b.open_rect(200, 100, 210, 110, 0);
        Arc::new(b.build())
    }

    /// Fixed world-state snapshot for tests.
    pub struct StaticWorld {
        pub position: PackedPoint,
        pub in_instance: bool,
        pub local: Option<LocalCollisionMap>,
        /// Teleport destinations within this Chebyshev radius are treated
        /// as "a short walk away" and filtered from the seeds.
        pub short_walk_radius: u16,
    }

    impl StaticWorld {
        pub fn at(position: PackedPoint) -> StaticWorld {
            StaticWorld { position, in_instance: false, local: None, short_walk_radius: 0 }
        }
    }

    impl WorldState for StaticWorld {
        fn position(&self) -> PackedPoint {
            self.position
        }

        fn in_instance(&self) -> bool {
            self.in_instance
        }

        fn local_collision(&self) -> NavResult<LocalCollisionMap> {
            self.local
                .clone()
                .ok_or_else(|| NavError::WorldState("no scene captured".into()))
        }

        fn within_short_walk(&self, dest: PackedPoint) -> bool {
            self.position.coord().chebyshev(dest.coord()) <= self.short_walk_radius
        }
    }

    /// Every consecutive pair of route points must be grid-adjacent, except
    /// across at most `jumps` transport/teleport edges.  Returns the jump
    /// pairs encountered.
    pub fn assert_adjacent_except(
        points: &[PackedPoint],
        jumps: usize,
    ) -> Vec<(PackedPoint, PackedPoint)> {
        let mut found = Vec::new();
        for pair in points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if a.coord().chebyshev(b.coord()) > 1 || a.plane() != b.plane() {
                found.push((a, b));
            }
        }
        assert!(
            found.len() <= jumps,
            "route has {} non-adjacent hops, expected at most {jumps}",
            found.len(),
        );
        found
    }
}

// ── HybridQueue ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod queue {
    use nav_core::PackedPoint;

    use crate::queue::HybridQueue;

    fn p(n: u16) -> PackedPoint {
        PackedPoint::new(n, 0, 0)
    }

    #[test]
    fn fifo_order() {
        let mut q = HybridQueue::with_capacity(100);
        q.enqueue(p(1));
        q.enqueue(p(2));
        q.enqueue(p(3));
        assert_eq!(q.dequeue(), Some(p(1)));
        assert_eq!(q.dequeue(), Some(p(2)));
        assert_eq!(q.dequeue(), Some(p(3)));
        assert_eq!(q.dequeue(), None);
    }

    #[test]
    fn zero_delay_behaves_like_append() {
        let mut q = HybridQueue::with_capacity(100);
        q.enqueue(p(1));
        q.enqueue(p(2));
        q.enqueue_delayed(p(9), 0);
        q.enqueue(p(3));
        let order: Vec<_> = std::iter::from_fn(|| q.dequeue()).collect();
        assert_eq!(order, vec![p(1), p(2), p(9), p(3)]);
    }

    #[test]
    fn delayed_entry_sinks_by_its_delay() {
        let mut q = HybridQueue::with_capacity(100);
        q.enqueue(p(1));
        q.enqueue(p(2));
        q.enqueue_delayed(p(9), 1); // effective position: after p(3)
        q.enqueue(p(3));
        q.enqueue(p(4));
        let order: Vec<_> = std::iter::from_fn(|| q.dequeue()).collect();
        assert_eq!(order, vec![p(1), p(2), p(3), p(9), p(4)]);
    }

    #[test]
    fn future_dated_entries_drain_when_fifo_empties() {
        let mut q = HybridQueue::with_capacity(100);
        q.enqueue_delayed(p(7), 1_000_000);
        assert_eq!(q.len(), 1);
        assert_eq!(q.dequeue(), Some(p(7)));
        assert!(q.is_empty());
    }

    #[test]
    fn equal_release_breaks_ties_deterministically() {
        let mut q = HybridQueue::with_capacity(100);
        q.enqueue_delayed(p(5), 3);
        q.enqueue_delayed(p(4), 2); // same release position as p(5)
        assert_eq!(q.dequeue(), Some(p(4)));
        assert_eq!(q.dequeue(), Some(p(5)));
    }

    #[test]
    fn len_reflects_pending_work_only() {
        let mut q = HybridQueue::with_capacity(100);
        q.enqueue(p(1));
        q.enqueue_delayed(p(2), 10);
        assert_eq!(q.len(), 2);
        q.dequeue();
        assert_eq!(q.len(), 1);
        q.dequeue();
        assert_eq!(q.len(), 0);
        assert!(q.is_empty());
    }
}

// ── VisitedCache ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod cache {
    use nav_core::PackedPoint;

    use crate::cache::{Parent, VisitedCache};

    fn p(n: u16) -> PackedPoint {
        PackedPoint::new(n, 0, 0)
    }

    #[test]
    fn first_writer_wins() {
        let mut c = VisitedCache::new();
        assert!(c.put(p(1), Parent::Step(p(2))));
        assert!(!c.put(p(1), Parent::Step(p(3))));
        assert_eq!(c.get(p(1)), Some(Parent::Step(p(2))));
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn root_and_blacklist_are_distinct() {
        let mut c = VisitedCache::new();
        c.seed(p(1));
        c.blacklist(p(2));
        assert_eq!(c.get(p(1)), Some(Parent::Root));
        assert_eq!(c.get(p(2)), Some(Parent::Blacklisted));
        assert_eq!(c.get(p(3)), None);
    }

    #[test]
    fn blacklist_claims_before_seed() {
        let mut c = VisitedCache::new();
        c.blacklist(p(1));
        assert!(!c.seed(p(1)));
        assert_eq!(c.get(p(1)), Some(Parent::Blacklisted));
    }

    #[test]
    fn path_reconstruction() {
        let mut c = VisitedCache::new();
        c.seed(p(1));
        c.put(p(2), Parent::Step(p(1)));
        c.put(p(3), Parent::Step(p(2)));
        c.put(p(4), Parent::Step(p(3)));
        let path = c.path(p(4));
        assert_eq!(path, vec![p(1), p(2), p(3), p(4)]);
        // Internal consistency: each point's recorded parent is its
        // predecessor in the returned sequence.
        for pair in path.windows(2) {
            assert_eq!(c.get(pair[1]), Some(Parent::Step(pair[0])));
        }
    }

    #[test]
    fn path_of_a_root_is_itself() {
        let mut c = VisitedCache::new();
        c.seed(p(7));
        assert_eq!(c.path(p(7)), vec![p(7)]);
    }
}

// ── Delay costing ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod delay {
    use crate::delay::transport_delay;

    #[test]
    fn zero_duration_is_instantaneous() {
        assert_eq!(transport_delay(0, 0, 0), 0);
        assert_eq!(transport_delay(0, 1_000_000, 50), 0);
    }

    #[test]
    fn known_value() {
        // queue_len * d + 6 * (1 + seen) * d * (d + 1) / 2
        // = 10 * 3 + 6 * 1 * 6 = 66
        assert_eq!(transport_delay(3, 10, 0), 66);
        // seen = 2 → increment 18: 30 + 18 * 6 = 138
        assert_eq!(transport_delay(3, 10, 2), 138);
    }

    #[test]
    fn monotone_in_queue_len_and_transports_seen() {
        let base = transport_delay(5, 100, 1);
        for q in [100usize, 200, 5_000] {
            for seen in [1u32, 2, 40] {
                assert!(transport_delay(5, q, seen) >= base);
            }
        }
    }

    #[test]
    fn saturates_instead_of_wrapping() {
        assert_eq!(transport_delay(u32::MAX, usize::MAX, u32::MAX), u32::MAX);
        assert_eq!(transport_delay(100_000, usize::MAX, 0), u32::MAX);
    }
}

// ── Pathfinder ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod pathfinder {
    use std::sync::Arc;

    use nav_collision::{GlobalCollisionMap, LocalCollisionMap};
    use nav_core::{PackedPoint, TileFlags};

    use super::helpers::{assert_adjacent_except, open_field, two_islands, StaticWorld};
    use crate::pathfinder::{Goal, Pathfinder};
    use crate::teleport::Teleport;
    use crate::transport::Transport;

    fn no_transports() -> Vec<Transport> {
        Vec::new()
    }

    fn no_teleports() -> Vec<Teleport> {
        Vec::new()
    }

    #[test]
    fn open_field_route_has_chebyshev_length() {
        let map = open_field(100, 100, 140, 140);
        let start = PackedPoint::new(105, 105, 0);
        let goal = PackedPoint::new(120, 112, 0);

        let route = Pathfinder::to_point(map, goal)
            .find(&StaticWorld::at(start), &no_transports(), &no_teleports())
            .unwrap();

        // Chebyshev distance 15 → 15 steps → 16 points inclusive.
        assert_eq!(route.points.len(), 16);
        assert_eq!(route.points.first(), Some(&start));
        assert_eq!(route.points.last(), Some(&goal));
        assert!(route.teleport.is_none());
        assert_adjacent_except(&route.points, 0);
    }

    #[test]
    fn trivial_route_when_already_at_goal() {
        let map = open_field(100, 100, 110, 110);
        let start = PackedPoint::new(105, 105, 0);
        let route = Pathfinder::to_point(map, start)
            .find(&StaticWorld::at(start), &no_transports(), &no_teleports())
            .unwrap();
        assert_eq!(route.points, vec![start]);
    }

    #[test]
    fn unwalkable_target_short_circuits() {
        let map = open_field(100, 100, 110, 110);
        let route = Pathfinder::to_point(map, PackedPoint::new(500, 500, 0))
            .find(
                &StaticWorld::at(PackedPoint::new(105, 105, 0)),
                &no_transports(),
                &no_teleports(),
            )
            .unwrap();
        assert!(route.is_empty());
    }

    #[test]
    fn disconnected_islands_have_no_route() {
        let map = two_islands();
        let route = Pathfinder::to_point(map, PackedPoint::new(205, 105, 0))
            .find(
                &StaticWorld::at(PackedPoint::new(105, 105, 0)),
                &no_transports(),
                &no_teleports(),
            )
            .unwrap();
        assert!(route.is_empty());
    }

    #[test]
    fn blacklisted_corridor_tile_blocks_the_only_path() {
        // One-tile-high corridor; the middle tile is blacklisted.
        let map = open_field(100, 100, 110, 100);
        let route = Pathfinder::to_point(map, PackedPoint::new(110, 100, 0))
            .with_blacklist([PackedPoint::new(105, 100, 0)])
            .find(
                &StaticWorld::at(PackedPoint::new(100, 100, 0)),
                &no_transports(),
                &no_teleports(),
            )
            .unwrap();
        assert!(route.is_empty());
    }

    #[test]
    fn blacklisted_tile_is_detoured_around() {
        let map = open_field(100, 100, 120, 120);
        let start = PackedPoint::new(105, 105, 0);
        let goal = PackedPoint::new(110, 110, 0);
        // Sits on the straight diagonal between start and goal.
        let forbidden = PackedPoint::new(107, 107, 0);

        let route = Pathfinder::to_point(map, goal)
            .with_blacklist([forbidden])
            .find(&StaticWorld::at(start), &no_transports(), &no_teleports())
            .unwrap();

        assert!(!route.is_empty());
        assert!(!route.points.contains(&forbidden));
        assert_eq!(route.points.last(), Some(&goal));
        assert_adjacent_except(&route.points, 0);
    }

    #[test]
    fn node_limit_abandons_deterministically() {
        let map = open_field(100, 100, 1000, 1000);
        let finder = Pathfinder::to_point(map, PackedPoint::new(900, 900, 0)).with_node_limit(50);
        let world = StaticWorld::at(PackedPoint::new(105, 105, 0));
        for _ in 0..3 {
            let route = finder.find(&world, &no_transports(), &no_teleports()).unwrap();
            assert!(route.is_empty());
        }
    }

    #[test]
    fn transport_bridges_islands() {
        let map = two_islands();
        let start = PackedPoint::new(102, 102, 0);
        let goal = PackedPoint::new(208, 108, 0);
        let ferry = Transport {
            origin: PackedPoint::new(105, 105, 0),
            destination: PackedPoint::new(205, 105, 0),
            duration: 3,
        };

        let route = Pathfinder::to_point(map, goal)
            .find(&StaticWorld::at(start), &vec![ferry.clone()], &no_teleports())
            .unwrap();

        assert!(!route.is_empty());
        assert_eq!(route.points.last(), Some(&goal));
        let jumps = assert_adjacent_except(&route.points, 1);
        assert_eq!(jumps, vec![(ferry.origin, ferry.destination)]);
    }

    #[test]
    fn instantaneous_transport_also_bridges() {
        let map = two_islands();
        let ferry = Transport {
            origin: PackedPoint::new(105, 105, 0),
            destination: PackedPoint::new(205, 105, 0),
            duration: 0,
        };
        let route = Pathfinder::to_point(map, PackedPoint::new(205, 105, 0))
            .find(
                &StaticWorld::at(PackedPoint::new(105, 105, 0)),
                &vec![ferry],
                &no_teleports(),
            )
            .unwrap();
        assert!(!route.is_empty());
    }

    #[test]
    fn teleport_seeds_a_route_and_rides_along() {
        let map = two_islands();
        let start = PackedPoint::new(102, 102, 0);
        let goal = PackedPoint::new(208, 108, 0);
        let teleport = Teleport::new(PackedPoint::new(205, 105, 0), "east isle");

        let route = Pathfinder::to_point(map, goal)
            .find(&StaticWorld::at(start), &no_transports(), &vec![teleport.clone()])
            .unwrap();

        assert!(!route.is_empty());
        assert_eq!(route.points.first(), Some(&teleport.destination));
        assert_eq!(route.points.last(), Some(&goal));
        assert_eq!(route.teleport.as_ref().map(|t| t.name.as_str()), Some("east isle"));
        assert_adjacent_except(&route.points, 0);
    }

    #[test]
    fn nearby_teleport_is_not_seeded() {
        let map = two_islands();
        let mut world = StaticWorld::at(PackedPoint::new(102, 102, 0));
        world.short_walk_radius = 10;
        // Destination is 3 tiles away — inside the short-walk radius, so it
        // must not become a seed, and island B stays unreachable.
        let useless = Teleport::new(PackedPoint::new(105, 105, 0), "doorstep");

        let route = Pathfinder::to_point(map, PackedPoint::new(205, 105, 0))
            .find(&world, &no_transports(), &vec![useless])
            .unwrap();
        assert!(route.is_empty());
    }

    #[test]
    fn walking_route_carries_no_teleport_metadata() {
        let map = open_field(100, 100, 140, 140);
        let start = PackedPoint::new(105, 105, 0);
        let teleport = Teleport::new(PackedPoint::new(130, 130, 0), "far corner");

        let route = Pathfinder::to_point(map, PackedPoint::new(106, 106, 0))
            .find(&StaticWorld::at(start), &no_transports(), &vec![teleport])
            .unwrap();
        assert_eq!(route.points.first(), Some(&start));
        assert!(route.teleport.is_none());
    }

    #[test]
    fn area_goal_reaches_nearest_member() {
        let map = open_field(100, 100, 140, 140);
        let start = PackedPoint::new(105, 105, 0);
        let area = vec![
            PackedPoint::new(108, 105, 0), // Chebyshev 3 — nearest
            PackedPoint::new(130, 130, 0),
        ];
        let route = Pathfinder::new(map, Goal::Area(area.clone()))
            .find(&StaticWorld::at(start), &no_transports(), &no_teleports())
            .unwrap();

        assert_eq!(route.points.len(), 4);
        assert_eq!(route.points.last(), Some(&area[0]));
    }

    #[test]
    fn empty_area_goal_is_empty_route() {
        let map = open_field(100, 100, 110, 110);
        let route = Pathfinder::new(map, Goal::Area(Vec::new()))
            .find(
                &StaticWorld::at(PackedPoint::new(105, 105, 0)),
                &no_transports(),
                &no_teleports(),
            )
            .unwrap();
        assert!(route.is_empty());
    }

    #[test]
    fn instanced_region_uses_the_scene_snapshot() {
        // Empty global map: every local tile is unknown to it.
        let map = Arc::new(GlobalCollisionMap::builder().build());
        let local = LocalCollisionMap::new(6100, 200, 8, 8, 1, vec![TileFlags::OPEN.0; 64]);

        let start = PackedPoint::new(6101, 201, 0);
        let goal = PackedPoint::new(6106, 206, 0);
        let mut world = StaticWorld::at(start);
        world.in_instance = true;
        world.local = Some(local);

        let route = Pathfinder::new(map, Goal::Area(vec![goal]))
            .find(&world, &no_transports(), &no_teleports())
            .unwrap();

        // Chebyshev 5 → 6 points.
        assert_eq!(route.points.len(), 6);
        assert_eq!(route.points.last(), Some(&goal));
        assert_adjacent_except(&route.points, 0);
    }

    #[test]
    fn local_space_is_a_dead_end_outside_instances() {
        let map = Arc::new(GlobalCollisionMap::builder().build());
        let start = PackedPoint::new(6101, 201, 0);
        // Not in an instance: local-space nodes expand to nothing.
        let route = Pathfinder::new(map, Goal::Area(vec![PackedPoint::new(6106, 206, 0)]))
            .find(&StaticWorld::at(start), &no_transports(), &no_teleports())
            .unwrap();
        assert!(route.is_empty());
    }

    #[test]
    fn scene_snapshot_failure_is_an_error_not_an_empty_route() {
        let map = open_field(100, 100, 110, 110);
        let mut world = StaticWorld::at(PackedPoint::new(105, 105, 0));
        world.in_instance = true; // but no scene captured
        let result = Pathfinder::to_point(map, PackedPoint::new(108, 108, 0)).find(
            &world,
            &no_transports(),
            &no_teleports(),
        );
        assert!(result.is_err());
    }
}
