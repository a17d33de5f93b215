//! maze — smallest end-to-end demo for the rust_nav route planner.
//!
//! Builds a synthetic world of two open islands separated by a void,
//! scatters random pillars on each, connects them with a slow ferry and a
//! one-way teleport, then plans three routes: a plain walk, a crossing via
//! the ferry, and a crossing where only the teleport helps.  Swap the
//! generated map for a real `NAVC` resource to plan on actual world data.

use std::sync::Arc;

use anyhow::Result;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use nav_collision::GlobalCollisionMap;
use nav_core::{Coord, PackedPoint};
use nav_path::{Pathfinder, Route, Teleport, Transport, WorldState};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED: u64 = 42;
const PILLARS_PER_ISLAND: usize = 40;

// West island: (1000..=1060)², east island: (2000..=2060, 1000..=1060).
const WEST: (u16, u16, u16, u16) = (1000, 1000, 1060, 1060);
const EAST: (u16, u16, u16, u16) = (2000, 1000, 2060, 1060);

// ── World fixture ─────────────────────────────────────────────────────────────

struct DemoWorld {
    position: PackedPoint,
}

impl WorldState for DemoWorld {
    fn position(&self) -> PackedPoint {
        self.position
    }

    fn in_instance(&self) -> bool {
        false
    }

    fn local_collision(&self) -> nav_core::NavResult<nav_collision::LocalCollisionMap> {
        Err(nav_core::NavError::WorldState("demo has no instanced scenes".into()))
    }

    fn within_short_walk(&self, dest: PackedPoint) -> bool {
        self.position.coord().chebyshev(dest.coord()) < 20
    }
}

// ── Map generation ────────────────────────────────────────────────────────────

fn generate_map(rng: &mut SmallRng, reserved: &[Coord]) -> GlobalCollisionMap {
    let mut b = GlobalCollisionMap::builder();
    for &(x0, y0, x1, y1) in &[WEST, EAST] {
        b.open_rect(x0, y0, x1, y1, 0);
        // Random pillars, kept off the island rim (so the coast stays
        // traversable) and off the fixture tiles the demo routes need.
        for _ in 0..PILLARS_PER_ISLAND {
            let x = rng.gen_range(x0 + 2..x1 - 2);
            let y = rng.gen_range(y0 + 2..y1 - 2);
            if reserved.iter().any(|c| c.chebyshev(Coord::new(x, y, 0)) <= 1) {
                continue;
            }
            b.block(x, y, 0);
        }
    }
    b.build()
}

fn describe(label: &str, route: &Route) {
    if route.is_empty() {
        println!("{label}: no route");
        return;
    }
    let start = route.points.first().expect("non-empty route");
    let end = route.points.last().expect("non-empty route");
    match &route.teleport {
        Some(t) => println!(
            "{label}: {} steps, teleport '{}' to {}, then walk {start} -> {end}",
            route.len(),
            t.name,
            t.destination,
        ),
        None => println!("{label}: {} steps, walk {start} -> {end}", route.len()),
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let mut rng = SmallRng::seed_from_u64(SEED);
    let reserved = [
        Coord::new(1005, 1005, 0),
        Coord::new(1050, 1050, 0),
        Coord::new(2005, 1030, 0),
        Coord::new(2055, 1055, 0),
    ];
    let map = Arc::new(generate_map(&mut rng, &reserved));
    println!(
        "generated {} region blocks of collision data",
        map.region_count(),
    );

    let world = DemoWorld { position: Coord::new(1005, 1005, 0).packed() };

    // A slow ferry crossing the void, plus a teleport the agent can always
    // cast.  Real applications read these from their transport catalogs.
    let ferry = Transport {
        origin: Coord::new(1060, 1030, 0).packed(),
        destination: Coord::new(2000, 1030, 0).packed(),
        duration: 10,
    };
    let transports = vec![ferry];
    let teleports = vec![Teleport::new(Coord::new(2055, 1055, 0).packed(), "east ring")];
    let none: Vec<Transport> = Vec::new();

    // 1. Plain walk within the west island.
    let walk = Pathfinder::to_point(Arc::clone(&map), Coord::new(1050, 1050, 0).packed())
        .find(&world, &none, &Vec::<Teleport>::new())?;
    describe("walk west island", &walk);

    // 2. Crossing: the ferry competes with the teleport.
    let cross = Pathfinder::to_point(Arc::clone(&map), Coord::new(2005, 1030, 0).packed())
        .find(&world, &transports, &teleports)?;
    describe("cross to east dock", &cross);

    // 3. Far corner of the east island: the teleport should win.
    let corner = Pathfinder::to_point(Arc::clone(&map), Coord::new(2058, 1058, 0).packed())
        .find(&world, &transports, &teleports)?;
    describe("cross to east corner", &corner);

    Ok(())
}
