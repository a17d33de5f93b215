//! Unit tests for nav-core primitives.

#[cfg(test)]
mod point {
    use crate::point::{Coord, PackedPoint, MAX_PLANE, MAX_X, MAX_Y};

    #[test]
    fn roundtrip_boundaries() {
        for &x in &[0, 1, 6000, 6001, MAX_X - 1, MAX_X] {
            for &y in &[0, 1, MAX_Y - 1, MAX_Y] {
                for plane in 0..=MAX_PLANE {
                    let p = PackedPoint::new(x, y, plane);
                    assert_eq!((p.x(), p.y(), p.plane()), (x, y, plane));
                }
            }
        }
    }

    #[test]
    fn roundtrip_strided_sweep() {
        // Full-product exhaustion is 2^32 cases; prime strides sample every
        // region of both fields instead (boundaries covered above).
        for x in (0..=MAX_X).step_by(73) {
            for y in (0..=MAX_Y).step_by(191) {
                for plane in 0..=MAX_PLANE {
                    let p = PackedPoint::new(x, y, plane);
                    assert_eq!(p.coord(), Coord::new(x, y, plane));
                }
            }
        }
    }

    #[test]
    fn offsets_match_repack() {
        let p = PackedPoint::new(3200, 3500, 2);
        assert_eq!(p.dx(1), PackedPoint::new(3201, 3500, 2));
        assert_eq!(p.dx(-1), PackedPoint::new(3199, 3500, 2));
        assert_eq!(p.dy(1), PackedPoint::new(3200, 3501, 2));
        assert_eq!(p.dy(-1), PackedPoint::new(3200, 3499, 2));
        assert_eq!(p.dxy(-1, 1), PackedPoint::new(3199, 3501, 2));
        assert_eq!(p.dxy(1, -1), PackedPoint::new(3201, 3499, 2));
    }

    #[test]
    fn scene_local_marker() {
        assert!(!PackedPoint::new(3200, 3200, 0).is_scene_local());
        assert!(!PackedPoint::new(6000, 3200, 0).is_scene_local());
        assert!(PackedPoint::new(6001, 3200, 0).is_scene_local());
    }

    #[test]
    fn chebyshev() {
        let a = Coord::new(10, 10, 0);
        assert_eq!(a.chebyshev(Coord::new(10, 10, 0)), 0);
        assert_eq!(a.chebyshev(Coord::new(13, 11, 0)), 3);
        assert_eq!(a.chebyshev(Coord::new(7, 2, 0)), 8);
    }

    #[test]
    fn display() {
        assert_eq!(PackedPoint::new(12, 34, 1).to_string(), "(12, 34, 1)");
    }
}

#[cfg(test)]
mod dir {
    use crate::dir::{Dir, TileFlags};
    use crate::point::PackedPoint;

    #[test]
    fn bits_are_distinct() {
        let mut seen = 0u8;
        for d in Dir::ALL {
            assert_eq!(seen & d.bit(), 0, "{d:?} bit reused");
            seen |= d.bit();
        }
        assert_eq!(seen, 0xFF);
    }

    #[test]
    fn neighbor_steps() {
        let p = PackedPoint::new(100, 200, 0);
        assert_eq!(Dir::West.neighbor(p), PackedPoint::new(99, 200, 0));
        assert_eq!(Dir::NorthEast.neighbor(p), PackedPoint::new(101, 201, 0));
        assert_eq!(Dir::South.neighbor(p), PackedPoint::new(100, 199, 0));
    }

    #[test]
    fn sentinels() {
        assert!(TileFlags::OPEN.is_open());
        assert!(TileFlags::BLOCKED.is_blocked());
        for d in Dir::ALL {
            assert!(TileFlags::OPEN.allows(d));
            assert!(!TileFlags::BLOCKED.allows(d));
        }
    }

    #[test]
    fn with_without() {
        let f = TileFlags::BLOCKED.with(Dir::North).with(Dir::East);
        assert!(f.allows(Dir::North));
        assert!(f.allows(Dir::East));
        assert!(!f.allows(Dir::West));
        assert!(!f.without(Dir::North).allows(Dir::North));
    }
}
