//! Playable region derived from border geometry
//!
//! The arena is described by a set of axis-aligned border rectangles. Their
//! union, shrunk by a padding inset, is the rectangle every entity is
//! clamped into. Computed once at session start and immutable afterwards.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// An axis-aligned border rectangle, as supplied by the scene
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }
}

/// The playable region
///
/// `Unconstrained` is a real lifecycle state, not an error: a scene with no
/// border geometry simply runs without clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Boundary {
    Bounded { min: Vec2, max: Vec2 },
    Unconstrained,
}

impl Boundary {
    /// Compute the region from border geometry.
    ///
    /// The region is the bounding box of all borders, inset by `padding` on
    /// every side. Zero borders yields `Unconstrained` with a warning. An
    /// inset wider than the union collapses that axis to its midpoint, so
    /// `min <= max` always holds and sampling stays well-defined.
    pub fn compute(borders: &[Rect], padding: f32) -> Self {
        if borders.is_empty() {
            log::warn!("no border geometry supplied; movement is unconstrained");
            return Boundary::Unconstrained;
        }

        let mut lo = Vec2::splat(f32::MAX);
        let mut hi = Vec2::splat(f32::MIN);
        for border in borders {
            lo = lo.min(border.min);
            hi = hi.max(border.max);
        }

        let mut min = lo + Vec2::splat(padding);
        let mut max = hi - Vec2::splat(padding);
        if min.x > max.x {
            let mid = (lo.x + hi.x) * 0.5;
            log::warn!("padding {padding} exceeds arena width; collapsing x to {mid}");
            min.x = mid;
            max.x = mid;
        }
        if min.y > max.y {
            let mid = (lo.y + hi.y) * 0.5;
            log::warn!("padding {padding} exceeds arena height; collapsing y to {mid}");
            min.y = mid;
            max.y = mid;
        }

        Boundary::Bounded { min, max }
    }

    /// Nearest point inside the region, component-wise. Identity when
    /// unconstrained. Idempotent: `clamp(clamp(p)) == clamp(p)`.
    pub fn clamp(&self, point: Vec2) -> Vec2 {
        match *self {
            Boundary::Bounded { min, max } => point.clamp(min, max),
            Boundary::Unconstrained => point,
        }
    }

    /// Uniformly sampled interior point, or `None` when unconstrained.
    /// Callers must handle the `None` case.
    pub fn random_interior(&self, rng: &mut Pcg32) -> Option<Vec2> {
        match *self {
            Boundary::Bounded { min, max } => Some(Vec2::new(
                rng.random_range(min.x..=max.x),
                rng.random_range(min.y..=max.y),
            )),
            Boundary::Unconstrained => None,
        }
    }

    /// Midpoint of the region (origin when unconstrained). Used as the
    /// fixed spawn point for wandering enemies.
    pub fn center(&self) -> Vec2 {
        match *self {
            Boundary::Bounded { min, max } => (min + max) * 0.5,
            Boundary::Unconstrained => Vec2::ZERO,
        }
    }

    pub fn is_unconstrained(&self) -> bool {
        matches!(self, Boundary::Unconstrained)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    fn arena() -> Boundary {
        Boundary::compute(
            &[
                Rect::new(Vec2::new(-10.0, -8.0), Vec2::new(-9.0, 8.0)),
                Rect::new(Vec2::new(9.0, -8.0), Vec2::new(10.0, 8.0)),
            ],
            0.5,
        )
    }

    #[test]
    fn test_compute_unions_borders_and_applies_padding() {
        match arena() {
            Boundary::Bounded { min, max } => {
                assert_eq!(min, Vec2::new(-9.5, -7.5));
                assert_eq!(max, Vec2::new(9.5, 7.5));
            }
            Boundary::Unconstrained => panic!("expected bounded region"),
        }
    }

    #[test]
    fn test_no_borders_is_unconstrained() {
        let boundary = Boundary::compute(&[], 1.0);
        assert!(boundary.is_unconstrained());
        // Clamp is identity and sampling refuses
        let p = Vec2::new(1234.0, -9999.0);
        assert_eq!(boundary.clamp(p), p);
        let mut rng = Pcg32::seed_from_u64(7);
        assert_eq!(boundary.random_interior(&mut rng), None);
    }

    #[test]
    fn test_oversized_padding_collapses_to_midpoint() {
        // Arena 0.5 wide and 0.5 tall, padding 1.0: both axes collapse
        let boundary = Boundary::compute(
            &[Rect::new(Vec2::new(2.0, 4.0), Vec2::new(2.5, 4.5))],
            1.0,
        );
        let expected = Vec2::new(2.25, 4.25);
        match boundary {
            Boundary::Bounded { min, max } => {
                assert_eq!(min, expected);
                assert_eq!(max, expected);
            }
            Boundary::Unconstrained => panic!("expected bounded region"),
        }

        // Sampling and clamping stay well-defined on the degenerate region
        let mut rng = Pcg32::seed_from_u64(5);
        assert_eq!(boundary.random_interior(&mut rng), Some(expected));
        assert_eq!(boundary.clamp(Vec2::new(100.0, -100.0)), expected);
        assert_eq!(boundary.center(), expected);
    }

    #[test]
    fn test_padding_collapses_thin_axis_only() {
        // 20 wide but only 1 tall with padding 0.75: y collapses, x shrinks
        let boundary = Boundary::compute(
            &[Rect::new(Vec2::new(-10.0, -0.5), Vec2::new(10.0, 0.5))],
            0.75,
        );
        match boundary {
            Boundary::Bounded { min, max } => {
                assert_eq!(min, Vec2::new(-9.25, 0.0));
                assert_eq!(max, Vec2::new(9.25, 0.0));
            }
            Boundary::Unconstrained => panic!("expected bounded region"),
        }
    }

    #[test]
    fn test_borders_parse_from_json() {
        let json = r#"[
            {"min": [-10.0, -8.0], "max": [-9.0, 8.0]},
            {"min": [9.0, -8.0], "max": [10.0, 8.0]}
        ]"#;
        let borders: Vec<Rect> = serde_json::from_str(json).unwrap();
        assert_eq!(Boundary::compute(&borders, 0.5), arena());
    }

    #[test]
    fn test_random_interior_stays_inside() {
        let boundary = arena();
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..200 {
            let p = boundary.random_interior(&mut rng).unwrap();
            assert_eq!(boundary.clamp(p), p);
        }
    }

    #[test]
    fn test_center() {
        assert_eq!(arena().center(), Vec2::ZERO);
        assert_eq!(Boundary::Unconstrained.center(), Vec2::ZERO);
    }

    proptest! {
        #[test]
        fn prop_clamp_is_bounded_and_idempotent(
            x in -1000.0f32..1000.0,
            y in -1000.0f32..1000.0,
        ) {
            let boundary = arena();
            let clamped = boundary.clamp(Vec2::new(x, y));
            match boundary {
                Boundary::Bounded { min, max } => {
                    prop_assert!(clamped.x >= min.x && clamped.x <= max.x);
                    prop_assert!(clamped.y >= min.y && clamped.y <= max.y);
                }
                Boundary::Unconstrained => unreachable!(),
            }
            prop_assert_eq!(boundary.clamp(clamped), clamped);
        }
    }
}
