//! Circle-vs-rectangle via region classification
//!
//! The circle's center is located in one of eight zones around the rectangle.
//! Edge-middle zones reduce to rectangle-vs-rectangle with the circle's bounding
//! box; corner zones reduce to circle-vs-point against the nearest corner.

use crate::core::Vec2;
use crate::domain::{CollisionConfig, Region, Space, Sprite};

use super::hit_test::{hit_test_circle_point, hit_test_rectangle};
use super::resolve::{circle_point_collision, rectangle_collision};

/// Anchor-corrected edges of a rectangle
struct Edges {
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
    center_x: f32,
}

impl Edges {
    fn of(r: &Sprite, space: Space) -> Self {
        let c = r.center(space);
        let hw = r.half_width().abs();
        let hh = r.half_height().abs();
        Self {
            left: c.x - hw,
            right: c.x + hw,
            top: c.y - hh,
            bottom: c.y + hh,
            center_x: c.x,
        }
    }
}

/// Which zone around `r1` the center of `c1` occupies.
///
/// Corners are only chosen when the center is more than `tolerance` pixels past
/// the rectangle's left or right edge.
pub fn classify_region(c1: &Sprite, r1: &Sprite, space: Space, tolerance: f32) -> Region {
    let c = c1.center(space);
    let e = Edges::of(r1, space);

    let is_left = c.x < e.left - tolerance;
    let is_right = c.x > e.right + tolerance;

    if c.y < e.top {
        if is_left {
            Region::TopLeft
        } else if is_right {
            Region::TopRight
        } else {
            Region::TopMiddle
        }
    } else if c.y > e.bottom {
        if is_left {
            Region::BottomLeft
        } else if is_right {
            Region::BottomRight
        } else {
            Region::BottomMiddle
        }
    } else if c.x < e.center_x {
        Region::LeftMiddle
    } else {
        Region::RightMiddle
    }
}

/// Rectangle corner nearest to a corner region; `None` for middle regions
pub fn corner_point(region: Region, r1: &Sprite, space: Space) -> Option<Vec2> {
    let e = Edges::of(r1, space);
    match region {
        Region::TopLeft => Some(Vec2::new(e.left, e.top)),
        Region::TopRight => Some(Vec2::new(e.right, e.top)),
        Region::BottomLeft => Some(Vec2::new(e.left, e.bottom)),
        Region::BottomRight => Some(Vec2::new(e.right, e.bottom)),
        _ => None,
    }
}

/// Region of the hit, or `None` when the circle and rectangle do not overlap
pub fn hit_test_circle_rectangle(
    c1: &Sprite,
    r1: &Sprite,
    space: Space,
    config: &CollisionConfig,
) -> Option<Region> {
    let region = classify_region(c1, r1, space, config.corner_tolerance);

    let hit = match corner_point(region, r1, space) {
        None => hit_test_rectangle(c1, r1, space),
        Some(corner) => hit_test_circle_point(c1, corner, space),
    };

    hit.then_some(region)
}

/// Push `c1` out of `r1`; returns the region the circle was resolved from.
///
/// Only the circle moves.
pub fn circle_rectangle_collision(
    c1: &mut Sprite,
    r1: &Sprite,
    bounce: bool,
    space: Space,
    config: &CollisionConfig,
) -> Option<Region> {
    let region = classify_region(c1, r1, space, config.corner_tolerance);

    let hit = match corner_point(region, r1, space) {
        None => rectangle_collision(c1, r1, bounce, space).is_some(),
        Some(corner) => circle_point_collision(c1, corner, bounce, space, config),
    };

    hit.then_some(region)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball(cx: f32, cy: f32) -> Sprite {
        Sprite::circle(cx, cy, 10.0).with_anchor(0.5, 0.5)
    }

    fn block() -> Sprite {
        Sprite::rectangle(0.0, 0.0, 100.0, 100.0)
    }

    #[test]
    fn classifies_all_eight_regions() {
        let cases = [
            ((50.0, -10.0), Region::TopMiddle),
            ((-10.0, -10.0), Region::TopLeft),
            ((110.0, -10.0), Region::TopRight),
            ((-10.0, 50.0), Region::LeftMiddle),
            ((110.0, 50.0), Region::RightMiddle),
            ((-10.0, 110.0), Region::BottomLeft),
            ((50.0, 110.0), Region::BottomMiddle),
            ((110.0, 110.0), Region::BottomRight),
            ((60.0, 50.0), Region::RightMiddle),
        ];
        for ((x, y), expected) in cases {
            assert_eq!(classify_region(&ball(x, y), &block(), Space::Local, 1.0), expected, "at ({x}, {y})");
        }
    }

    #[test]
    fn tolerance_band_counts_as_middle() {
        assert_eq!(classify_region(&ball(-0.5, -3.0), &block(), Space::Local, 1.0), Region::TopMiddle);
        assert_eq!(classify_region(&ball(-1.5, -3.0), &block(), Space::Local, 1.0), Region::TopLeft);
        assert_eq!(classify_region(&ball(100.8, 103.0), &block(), Space::Local, 1.0), Region::BottomMiddle);
    }

    #[test]
    fn corner_hit_uses_point_test() {
        let cfg = CollisionConfig::default();
        assert_eq!(hit_test_circle_rectangle(&ball(-3.0, -3.0), &block(), Space::Local, &cfg), Some(Region::TopLeft));
        // bounding boxes overlap but the corner is out of reach
        assert_eq!(hit_test_circle_rectangle(&ball(-4.5, -4.5), &block(), Space::Local, &cfg), None);
    }

    #[test]
    fn middle_hit_uses_rectangle_test() {
        let cfg = CollisionConfig::default();
        assert_eq!(hit_test_circle_rectangle(&ball(50.0, -3.0), &block(), Space::Local, &cfg), Some(Region::TopMiddle));
        assert_eq!(hit_test_circle_rectangle(&ball(50.0, -5.0), &block(), Space::Local, &cfg), None);
    }

    #[test]
    fn resolves_edge_contact_like_a_rectangle() {
        let cfg = CollisionConfig::default();
        let mut c = ball(50.0, -3.0).with_velocity(0.0, 2.0);
        let r = block();

        assert_eq!(circle_rectangle_collision(&mut c, &r, true, Space::Local, &cfg), Some(Region::TopMiddle));
        assert_eq!(c.pos, Vec2::new(50.0, -5.0));
        assert_eq!(c.velocity, Vec2::new(0.0, -2.0));
        assert_eq!(r.pos, Vec2::zero());
    }

    #[test]
    fn resolves_corner_contact_diagonally() {
        let cfg = CollisionConfig::default();
        let mut c = ball(-3.0, -3.0);

        assert_eq!(circle_rectangle_collision(&mut c, &block(), false, Space::Local, &cfg), Some(Region::TopLeft));
        assert!((c.pos.x - c.pos.y).abs() < 1e-5);
        assert!(c.pos.x < -3.0);
        assert_eq!(hit_test_circle_rectangle(&c, &block(), Space::Local, &cfg), None);
    }
}
