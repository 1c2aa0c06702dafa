use crate::domain::{Side, Space, Sprite};
use crate::systems::hit_test::rect_separation;

/// Separate `r1` from `r2` along the axis of smaller overlap.
///
/// Only `r1` moves. Ties resolve vertically. The returned side is the side of
/// `r1` that was hit; with `bounce` the matching velocity component of `r1` is
/// inverted (no mass division).
pub fn rectangle_collision(r1: &mut Sprite, r2: &Sprite, bounce: bool, space: Space) -> Option<Side> {
    let sep = rect_separation(r1, r2, space);
    let d = sep.distance;

    if !(d.x.abs() < sep.combined_half.x && d.y.abs() < sep.combined_half.y) {
        return None;
    }

    let overlap = sep.combined_half - d.abs();

    let side = if overlap.x >= overlap.y {
        let side = if d.y > 0.0 {
            r1.pos.y += overlap.y;
            Side::Top
        } else {
            r1.pos.y -= overlap.y;
            Side::Bottom
        };
        if bounce {
            r1.velocity.y = -r1.velocity.y;
        }
        side
    } else {
        let side = if d.x > 0.0 {
            r1.pos.x += overlap.x;
            Side::Left
        } else {
            r1.pos.x -= overlap.x;
            Side::Right
        };
        if bounce {
            r1.velocity.x = -r1.velocity.x;
        }
        side
    };

    Some(side)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vec2;
    use crate::systems::hit_test::hit_test_rectangle;

    #[test]
    fn resolves_along_smaller_overlap() {
        // overlap x = 8, overlap y = 2: push r1 up
        let mut r1 = Sprite::rectangle(2.0, -8.0, 10.0, 10.0);
        let r2 = Sprite::rectangle(0.0, 0.0, 10.0, 10.0);

        assert_eq!(rectangle_collision(&mut r1, &r2, false, Space::Local), Some(Side::Bottom));
        assert_eq!(r1.pos, Vec2::new(2.0, -10.0));
        assert!(!hit_test_rectangle(&r1, &r2, Space::Local));
    }

    #[test]
    fn horizontal_resolution_tags_left_and_right() {
        let r2 = Sprite::rectangle(0.0, 0.0, 10.0, 10.0);

        let mut from_right = Sprite::rectangle(7.0, 1.0, 10.0, 10.0);
        assert_eq!(rectangle_collision(&mut from_right, &r2, false, Space::Local), Some(Side::Left));
        assert_eq!(from_right.pos.x, 10.0);

        let mut from_left = Sprite::rectangle(-7.0, 1.0, 10.0, 10.0);
        assert_eq!(rectangle_collision(&mut from_left, &r2, false, Space::Local), Some(Side::Right));
        assert_eq!(from_left.pos.x, -10.0);
    }

    #[test]
    fn equal_overlap_resolves_vertically() {
        let mut r1 = Sprite::rectangle(5.0, 5.0, 10.0, 10.0);
        let r2 = Sprite::rectangle(0.0, 0.0, 10.0, 10.0);
        assert_eq!(rectangle_collision(&mut r1, &r2, false, Space::Local), Some(Side::Top));
        assert_eq!(r1.pos, Vec2::new(5.0, 10.0));
    }

    #[test]
    fn bounce_inverts_only_resolved_axis() {
        let mut r1 = Sprite::rectangle(2.0, 7.0, 10.0, 10.0).with_velocity(1.5, -3.0).with_mass(4.0);
        let r2 = Sprite::rectangle(0.0, 0.0, 10.0, 10.0);

        assert_eq!(rectangle_collision(&mut r1, &r2, true, Space::Local), Some(Side::Top));
        assert_eq!(r1.velocity, Vec2::new(1.5, 3.0));
    }

    #[test]
    fn no_overlap_leaves_sprite_alone() {
        let mut r1 = Sprite::rectangle(20.0, 0.0, 10.0, 10.0).with_velocity(1.0, 1.0);
        let r2 = Sprite::rectangle(0.0, 0.0, 10.0, 10.0);
        assert_eq!(rectangle_collision(&mut r1, &r2, true, Space::Local), None);
        assert_eq!(r1.pos, Vec2::new(20.0, 0.0));
        assert_eq!(r1.velocity, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn global_space_uses_parent_offset() {
        let mut r1 = Sprite::rectangle(-95.0, 0.0, 10.0, 10.0).with_parent(100.0, 0.0);
        let r2 = Sprite::rectangle(0.0, 0.0, 10.0, 10.0);
        assert_eq!(rectangle_collision(&mut r1, &r2, false, Space::Local), None);
        assert_eq!(rectangle_collision(&mut r1, &r2, false, Space::Global), Some(Side::Left));
        assert_eq!(r1.pos.x, -90.0);
    }
}
