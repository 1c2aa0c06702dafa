use crate::core::Vec2;
use crate::domain::{CollisionConfig, Space, Sprite};
use crate::systems::hit_test::circle_radius;
use crate::systems::pair_mut;

use super::bounce::bounce_off_surface;

/// Normal fallback when two centers coincide
const COINCIDENT_NORMAL: Vec2 = Vec2::new(1.0, 0.0);

/// Unit vector from `c1` to `c2`, or [`COINCIDENT_NORMAL`] at zero distance
fn contact_normal(v: Vec2, magnitude: f32) -> Vec2 {
    if magnitude > 0.0 {
        v / magnitude
    } else {
        debug_warn!("circle centers coincide, separating along +x");
        COINCIDENT_NORMAL
    }
}

/// Push `c1` out of `c2` along the line between their centers.
///
/// Only `c1` moves. With `bounce`, `c1`'s velocity is reflected off the
/// surface tangent at the contact. Returns whether the circles overlapped.
pub fn circle_collision(
    c1: &mut Sprite,
    c2: &Sprite,
    bounce: bool,
    space: Space,
    config: &CollisionConfig,
) -> bool {
    let v = c2.center(space) - c1.center(space);
    let magnitude = v.length();
    let combined_radii = circle_radius(c1) + circle_radius(c2);

    if !(magnitude < combined_radii) {
        return false;
    }

    let overlap = combined_radii - magnitude + config.padding;
    let normal = contact_normal(v, magnitude);

    c1.pos -= normal * overlap;

    if bounce {
        bounce_off_surface(c1, normal.perp());
    }
    true
}

/// [`circle_collision`] against a diameter-1 point shape
pub fn circle_point_collision(
    c1: &mut Sprite,
    point: Vec2,
    bounce: bool,
    space: Space,
    config: &CollisionConfig,
) -> bool {
    circle_collision(c1, &Sprite::point(point.x, point.y), bounce, space, config)
}

/// Elastic collision between two moving circles.
///
/// Both circles are pushed apart by half the padded overlap. Along the contact
/// normal the two bodies swap velocity components; tangential components pass
/// through. Each result is divided by the receiving body's mass.
pub fn moving_circle_collision(
    c1: &mut Sprite,
    c2: &mut Sprite,
    space: Space,
    config: &CollisionConfig,
) -> bool {
    let s = c2.center(space) - c1.center(space);
    let magnitude = s.length();
    let combined_radii = circle_radius(c1) + circle_radius(c2);

    if !(magnitude < combined_radii) {
        return false;
    }

    let overlap = combined_radii - magnitude + config.padding;
    let normal = contact_normal(s, magnitude);
    let half = normal * (overlap / 2.0);

    c1.pos -= half;
    c2.pos += half;

    let tangent = normal.perp();

    let (v1, v2) = (c1.velocity, c2.velocity);
    let v1_normal = v1.project_onto(normal);
    let v1_tangent = v1.project_onto(tangent);
    let v2_normal = v2.project_onto(normal);
    let v2_tangent = v2.project_onto(tangent);

    c1.velocity = (v1_tangent + v2_normal) / c1.effective_mass();
    c2.velocity = (v1_normal + v2_tangent) / c2.effective_mass();
    true
}

/// Run [`moving_circle_collision`] over every unordered pair, `i < j`.
///
/// Returns the number of colliding pairs.
pub fn multiple_circle_collision(
    circles: &mut [Sprite],
    space: Space,
    config: &CollisionConfig,
) -> usize {
    let mut hits = 0;
    for i in 0..circles.len() {
        for j in (i + 1)..circles.len() {
            let (c1, c2) = pair_mut(circles, i, j);
            if moving_circle_collision(c1, c2, space, config) {
                hits += 1;
            }
        }
    }
    hits
}
