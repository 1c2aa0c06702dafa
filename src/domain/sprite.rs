//! Sprite - the engine's view over a host object
//!
//! Holds only what collision needs: the shape kind with its source dimensions,
//! the local position, an optional anchor fraction, the parent's global position,
//! velocity and mass. Every derived attribute (half extents, radius, anchor offset,
//! global position, center) is recomputed from these fields on each read.

use serde::{Deserialize, Serialize};

use crate::core::Vec2;

/// Which coordinate space positions are read in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Space {
    /// Parent-relative `x, y`
    #[default]
    Local,
    /// Root coordinate space (`gx, gy`)
    Global,
}

impl Space {
    pub fn from_global_flag(global: bool) -> Self {
        if global { Space::Global } else { Space::Local }
    }
}

/// Shape kind with the dimensions that define it
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Rectangle { width: f32, height: f32 },
    /// Radius is always `diameter / 2`
    Circle { diameter: f32 },
    /// Degenerate circle of diameter 1 centered on its position
    Point,
}

impl Shape {
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Rectangle { .. } => "rectangle",
            Shape::Circle { .. } => "circle",
            Shape::Point => "point",
        }
    }
}

fn default_mass() -> f32 {
    1.0
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub shape: Shape,
    /// Local position (top-left, or the anchor point when `anchor` is set)
    pub pos: Vec2,
    /// Pivot as a fraction of the sprite's size
    #[serde(default)]
    pub anchor: Option<Vec2>,
    /// Global position of the parent; zero when there is no ancestor chain
    #[serde(default)]
    pub parent: Vec2,
    #[serde(default)]
    pub velocity: Vec2,
    #[serde(default = "default_mass")]
    pub mass: f32,
}

impl Sprite {
    fn with_shape(shape: Shape, x: f32, y: f32) -> Self {
        Self {
            shape,
            pos: Vec2::new(x, y),
            anchor: None,
            parent: Vec2::zero(),
            velocity: Vec2::zero(),
            mass: default_mass(),
        }
    }

    pub fn rectangle(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::with_shape(Shape::Rectangle { width, height }, x, y)
    }

    pub fn circle(x: f32, y: f32, diameter: f32) -> Self {
        Self::with_shape(Shape::Circle { diameter }, x, y)
    }

    pub fn point(x: f32, y: f32) -> Self {
        Self::with_shape(Shape::Point, x, y)
    }

    pub fn with_anchor(mut self, ax: f32, ay: f32) -> Self {
        self.anchor = Some(Vec2::new(ax, ay));
        self
    }

    pub fn with_parent(mut self, gx: f32, gy: f32) -> Self {
        self.parent = Vec2::new(gx, gy);
        self
    }

    pub fn with_velocity(mut self, vx: f32, vy: f32) -> Self {
        self.velocity = Vec2::new(vx, vy);
        self
    }

    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    // === Derived attributes ===

    pub fn width(&self) -> f32 {
        match self.shape {
            Shape::Rectangle { width, .. } => width,
            Shape::Circle { diameter } => diameter,
            Shape::Point => 1.0,
        }
    }

    pub fn height(&self) -> f32 {
        match self.shape {
            Shape::Rectangle { height, .. } => height,
            Shape::Circle { diameter } => diameter,
            Shape::Point => 1.0,
        }
    }

    pub fn half_width(&self) -> f32 {
        self.width() / 2.0
    }

    pub fn half_height(&self) -> f32 {
        self.height() / 2.0
    }

    /// Circles and points carry a radius; rectangles never do.
    pub fn is_circular(&self) -> bool {
        !matches!(self.shape, Shape::Rectangle { .. })
    }

    pub fn radius(&self) -> Option<f32> {
        self.is_circular().then(|| self.width() / 2.0)
    }

    /// Pixel displacement of the true top-left from `pos`
    pub fn anchor_offset(&self) -> Vec2 {
        match (self.shape, self.anchor) {
            (Shape::Point, _) | (_, None) => Vec2::zero(),
            (_, Some(a)) => Vec2::new(self.width() * a.x, self.height() * a.y),
        }
    }

    pub fn global_position(&self) -> Vec2 {
        match self.shape {
            Shape::Point => self.pos,
            _ => self.parent + self.pos,
        }
    }

    pub fn origin(&self, space: Space) -> Vec2 {
        match space {
            Space::Local => self.pos,
            Space::Global => self.global_position(),
        }
    }

    /// Anchor-corrected top-left corner
    pub fn top_left(&self, space: Space) -> Vec2 {
        self.origin(space) - self.anchor_offset()
    }

    pub fn center(&self, space: Space) -> Vec2 {
        match self.shape {
            Shape::Point => self.pos,
            _ => {
                self.top_left(space)
                    + Vec2::new(self.half_width().abs(), self.half_height().abs())
            }
        }
    }

    /// Mass used by the resolvers; missing or non-positive mass counts as 1
    pub fn effective_mass(&self) -> f32 {
        if self.mass.is_finite() && self.mass > 0.0 {
            self.mass
        } else {
            default_mass()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_follows_width() {
        let mut c = Sprite::circle(0.0, 0.0, 10.0);
        assert_eq!(c.radius(), Some(5.0));
        c.shape = Shape::Circle { diameter: 30.0 };
        assert_eq!(c.radius(), Some(15.0));
        assert_eq!(Sprite::rectangle(0.0, 0.0, 10.0, 10.0).radius(), None);
        assert_eq!(Sprite::point(3.0, 4.0).radius(), Some(0.5));
    }

    #[test]
    fn anchor_offset_scales_with_size() {
        let r = Sprite::rectangle(50.0, 50.0, 20.0, 40.0).with_anchor(0.5, 0.25);
        assert_eq!(r.anchor_offset(), Vec2::new(10.0, 10.0));
        assert_eq!(r.top_left(Space::Local), Vec2::new(40.0, 40.0));
        assert_eq!(r.center(Space::Local), Vec2::new(50.0, 60.0));
        assert_eq!(Sprite::rectangle(0.0, 0.0, 20.0, 40.0).anchor_offset(), Vec2::zero());
    }

    #[test]
    fn global_position_adds_parent() {
        let r = Sprite::rectangle(5.0, 5.0, 10.0, 10.0).with_parent(100.0, 200.0);
        assert_eq!(r.global_position(), Vec2::new(105.0, 205.0));
        assert_eq!(r.center(Space::Global), Vec2::new(110.0, 210.0));
        assert_eq!(r.center(Space::Local), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn point_is_centered_on_position() {
        let p = Sprite::point(7.0, 9.0).with_parent(100.0, 100.0);
        assert_eq!(p.center(Space::Local), Vec2::new(7.0, 9.0));
        assert_eq!(p.center(Space::Global), Vec2::new(7.0, 9.0));
        assert_eq!(p.anchor_offset(), Vec2::zero());
    }

    #[test]
    fn missing_mass_defaults_to_one() {
        assert_eq!(Sprite::circle(0.0, 0.0, 2.0).with_mass(0.0).effective_mass(), 1.0);
        assert_eq!(Sprite::circle(0.0, 0.0, 2.0).with_mass(f32::NAN).effective_mass(), 1.0);
        assert_eq!(Sprite::circle(0.0, 0.0, 2.0).with_mass(3.0).effective_mass(), 3.0);
    }

    #[test]
    fn deserializes_with_defaults() {
        let s: Sprite =
            serde_json::from_str(r#"{"shape":{"kind":"circle","diameter":8},"pos":{"x":1,"y":2}}"#)
                .unwrap();
        assert_eq!(s, Sprite::circle(1.0, 2.0, 8.0));
    }
}
