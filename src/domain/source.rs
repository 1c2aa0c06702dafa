//! Adapter between host scene objects and [`Sprite`] views.
//!
//! A host object (scene-graph node, ECS component, JS proxy) implements
//! [`SpriteSource`]; the engine derives a `Sprite` from it once, runs the
//! collision code on the sprite and writes position/velocity back.

use crate::core::Vec2;

use super::sprite::{Shape, Sprite};

pub trait SpriteSource {
    fn x(&self) -> f32;
    fn y(&self) -> f32;
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    /// Pivot fraction, if the host has that concept
    fn anchor(&self) -> Option<Vec2> {
        None
    }

    /// Global position of the host's parent
    fn parent_global(&self) -> Vec2 {
        Vec2::zero()
    }

    /// Circular hosts get a radius of `width / 2`
    fn circular(&self) -> bool {
        false
    }

    fn velocity(&self) -> Vec2 {
        Vec2::zero()
    }

    fn mass(&self) -> f32 {
        1.0
    }

    fn set_position(&mut self, x: f32, y: f32);

    fn set_velocity(&mut self, _vx: f32, _vy: f32) {}
}

impl Sprite {
    /// Derive the collision view of a host object
    pub fn from_source<S: SpriteSource + ?Sized>(source: &S) -> Self {
        let shape = if source.circular() {
            Shape::Circle { diameter: source.width() }
        } else {
            Shape::Rectangle { width: source.width(), height: source.height() }
        };
        Sprite {
            shape,
            pos: Vec2::new(source.x(), source.y()),
            anchor: source.anchor(),
            parent: source.parent_global(),
            velocity: source.velocity(),
            mass: source.mass(),
        }
    }

    /// Push the mutable state (position, velocity) back into the host
    pub fn write_back<S: SpriteSource + ?Sized>(&self, source: &mut S) {
        source.set_position(self.pos.x, self.pos.y);
        source.set_velocity(self.velocity.x, self.velocity.y);
    }
}
