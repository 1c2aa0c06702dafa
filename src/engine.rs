//! CollisionEngine - configured entry point
//!
//! Owns the tunables and delegates every operation to the systems modules.
//! It keeps no per-sprite state: all mutation happens on the sprites passed in.

use crate::core::Vec2;
use crate::domain::{Area, CollisionConfig, CollisionError, Outcome, Region, Side, SideSet, Space, Sprite};
use crate::systems::dispatch::{self, HitOptions, Operand, Report};
use crate::systems::{containment, hit_test, region, resolve};

#[derive(Clone, Debug, Default)]
pub struct CollisionEngine {
    config: CollisionConfig,
}

impl CollisionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CollisionConfig) -> Self {
        Self { config }
    }

    pub fn from_config_json(json: &str) -> Result<Self, CollisionError> {
        Ok(Self::with_config(CollisionConfig::from_json(json)?))
    }

    pub fn config(&self) -> &CollisionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: CollisionConfig) {
        self.config = config;
    }

    pub fn set_padding(&mut self, padding: f32) {
        self.config.padding = padding.max(0.0);
    }

    pub fn set_corner_tolerance(&mut self, tolerance: f32) {
        self.config.corner_tolerance = tolerance.max(0.0);
    }

    // === Hit tests ===

    pub fn hit_test_point(&self, point: Vec2, sprite: &Sprite) -> bool {
        hit_test::hit_test_point(point, sprite)
    }

    pub fn hit_test_circle(&self, c1: &Sprite, c2: &Sprite, space: Space) -> bool {
        hit_test::hit_test_circle(c1, c2, space)
    }

    pub fn hit_test_circle_point(&self, c1: &Sprite, point: Vec2, space: Space) -> bool {
        hit_test::hit_test_circle_point(c1, point, space)
    }

    pub fn hit_test_rectangle(&self, r1: &Sprite, r2: &Sprite, space: Space) -> bool {
        hit_test::hit_test_rectangle(r1, r2, space)
    }

    pub fn hit_test_circle_rectangle(&self, c1: &Sprite, r1: &Sprite, space: Space) -> Option<Region> {
        region::hit_test_circle_rectangle(c1, r1, space, &self.config)
    }

    pub fn classify_region(&self, c1: &Sprite, r1: &Sprite, space: Space) -> Region {
        region::classify_region(c1, r1, space, self.config.corner_tolerance)
    }

    // === Resolvers ===

    pub fn circle_collision(&self, c1: &mut Sprite, c2: &Sprite, bounce: bool, space: Space) -> bool {
        resolve::circle_collision(c1, c2, bounce, space, &self.config)
    }

    pub fn circle_point_collision(&self, c1: &mut Sprite, point: Vec2, bounce: bool, space: Space) -> bool {
        resolve::circle_point_collision(c1, point, bounce, space, &self.config)
    }

    pub fn moving_circle_collision(&self, c1: &mut Sprite, c2: &mut Sprite, space: Space) -> bool {
        resolve::moving_circle_collision(c1, c2, space, &self.config)
    }

    pub fn multiple_circle_collision(&self, circles: &mut [Sprite], space: Space) -> usize {
        resolve::multiple_circle_collision(circles, space, &self.config)
    }

    pub fn rectangle_collision(&self, r1: &mut Sprite, r2: &Sprite, bounce: bool, space: Space) -> Option<Side> {
        resolve::rectangle_collision(r1, r2, bounce, space)
    }

    pub fn circle_rectangle_collision(
        &self,
        c1: &mut Sprite,
        r1: &Sprite,
        bounce: bool,
        space: Space,
    ) -> Option<Region> {
        region::circle_rectangle_collision(c1, r1, bounce, space, &self.config)
    }

    pub fn bounce_off_surface(&self, sprite: &mut Sprite, surface: Vec2) {
        resolve::bounce_off_surface(sprite, surface)
    }

    // === Containment ===

    pub fn contain(&self, sprite: &mut Sprite, container: &Area, bounce: bool) -> Option<SideSet> {
        containment::contain(sprite, container, bounce)
    }

    pub fn contain_with<F: FnOnce(SideSet)>(
        &self,
        sprite: &mut Sprite,
        container: &Area,
        bounce: bool,
        on_contact: F,
    ) -> Option<SideSet> {
        containment::contain_with(sprite, container, bounce, on_contact)
    }

    pub fn outside_bounds(&self, sprite: &Sprite, area: &Area) -> Option<SideSet> {
        containment::outside_bounds(sprite, area)
    }

    pub fn outside_bounds_with<F: FnOnce(SideSet)>(&self, sprite: &Sprite, area: &Area, on_exit: F) -> Option<SideSet> {
        containment::outside_bounds_with(sprite, area, on_exit)
    }

    // === Dispatch ===

    pub fn hit(&self, a: Operand<'_>, b: Operand<'_>, options: &HitOptions) -> Result<Report, CollisionError> {
        dispatch::hit(a, b, options, &self.config)
    }

    pub fn hit_with<F>(
        &self,
        a: Operand<'_>,
        b: Operand<'_>,
        options: &HitOptions,
        extra: F,
    ) -> Result<Report, CollisionError>
    where
        F: FnMut(Outcome, Option<usize>),
    {
        dispatch::hit_with(a, b, options, &self.config, extra)
    }

    pub fn test_pair(&self, a: &mut Sprite, b: &mut Sprite, options: &HitOptions) -> Option<Outcome> {
        dispatch::test_pair(a, b, options, &self.config)
    }

    pub fn collide_all(&self, sprites: &mut [Sprite], options: &HitOptions) -> Vec<(usize, usize, Outcome)> {
        dispatch::collide_all(sprites, options, &self.config)
    }

    pub fn overlapping_pairs(&self, sprites: &[Sprite], space: Space) -> Vec<(usize, usize)> {
        dispatch::overlapping_pairs(sprites, space, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_comes_from_config() {
        let engine = CollisionEngine::from_config_json(r#"{"padding":1.0}"#).unwrap();
        let mut c1 = Sprite::circle(0.0, 0.0, 10.0);
        let c2 = Sprite::circle(8.0, 0.0, 10.0);
        assert!(engine.circle_collision(&mut c1, &c2, false, Space::Local));
        assert!((c1.pos.x + 3.0).abs() < 1e-5);
    }

    #[test]
    fn setters_clamp_negative_values() {
        let mut engine = CollisionEngine::new();
        engine.set_padding(-2.0);
        engine.set_corner_tolerance(-1.0);
        assert_eq!(engine.config().padding, 0.0);
        assert_eq!(engine.config().corner_tolerance, 0.0);
    }

    #[test]
    fn tolerance_changes_region() {
        let mut engine = CollisionEngine::new();
        let ball = Sprite::circle(-3.0, -10.0, 4.0).with_anchor(0.5, 0.5);
        let block = Sprite::rectangle(0.0, 0.0, 100.0, 100.0);
        assert_eq!(engine.classify_region(&ball, &block, Space::Local), Region::TopLeft);
        engine.set_corner_tolerance(5.0);
        assert_eq!(engine.classify_region(&ball, &block, Space::Local), Region::TopMiddle);
    }
}
