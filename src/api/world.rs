//! SpriteWorld - id-addressed sprite arena behind the wasm facade
//!
//! JS hosts cannot hand Rust references to their scene objects, so the facade
//! keeps a mirror of each host sprite here and the host syncs position and
//! velocity through ids.

use crate::core::Vec2;
use crate::domain::{Area, CollisionConfig, CollisionError, Outcome, SideSet, Space, Sprite};
use crate::engine::CollisionEngine;
use crate::systems::dispatch::HitOptions;
use crate::systems::pair_mut;

#[derive(Clone, Debug, Default)]
pub struct SpriteWorld {
    engine: CollisionEngine,
    sprites: Vec<Sprite>,
}

impl SpriteWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn engine(&self) -> &CollisionEngine {
        &self.engine
    }

    pub fn set_config_json(&mut self, json: &str) -> Result<(), CollisionError> {
        self.engine.set_config(CollisionConfig::from_json(json)?);
        Ok(())
    }

    pub fn config_json(&self) -> String {
        self.engine.config().to_json()
    }

    // === Sprites ===

    pub fn add_sprite(&mut self, sprite: Sprite) -> u32 {
        self.sprites.push(sprite);
        (self.sprites.len() - 1) as u32
    }

    pub fn sprite_count(&self) -> u32 {
        self.sprites.len() as u32
    }

    pub fn sprite(&self, id: u32) -> Result<&Sprite, CollisionError> {
        self.sprites.get(id as usize).ok_or(CollisionError::UnknownSprite(id))
    }

    pub fn sprite_mut(&mut self, id: u32) -> Result<&mut Sprite, CollisionError> {
        self.sprites.get_mut(id as usize).ok_or(CollisionError::UnknownSprite(id))
    }

    pub fn clear(&mut self) {
        self.sprites.clear();
    }

    pub fn sprites_json(&self) -> String {
        serde_json::to_string(&self.sprites).unwrap_or_else(|_| "[]".to_string())
    }

    /// Replace every sprite; ids are the positions in the JSON array
    pub fn load_sprites_json(&mut self, json: &str) -> Result<(), CollisionError> {
        let sprites: Vec<Sprite> = serde_json::from_str(json).map_err(|e| CollisionError::Config(e.to_string()))?;
        self.sprites = sprites;
        Ok(())
    }

    // === Collisions ===

    /// Dispatch one pair; `a` is the sprite that gets corrected
    pub fn hit(&mut self, a: u32, b: u32, options: &HitOptions) -> Result<Option<Outcome>, CollisionError> {
        self.sprite(a)?;
        self.sprite(b)?;
        if a == b {
            return Err(CollisionError::InvalidPairing { left: "a sprite", right: "itself" });
        }
        let (first, second) = pair_mut(&mut self.sprites, a as usize, b as usize);
        Ok(self.engine.test_pair(first, second, options))
    }

    pub fn hit_point(&self, point: Vec2, id: u32) -> Result<bool, CollisionError> {
        Ok(self.engine.hit_test_point(point, self.sprite(id)?))
    }

    /// Broadcast sprite `id` against every other sprite, highest id first
    pub fn hit_against_all(&mut self, id: u32, options: &HitOptions) -> Result<Vec<(u32, Outcome)>, CollisionError> {
        self.sprite(id)?;
        let mut contacts = Vec::new();
        for other in (0..self.sprites.len()).rev() {
            if other == id as usize {
                continue;
            }
            let (first, second) = pair_mut(&mut self.sprites, id as usize, other);
            if let Some(outcome) = self.engine.test_pair(first, second, options) {
                contacts.push((other as u32, outcome));
            }
        }
        Ok(contacts)
    }

    /// Elastic pass over every pair of circular sprites; returns colliding pairs
    pub fn multiple_circle_collision(&mut self, space: Space) -> u32 {
        let circles: Vec<usize> = (0..self.sprites.len())
            .filter(|&i| self.sprites[i].is_circular())
            .collect();
        let mut hits = 0;
        for (n, &i) in circles.iter().enumerate() {
            for &j in &circles[n + 1..] {
                let (c1, c2) = pair_mut(&mut self.sprites, i, j);
                if self.engine.moving_circle_collision(c1, c2, space) {
                    hits += 1;
                }
            }
        }
        hits
    }

    pub fn collide_all(&mut self, options: &HitOptions) -> Vec<(usize, usize, Outcome)> {
        self.engine.collide_all(&mut self.sprites, options)
    }

    pub fn overlapping_pairs(&self, space: Space) -> Vec<(usize, usize)> {
        self.engine.overlapping_pairs(&self.sprites, space)
    }

    pub fn contain(&mut self, id: u32, container: &Area, bounce: bool) -> Result<Option<SideSet>, CollisionError> {
        let engine = &self.engine;
        let sprite = self.sprites.get_mut(id as usize).ok_or(CollisionError::UnknownSprite(id))?;
        Ok(engine.contain(sprite, container, bounce))
    }

    pub fn outside_bounds(&self, id: u32, area: &Area) -> Result<Option<SideSet>, CollisionError> {
        Ok(self.engine.outside_bounds(self.sprite(id)?, area))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Side;

    #[test]
    fn ids_follow_insertion_order() {
        let mut world = SpriteWorld::new();
        assert_eq!(world.add_sprite(Sprite::rectangle(0.0, 0.0, 1.0, 1.0)), 0);
        assert_eq!(world.add_sprite(Sprite::circle(0.0, 0.0, 1.0)), 1);
        assert_eq!(world.sprite_count(), 2);
        assert_eq!(world.sprite(5), Err(CollisionError::UnknownSprite(5)));
    }

    #[test]
    fn hit_corrects_first_sprite_only() {
        let mut world = SpriteWorld::new();
        let wall = world.add_sprite(Sprite::rectangle(0.0, 0.0, 10.0, 10.0));
        let player = world.add_sprite(Sprite::rectangle(7.0, 1.0, 10.0, 10.0));

        let outcome = world.hit(player, wall, &HitOptions::react(false)).unwrap();
        assert_eq!(outcome, Some(Outcome::Side(Side::Left)));
        assert_eq!(world.sprite(player).unwrap().pos.x, 10.0);
        assert_eq!(world.sprite(wall).unwrap().pos.x, 0.0);
    }

    #[test]
    fn self_pairing_is_rejected() {
        let mut world = SpriteWorld::new();
        let id = world.add_sprite(Sprite::circle(0.0, 0.0, 4.0));
        assert!(matches!(world.hit(id, id, &HitOptions::detect()), Err(CollisionError::InvalidPairing { .. })));
    }

    #[test]
    fn hit_against_all_skips_self() {
        let mut world = SpriteWorld::new();
        world.add_sprite(Sprite::rectangle(0.0, 0.0, 10.0, 10.0));
        let probe = world.add_sprite(Sprite::rectangle(5.0, 5.0, 10.0, 10.0));
        world.add_sprite(Sprite::rectangle(9.0, 9.0, 10.0, 10.0));

        let contacts = world.hit_against_all(probe, &HitOptions::detect()).unwrap();
        assert_eq!(contacts, vec![(2, Outcome::Hit), (0, Outcome::Hit)]);
    }

    #[test]
    fn circle_pass_ignores_rectangles() {
        let mut world = SpriteWorld::new();
        world.add_sprite(Sprite::circle(0.0, 0.0, 10.0).with_velocity(1.0, 0.0));
        world.add_sprite(Sprite::rectangle(2.0, 0.0, 10.0, 10.0).with_velocity(5.0, 5.0));
        world.add_sprite(Sprite::circle(8.0, 0.0, 10.0).with_velocity(-1.0, 0.0));

        assert_eq!(world.multiple_circle_collision(Space::Local), 1);
        assert_eq!(world.sprite(1).unwrap().velocity, Vec2::new(5.0, 5.0));
        assert!((world.sprite(0).unwrap().velocity.x + 1.0).abs() < 1e-5);
    }

    #[test]
    fn snapshot_round_trip_keeps_ids() {
        let mut world = SpriteWorld::new();
        world.add_sprite(Sprite::circle(1.0, 2.0, 3.0).with_mass(2.0));
        world.add_sprite(Sprite::rectangle(4.0, 5.0, 6.0, 7.0).with_anchor(0.5, 0.5));
        let json = world.sprites_json();

        let mut restored = SpriteWorld::new();
        restored.load_sprites_json(&json).unwrap();
        assert_eq!(restored.sprite(1).unwrap(), world.sprite(1).unwrap());
        assert!(restored.load_sprites_json("{").is_err());
    }
}
