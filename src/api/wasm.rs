use wasm_bindgen::prelude::*;

use crate::core::Vec2;
use crate::domain::{Area, CollisionError, SideSet, Space, Sprite};
use crate::systems::dispatch::HitOptions;

use super::world::SpriteWorld;

fn to_js(err: CollisionError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn sides_json(sides: Option<SideSet>) -> Option<String> {
    sides.and_then(|s| serde_json::to_string(&s).ok())
}

fn options(react: bool, bounce: bool, global: bool) -> HitOptions {
    HitOptions { react, bounce, space: Space::from_global_flag(global) }
}

#[wasm_bindgen]
pub struct CollisionWorld {
    core: SpriteWorld,
}

#[wasm_bindgen]
impl CollisionWorld {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { core: SpriteWorld::new() }
    }

    #[wasm_bindgen(getter)]
    pub fn sprite_count(&self) -> u32 {
        self.core.sprite_count()
    }

    pub fn set_config_json(&mut self, json: String) -> Result<(), JsValue> {
        self.core.set_config_json(&json).map_err(to_js)
    }

    pub fn get_config_json(&self) -> String {
        self.core.config_json()
    }

    // === SPRITES ===

    /// Add a rectangle; returns its id
    pub fn add_rectangle(&mut self, x: f32, y: f32, width: f32, height: f32) -> u32 {
        self.core.add_sprite(Sprite::rectangle(x, y, width, height))
    }

    /// Add a circle; returns its id
    pub fn add_circle(&mut self, x: f32, y: f32, diameter: f32) -> u32 {
        self.core.add_sprite(Sprite::circle(x, y, diameter))
    }

    pub fn set_position(&mut self, id: u32, x: f32, y: f32) -> Result<(), JsValue> {
        self.core.sprite_mut(id).map_err(to_js)?.pos = Vec2::new(x, y);
        Ok(())
    }

    pub fn set_velocity(&mut self, id: u32, vx: f32, vy: f32) -> Result<(), JsValue> {
        self.core.sprite_mut(id).map_err(to_js)?.velocity = Vec2::new(vx, vy);
        Ok(())
    }

    pub fn set_anchor(&mut self, id: u32, ax: f32, ay: f32) -> Result<(), JsValue> {
        self.core.sprite_mut(id).map_err(to_js)?.anchor = Some(Vec2::new(ax, ay));
        Ok(())
    }

    pub fn set_parent(&mut self, id: u32, gx: f32, gy: f32) -> Result<(), JsValue> {
        self.core.sprite_mut(id).map_err(to_js)?.parent = Vec2::new(gx, gy);
        Ok(())
    }

    pub fn set_mass(&mut self, id: u32, mass: f32) -> Result<(), JsValue> {
        self.core.sprite_mut(id).map_err(to_js)?.mass = mass;
        Ok(())
    }

    pub fn x(&self, id: u32) -> Result<f32, JsValue> {
        Ok(self.core.sprite(id).map_err(to_js)?.pos.x)
    }

    pub fn y(&self, id: u32) -> Result<f32, JsValue> {
        Ok(self.core.sprite(id).map_err(to_js)?.pos.y)
    }

    pub fn vx(&self, id: u32) -> Result<f32, JsValue> {
        Ok(self.core.sprite(id).map_err(to_js)?.velocity.x)
    }

    pub fn vy(&self, id: u32) -> Result<f32, JsValue> {
        Ok(self.core.sprite(id).map_err(to_js)?.velocity.y)
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    pub fn sprites_json(&self) -> String {
        self.core.sprites_json()
    }

    pub fn load_sprites_json(&mut self, json: String) -> Result<(), JsValue> {
        self.core.load_sprites_json(&json).map_err(to_js)
    }

    // === COLLISIONS ===

    /// Test or resolve `a` against `b`.
    /// Returns `"hit"`, a side or a region name, or `undefined` when nothing collided.
    pub fn hit(&mut self, a: u32, b: u32, react: bool, bounce: bool, global: bool) -> Result<Option<String>, JsValue> {
        let outcome = self.core.hit(a, b, &options(react, bounce, global)).map_err(to_js)?;
        Ok(outcome.map(|o| o.tag().to_string()))
    }

    pub fn hit_point(&self, x: f32, y: f32, id: u32) -> Result<bool, JsValue> {
        self.core.hit_point(Vec2::new(x, y), id).map_err(to_js)
    }

    /// Ids of every sprite that `id` collided with, highest id first
    pub fn hit_against_all(&mut self, id: u32, react: bool, bounce: bool, global: bool) -> Result<Vec<u32>, JsValue> {
        let contacts = self
            .core
            .hit_against_all(id, &options(react, bounce, global))
            .map_err(to_js)?;
        Ok(contacts.into_iter().map(|(other, _)| other).collect())
    }

    /// Like `hit_against_all`, calling `callback(tag, otherId)` per collision
    pub fn hit_each(
        &mut self,
        id: u32,
        react: bool,
        bounce: bool,
        global: bool,
        callback: &js_sys::Function,
    ) -> Result<u32, JsValue> {
        let contacts = self
            .core
            .hit_against_all(id, &options(react, bounce, global))
            .map_err(to_js)?;
        for (other, outcome) in &contacts {
            callback.call2(&JsValue::NULL, &JsValue::from_str(outcome.tag()), &JsValue::from(*other))?;
        }
        Ok(contacts.len() as u32)
    }

    pub fn multiple_circle_collision(&mut self, global: bool) -> u32 {
        self.core.multiple_circle_collision(Space::from_global_flag(global))
    }

    /// Keep sprite `id` inside the area; returns the violated sides as a JSON array
    pub fn contain(
        &mut self,
        id: u32,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        bounce: bool,
    ) -> Result<Option<String>, JsValue> {
        let sides = self
            .core
            .contain(id, &Area::new(x, y, width, height), bounce)
            .map_err(to_js)?;
        Ok(sides_json(sides))
    }

    pub fn outside_bounds(&self, id: u32, x: f32, y: f32, width: f32, height: f32) -> Result<Option<String>, JsValue> {
        let sides = self
            .core
            .outside_bounds(id, &Area::new(x, y, width, height))
            .map_err(to_js)?;
        Ok(sides_json(sides))
    }
}

impl Default for CollisionWorld {
    fn default() -> Self {
        Self::new()
    }
}
