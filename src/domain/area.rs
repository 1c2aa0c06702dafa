use serde::{Deserialize, Serialize};

use super::sprite::{Space, Sprite};

/// Axis-aligned area used as a container or a despawn boundary.
///
/// `x, y` is the true top-left corner (anchor already applied).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Area {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Extent of a sprite used as a container
    pub fn of(sprite: &Sprite, space: Space) -> Self {
        let top_left = sprite.top_left(space);
        Self::new(top_left.x, top_left.y, sprite.width(), sprite.height())
    }
}
