//! Domain types: sprites, shapes, result tags, configuration and errors

pub mod area;
pub mod config;
pub mod error;
pub mod source;
pub mod sprite;
pub mod tags;

pub use area::Area;
pub use config::CollisionConfig;
pub use error::CollisionError;
pub use source::SpriteSource;
pub use sprite::{Shape, Space, Sprite};
pub use tags::{Outcome, Region, Side, SideSet};
