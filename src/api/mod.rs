//! Public API surface for JS hosts

pub mod wasm;
pub mod world;

pub use wasm::CollisionWorld;
pub use world::SpriteWorld;
