//! Bump Engine - 2D collision detection and response
//!
//! Pairwise, discrete-time, axis-aligned:
//! - hit tests for points, circles and rectangles
//! - positional de-penetration and velocity response
//! - circle-vs-rectangle via region classification
//! - containment and out-of-bounds checks
//! - a dispatcher that picks the right routine from shape kinds
//!
//! Architecture:
//! - core/     - math and logging macros
//! - domain/   - sprites, shapes, result tags, config, errors
//! - systems/  - the collision algorithms
//! - engine    - configured entry point
//! - api/      - wasm facade

// Logging macros must be declared before the modules that use them.
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod engine;
pub mod api;

use wasm_bindgen::prelude::*;

#[cfg(feature = "parallel")]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Bump collision engine {} initialized", version());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

pub use api::{CollisionWorld, SpriteWorld};
pub use crate::core::Vec2;
pub use domain::{
    Area, CollisionConfig, CollisionError, Outcome, Region, Shape, Side, SideSet, Space, Sprite, SpriteSource,
};
pub use engine::CollisionEngine;
pub use systems::dispatch::{Contact, HitOptions, Operand, Report};
