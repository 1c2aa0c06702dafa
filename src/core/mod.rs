//! Core building blocks shared by every system

// Macros first so the rest of the crate can use them.
#[macro_use]
pub mod utils {
    #[macro_use]
    pub mod console;
}

pub mod vec2;

pub use vec2::Vec2;
