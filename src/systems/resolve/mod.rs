//! Collision response: positional correction and velocity exchange
//!
//! Static resolvers only move their first argument; the moving-circle
//! resolver moves both.

mod bounce;
mod circle;
mod rectangle;

pub use bounce::bounce_off_surface;
pub use circle::{
    circle_collision, circle_point_collision, moving_circle_collision, multiple_circle_collision,
};
pub use rectangle::rectangle_collision;
