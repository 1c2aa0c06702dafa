use crate::core::Vec2;
use crate::domain::Sprite;

/// Reflect a sprite's velocity off a surface.
///
/// `surface` is the surface tangent (any length). The velocity component along
/// it is kept, the component along its normal `(sy, -sx)` is inverted, and the
/// result is divided by the sprite's mass. A zero-length surface is ignored.
pub fn bounce_off_surface(sprite: &mut Sprite, surface: Vec2) {
    let magnitude = surface.length();
    if !(magnitude > 0.0) {
        return;
    }

    let along = surface / magnitude;
    let normal = surface.perp() / magnitude;

    let v = sprite.velocity;
    let bounced = v.project_onto(along) - v.project_onto(normal);

    sprite.velocity = bounced / sprite.effective_mass();
}
