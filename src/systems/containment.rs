//! Keeping sprites inside an area, and detecting sprites that left one

use crate::domain::{Area, Side, SideSet, Sprite};

/// Clamp `sprite` inside `container`, side by side.
///
/// The container is in the coordinate space of the sprite's parent's parent,
/// so the sprite's `parent` offset is subtracted from every edge. Sides are
/// checked independently in left, top, right, bottom order; a sprite larger
/// than the container triggers both opposite sides and ends up flush with the
/// right/bottom edge. With `bounce`, the matching velocity component is
/// inverted and divided by the sprite's mass.
pub fn contain(sprite: &mut Sprite, container: &Area, bounce: bool) -> Option<SideSet> {
    let offset = sprite.anchor_offset();
    let parent = sprite.parent;
    let mass = sprite.effective_mass();
    let width = sprite.width();
    let height = sprite.height();

    let left = container.x - parent.x;
    let top = container.y - parent.y;
    let right = container.right() - parent.x;
    let bottom = container.bottom() - parent.y;

    let mut sides = SideSet::new();

    if sprite.pos.x - offset.x < left {
        if bounce {
            sprite.velocity.x = -sprite.velocity.x / mass;
        }
        sprite.pos.x = left + offset.x;
        sides.insert(Side::Left);
    }

    if sprite.pos.y - offset.y < top {
        if bounce {
            sprite.velocity.y = -sprite.velocity.y / mass;
        }
        sprite.pos.y = top + offset.y;
        sides.insert(Side::Top);
    }

    if sprite.pos.x - offset.x + width > right {
        if bounce {
            sprite.velocity.x = -sprite.velocity.x / mass;
        }
        sprite.pos.x = right - width + offset.x;
        sides.insert(Side::Right);
    }

    if sprite.pos.y - offset.y + height > bottom {
        if bounce {
            sprite.velocity.y = -sprite.velocity.y / mass;
        }
        sprite.pos.y = bottom - height + offset.y;
        sides.insert(Side::Bottom);
    }

    sides.non_empty()
}

/// [`contain`], then hand the violated sides to `on_contact`
pub fn contain_with<F>(sprite: &mut Sprite, container: &Area, bounce: bool, on_contact: F) -> Option<SideSet>
where
    F: FnOnce(SideSet),
{
    let sides = contain(sprite, container, bounce);
    if let Some(sides) = sides {
        on_contact(sides);
    }
    sides
}

/// Which sides of `area` has `sprite` completely left through?
///
/// The area is extended by the sprite's own size, so a sprite only counts as
/// outside once it is a full width/height past the edge. Nothing is mutated.
pub fn outside_bounds(sprite: &Sprite, area: &Area) -> Option<SideSet> {
    let width = sprite.width();
    let height = sprite.height();
    let pos = sprite.pos;

    let mut sides = SideSet::new();
    if pos.x < area.x - width {
        sides.insert(Side::Left);
    }
    if pos.y < area.y - height {
        sides.insert(Side::Top);
    }
    if pos.x > area.right() + width {
        sides.insert(Side::Right);
    }
    if pos.y > area.bottom() + height {
        sides.insert(Side::Bottom);
    }
    sides.non_empty()
}

/// [`outside_bounds`], then hand the sides to `on_exit`
pub fn outside_bounds_with<F>(sprite: &Sprite, area: &Area, on_exit: F) -> Option<SideSet>
where
    F: FnOnce(SideSet),
{
    let sides = outside_bounds(sprite, area);
    if let Some(sides) = sides {
        on_exit(sides);
    }
    sides
}
