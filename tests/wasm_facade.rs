#![cfg(target_arch = "wasm32")]

use bump_engine::CollisionWorld;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn unknown_sprite_is_a_js_error() {
    let mut world = CollisionWorld::new();
    world.add_rectangle(0.0, 0.0, 10.0, 10.0);

    let err = world.hit(0, 7, false, false, false).unwrap_err();
    assert_eq!(err.as_string().as_deref(), Some("unknown sprite id 7"));
}

#[wasm_bindgen_test]
fn hit_each_calls_back_per_contact() {
    let mut world = CollisionWorld::new();
    world.add_rectangle(0.0, 0.0, 10.0, 10.0);
    let probe = world.add_rectangle(5.0, 5.0, 10.0, 10.0);

    let callback = js_sys::Function::new_no_args("");
    assert_eq!(world.hit_each(probe, false, false, false, &callback).ok(), Some(1));
}
