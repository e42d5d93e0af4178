// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn relative_to_subtracts_canvas_origin() {
    let p = relative_to(Vec2::new(150.0, 80.0), Vec2::new(50.0, 30.0));
    assert_eq!(p, Vec2::new(100.0, 50.0));
    // Pointer left of / above the canvas stays negative; the engine accepts it.
    let p = relative_to(Vec2::new(10.0, 10.0), Vec2::new(50.0, 30.0));
    assert_eq!(p, Vec2::new(-40.0, -20.0));
}

#[test]
fn primary_button_mask() {
    assert!(!primary_button_held(0));
    assert!(primary_button_held(1));
    assert!(primary_button_held(1 | 2));
    assert!(!primary_button_held(2)); // secondary only
    assert!(!primary_button_held(4)); // middle only
}

#[test]
fn drag_requires_canvas_target_and_primary_button() {
    assert!(is_canvas_drag(1, true));
    assert!(!is_canvas_drag(1, false));
    assert!(!is_canvas_drag(0, true));
    assert!(!is_canvas_drag(2, true));
}

#[test]
fn pointer_state_starts_without_position() {
    let state = PointerState::default();
    assert!(state.position.is_none());
}
