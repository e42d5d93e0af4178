// Host-side tests for DOM sizing helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod dom {
    include!("../src/dom.rs");
}

use dom::*;

#[test]
fn backing_size_scales_by_density() {
    assert_eq!(backing_size(800.0, 1.0), 800);
    assert_eq!(backing_size(800.0, 2.0), 1600);
    assert_eq!(backing_size(800.0, 0.75), 600);
    assert_eq!(backing_size(1001.0, 0.75), 751);
}

#[test]
fn backing_size_never_collapses_to_zero() {
    assert_eq!(backing_size(0.0, 1.0), 1);
    assert_eq!(backing_size(1.0, 0.1), 1);
}
