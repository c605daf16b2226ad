// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

fn rect(left: f32, top: f32, width: f32, height: f32) -> CssRect {
    CssRect {
        left,
        top,
        width,
        height,
    }
}

#[test]
fn client_point_maps_one_to_one_when_sizes_match() {
    let r = rect(0.0, 0.0, 800.0, 600.0);
    let p = client_to_canvas_px(Vec2::new(120.0, 45.0), r, Vec2::new(800.0, 600.0));
    assert_eq!(p, Vec2::new(120.0, 45.0));
}

#[test]
fn client_point_subtracts_canvas_offset() {
    let r = rect(30.0, 50.0, 400.0, 300.0);
    let p = client_to_canvas_px(Vec2::new(130.0, 150.0), r, Vec2::new(400.0, 300.0));
    assert_eq!(p, Vec2::new(100.0, 100.0));
}

#[test]
fn client_point_scales_to_backing_store() {
    // CSS size 400x300 with a 2x backing store (e.g. devicePixelRatio = 2)
    let r = rect(0.0, 0.0, 400.0, 300.0);
    let p = client_to_canvas_px(Vec2::new(200.0, 75.0), r, Vec2::new(800.0, 600.0));
    assert_eq!(p, Vec2::new(400.0, 150.0));
}

#[test]
fn zero_sized_rect_falls_back_to_offset_only() {
    let r = rect(10.0, 20.0, 0.0, 0.0);
    let p = client_to_canvas_px(Vec2::new(15.0, 25.0), r, Vec2::new(800.0, 600.0));
    assert_eq!(p, Vec2::new(5.0, 5.0));
    assert!(p.is_finite());
}
