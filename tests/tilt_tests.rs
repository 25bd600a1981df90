// Host-side tests for card tilt geometry.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod tilt {
    include!("../src/core/tilt.rs");
}

use glam::Vec2;
use tilt::*;

fn card() -> CardRect {
    CardRect::new(0.0, 0.0, 300.0, 200.0)
}

#[test]
fn pointer_at_center_is_flat() {
    let t = Tilt::toward(&card(), Vec2::new(150.0, 100.0));
    assert_eq!(t.rotate_x_deg, 0.0);
    assert_eq!(t.rotate_y_deg, 0.0);
    assert_eq!(t.gravity, Vec2::ZERO);
}

#[test]
fn horizontal_offset_rotates_around_y() {
    let t = Tilt::toward(&card(), Vec2::new(240.0, 100.0));
    assert_eq!(t.rotate_y_deg, 3.0);
    assert_eq!(t.rotate_x_deg, 0.0);
    assert!((t.gravity.x - 0.9).abs() < 1e-6);
    assert_eq!(t.gravity.y, 0.0);
}

#[test]
fn pointer_above_center_gives_positive_rotate_x() {
    let t = Tilt::toward(&card(), Vec2::new(150.0, 40.0));
    assert_eq!(t.rotate_x_deg, 2.0);
    assert!((t.gravity.y + 0.6).abs() < 1e-6);
}

#[test]
fn tilt_follows_rect_position_on_page() {
    let moved = CardRect::new(500.0, 300.0, 300.0, 200.0);
    let a = Tilt::toward(&card(), Vec2::new(10.0, 20.0));
    let b = Tilt::toward(&moved, Vec2::new(510.0, 320.0));
    assert!((a.rotate_x_deg - b.rotate_x_deg).abs() < 1e-5);
    assert!((a.rotate_y_deg - b.rotate_y_deg).abs() < 1e-5);
}

#[test]
fn transform_css_combines_perspective_rotation_and_shift() {
    let t = Tilt::toward(&card(), Vec2::new(240.0, 100.0));
    assert_eq!(
        t.css(),
        "translateZ(0) perspective(1000px) rotateX(0deg) rotateY(3deg) translate3d(0.9px, 0px, 0)"
    );
}

#[test]
fn hover_and_rest_transforms() {
    assert_eq!(hover_css(), "translateZ(0) scale(1.02)");
    assert_eq!(REST_TRANSFORM, "translateZ(0)");
}

#[test]
fn shine_origin_is_pointer_fraction_of_box() {
    let rect = CardRect::new(100.0, 50.0, 200.0, 100.0);
    assert_eq!(
        shine_origin(&rect, Vec2::new(150.0, 75.0)),
        Vec2::new(25.0, 25.0)
    );
    assert_eq!(
        shine_origin(&rect, Vec2::new(300.0, 150.0)),
        Vec2::new(100.0, 100.0)
    );
}

#[test]
fn shine_on_empty_box_sits_in_the_middle() {
    let rect = CardRect::new(10.0, 10.0, 0.0, 40.0);
    assert_eq!(shine_origin(&rect, Vec2::new(10.0, 30.0)), Vec2::splat(50.0));
}

#[test]
fn shine_css_is_radial_fade() {
    assert_eq!(
        shine_css(Vec2::new(25.0, 75.0)),
        "radial-gradient(circle at 25% 75%, rgba(255,255,255,0.4) 0%, rgba(255,255,255,0) 70%)"
    );
}
