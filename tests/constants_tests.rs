// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn scroll_thresholds_are_ordered() {
    assert!(HEADER_SCROLLED_OFFSET_PX > 0.0);
    assert!(HEADER_SCROLLED_OFFSET_PX < BACK_TO_TOP_OFFSET_PX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn gradient_saturation_stays_in_percent_range() {
    assert!(SATURATION_BASE - SATURATION_SWING >= 0.0);
    assert!(SATURATION_BASE + SATURATION_SWING <= 100.0);
    assert!(STOP_LIGHTNESS.windows(2).all(|w| w[0] < w[1]));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn tilt_dominates_gravity() {
    assert!(TILT_DIVISOR > 0.0);
    assert!(TILT_DIVISOR < GRAVITY_DIVISOR);
    assert!(SHINE_OPACITY_IDLE < SHINE_OPACITY_ACTIVE);
    assert!(SHINE_OPACITY_ACTIVE <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn lifetimes_and_caps() {
    assert!(TRAIL_CAPACITY > 0);
    assert!(TRAIL_LIFETIME_MS < NOTICE_LIFETIME_MS);
    assert_eq!(PARTICLE_COUNT, 50);
    assert!(REVEAL_VIEWPORT_FRACTION > 0.0 && REVEAL_VIEWPORT_FRACTION < 1.0);
    assert!(SKILL_STAGGER_MS < PROJECT_STAGGER_MS);
}

#[test]
fn card_selector_covers_both_card_kinds() {
    assert!(TILT_CARD_SELECTOR.contains(SKILL_CARD_SELECTOR));
    assert!(TILT_CARD_SELECTOR.contains(PROJECT_CARD_SELECTOR));
    assert!(NOTICE_SELECTOR.ends_with("notification"));
    assert_eq!(IN_PAGE_LINK_SELECTOR, "a[href^=\"#\"]");
}
