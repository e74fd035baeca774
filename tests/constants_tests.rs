// Host-side tests for constants and their relationships.
// The web crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use drift_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn animation_constants_are_positive() {
    assert!(TIME_STEP > 0.0);
    assert!(FIELD_SPIN_X > 0.0 && FIELD_SPIN_Y > 0.0);
    assert!(BREATH_AMPLITUDE > 0.0 && BREATH_FREQUENCY > 0.0);
    assert!(FOLLOW_GAIN_X > 0.0 && FOLLOW_GAIN_Y > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_is_a_fraction() {
    assert!(FOLLOW_SMOOTHING > 0.0 && FOLLOW_SMOOTHING <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn spin_rates_differ() {
    // distinct rates keep the field from settling into a repeating pose
    assert!(FIELD_SPIN_X != FIELD_SPIN_Y);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_stays_between_clip_planes() {
    assert!(CAMERA_NEAR > 0.0 && CAMERA_FAR > CAMERA_NEAR);
    assert!((CAMERA_BASE_Z as f64 - BREATH_AMPLITUDE) > CAMERA_NEAR as f64);
    // the far corner of the field is still inside the far plane
    let corner = (3.0f32).sqrt() * FIELD_EXTENT * 0.5;
    assert!(CAMERA_BASE_Z + corner < CAMERA_FAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn page_effect_constants_are_sane() {
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
    assert!(REVEAL_RATIO_EPSILON < REVEAL_THRESHOLD);
    assert!(PARALLAX_DAMPING > 0.0 && PARALLAX_DAMPING < 1.0);
    assert!(HOVER_VOLUME > 0.0 && HOVER_VOLUME <= 1.0);
    assert!(MAX_PIXEL_RATIO >= 1.0);
    assert!(POINT_OPACITY > 0.0 && POINT_OPACITY <= 1.0);
    assert!(POINT_COLOR.iter().all(|c| (0.0..=1.0).contains(c)));
}

#[test]
fn dom_hooks_are_well_formed() {
    assert!(!CANVAS_ID.starts_with('#'));
    assert!(CARD_SELECTOR.starts_with('.'));
    assert!(CARD_IMAGE_SELECTOR.starts_with('.'));
    assert!(HOVER_SELECTOR.contains(CARD_SELECTOR));
    assert!(HOVER_SELECTOR.contains(SKILL_SELECTOR));
    assert!(FOLLOW_ATTR.starts_with("data-") && SEED_ATTR.starts_with("data-"));
    assert!(REVEAL_INDEX_ATTR.starts_with("data-"));
}
