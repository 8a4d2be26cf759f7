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
fn timings_are_positive() {
    assert!(COUNTDOWN_TICK_MS > 0);
    assert!(PETAL_STAGGER_MS > 0);
    assert!(TYPING_START_DELAY_MS > 0);
    assert!(TYPING_CHAR_INTERVAL_MS > 0);
    assert!(RSVP_SUBMIT_DELAY_MS > 0);
    assert!(TITLE_STAGE_STEP_MS > 0);
    assert!(PRELOADER_FADE_MS > 0);

    // The exit animation must finish before a fresh notification would expire.
    assert!(NOTIFICATION_EXIT_MS < NOTIFICATION_LIFETIME_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scroll_factors_are_within_reasonable_bounds() {
    assert!(PARALLAX_TRANSLATE_FACTOR > 0.0 && PARALLAX_TRANSLATE_FACTOR < 1.0);
    assert!(PARALLAX_FADE_FACTOR > 0.0 && PARALLAX_FADE_FACTOR <= 1.0);
    assert!(MANDALA_SPEED_STEP > 0.0);
    assert!(MANDALA_SCALE_STEP > 0.0);
    assert!(ROCKET_TRAVEL_INSET_PX > TIMELINE_LOOKAHEAD_PX);

    // Paisleys drift in opposite directions.
    assert!(PAISLEY_1_MOTION.1 * PAISLEY_2_MOTION.1 < 0.0);
    assert_eq!(PAISLEY_1_MOTION.0, -PAISLEY_2_MOTION.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn observer_settings_are_valid() {
    assert!((0.0..=1.0).contains(&REVEAL_THRESHOLD));
    assert!((0.0..=1.0).contains(&LAZY_THRESHOLD));
    assert_eq!(REVEAL_ROOT_MARGIN.split_whitespace().count(), 4);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn event_date_is_a_real_calendar_date() {
    assert!((1..=12).contains(&EVENT_MONTH));
    assert!((1..=28).contains(&EVENT_DAY));
    assert!(EVENT_HOUR < 24);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn petal_ranges_are_non_empty() {
    assert!(PETAL_POOL_SIZE > 0);
    assert!(PETAL_MIN_DURATION_SECS > 0.0 && PETAL_DURATION_SPAN_SECS > 0.0);
    assert!(PETAL_MIN_SIZE_PX > 0.0 && PETAL_SIZE_SPAN_PX > 0.0);
    assert!(TILT_MAX_DEG > 0.0 && TILT_HOVER_SCALE > 1.0);
}

#[test]
fn dom_hooks_are_well_formed() {
    for id in COUNTDOWN_IDS.iter().chain([MUSIC_ID, LIGHTBOX_ID, RSVP_FORM_ID].iter()) {
        assert!(!id.starts_with('#') && !id.starts_with('.'), "ids are bare: {id}");
    }
    for sel in TITLE_STAGES {
        assert!(sel.starts_with('.'));
    }
    assert_eq!(ANCHOR_LINKS, "a[href^=\"#\"]");
}
