// Host-side tests for the decorative effects: petal stream, typewriter, tilt.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod petals {
    include!("../src/core/petals.rs");
}
mod typing {
    include!("../src/core/typing.rs");
}
mod tilt {
    include!("../src/core/tilt.rs");
}

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use petals::*;
use tilt::*;
use typing::*;

fn seeded(seed: u64) -> PetalStream {
    PetalStream::new(StdRng::seed_from_u64(seed))
}

#[test]
fn petal_stream_is_endless_and_within_ranges() {
    let stream = seeded(7);
    let petals: Vec<PetalSpec> = stream.take(2_000).collect();
    assert_eq!(petals.len(), 2_000);
    for p in &petals {
        assert!((0.0..100.0).contains(&p.left_vw), "left {}", p.left_vw);
        assert!((6.0..12.0).contains(&p.duration_secs), "duration {}", p.duration_secs);
        assert!((10.0..25.0).contains(&p.size_px), "size {}", p.size_px);
        assert!((6_000..=12_000).contains(&p.lifetime_ms()));
    }
}

#[test]
fn petal_stream_is_randomized_but_reproducible_per_seed() {
    let a: Vec<_> = seeded(42).take(10).collect();
    let b: Vec<_> = seeded(42).take(10).collect();
    let c: Vec<_> = seeded(43).take(10).collect();
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert!(a.windows(2).any(|w| w[0] != w[1]));
}

#[test]
fn petal_style_sets_square_size() {
    let spec = PetalSpec {
        left_vw: 12.5,
        duration_secs: 7.25,
        size_px: 20.0,
    };
    assert_eq!(
        spec.style(),
        "left:12.50vw;animation-duration:7.25s;width:20.00px;height:20.00px"
    );
    assert_eq!(spec.lifetime_ms(), 7_250);
}

#[test]
fn initial_pool_is_staggered() {
    assert_eq!(initial_spawn_delay_ms(0), 0);
    assert_eq!(initial_spawn_delay_ms(1), 300);
    assert_eq!(
        initial_spawn_delay_ms(constants::PETAL_POOL_SIZE - 1),
        29 * 300
    );
}

#[test]
fn typewriter_reveals_one_char_per_step_then_stops() {
    let steps: Vec<String> = Typewriter::new("Join us").collect();
    assert_eq!(steps.len(), 7);
    assert_eq!(steps[0], "J");
    assert_eq!(steps[3], "Join");
    assert_eq!(steps.last().map(String::as_str), Some("Join us"));
}

#[test]
fn typewriter_is_not_restartable() {
    let mut w = Typewriter::new("ab");
    assert_eq!(w.size_hint(), (2, Some(2)));
    assert_eq!(w.next().as_deref(), Some("a"));
    assert_eq!(w.next().as_deref(), Some("ab"));
    assert!(w.is_done());
    assert_eq!(w.next(), None);
    assert_eq!(w.next(), None);
}

#[test]
fn typewriter_handles_multibyte_text_and_empty_input() {
    let steps: Vec<String> = Typewriter::new("शुभ ♥").collect();
    assert_eq!(steps.len(), "शुभ ♥".chars().count());
    assert_eq!(steps.last().map(String::as_str), Some("शुभ ♥"));
    assert_eq!(Typewriter::new("").next(), None);
}

#[test]
fn tilt_is_neutral_at_center_and_maxed_at_edges() {
    let size = Vec2::new(200.0, 100.0);
    let center = tilt_for_pointer(Vec2::new(100.0, 50.0), size);
    assert_eq!(center.rotate_x_deg, 0.0);
    assert_eq!(center.rotate_y_deg, 0.0);

    let top_left = tilt_for_pointer(Vec2::new(0.0, 0.0), size);
    assert!((top_left.rotate_x_deg - 5.0).abs() < 1e-6);
    assert!((top_left.rotate_y_deg + 5.0).abs() < 1e-6);

    let bottom_right = tilt_for_pointer(Vec2::new(200.0, 100.0), size);
    assert!((bottom_right.rotate_x_deg + 5.0).abs() < 1e-6);
    assert!((bottom_right.rotate_y_deg - 5.0).abs() < 1e-6);
}

#[test]
fn tilt_on_zero_sized_card_is_neutral() {
    assert_eq!(tilt_for_pointer(Vec2::new(3.0, 4.0), Vec2::ZERO), Tilt::default());
}

#[test]
fn tilt_transform_string() {
    let t = Tilt {
        rotate_x_deg: -2.5,
        rotate_y_deg: 1.25,
    };
    assert_eq!(
        t.transform(),
        "perspective(1000px) rotateX(-2.50deg) rotateY(1.25deg) scale3d(1.02, 1.02, 1.02)"
    );
    assert!(NEUTRAL_TILT_TRANSFORM.contains("scale3d(1, 1, 1)"));
}
