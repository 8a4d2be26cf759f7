// Host-side tests for one-shot reveal tracking.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod reveal {
    include!("../src/core/reveal.rs");
}

use reveal::*;

const HIT: IntersectionSample = IntersectionSample {
    is_intersecting: true,
};
const MISS: IntersectionSample = IntersectionSample {
    is_intersecting: false,
};

fn is_visible<T: PartialEq>(set: &RevealSet<T>, element: &T) -> bool {
    !set.pending().any(|e| e == element)
}

#[test]
fn first_intersection_reveals_exactly_once() {
    let mut set = RevealSet::new(["a", "b", "c"], RevealAction::MarkVisible);
    assert!(set.intersect(&"b", HIT));
    assert!(!set.intersect(&"b", HIT), "second hit must not re-trigger");
    assert!(is_visible(&set, &"b"));
    assert!(!is_visible(&set, &"a"));
}

#[test]
fn visibility_is_monotonic() {
    let mut set = RevealSet::new([1, 2], RevealAction::MarkVisible);
    set.intersect(&1, HIT);
    for sample in [MISS, HIT, MISS, MISS] {
        set.intersect(&1, sample);
        assert!(is_visible(&set, &1));
    }
}

#[test]
fn non_intersecting_samples_do_nothing() {
    let mut set = RevealSet::new([1], RevealAction::SwapSource);
    assert!(!set.intersect(&1, MISS));
    assert!(!is_visible(&set, &1));
    assert_eq!(set.pending().count(), 1);
}

#[test]
fn unknown_elements_are_ignored() {
    let mut set = RevealSet::new([1, 2], RevealAction::MarkVisible);
    assert!(!set.intersect(&99, HIT));
    assert_eq!(set.pending().count(), 2);
}

#[test]
fn elements_fire_independently_in_any_order() {
    let mut set = RevealSet::new(["x", "y", "z"], RevealAction::MarkVisible);
    assert!(set.intersect(&"z", HIT));
    assert!(set.intersect(&"x", HIT));
    let pending: Vec<_> = set.pending().copied().collect();
    assert_eq!(pending, vec!["y"]);
    assert!(set.intersect(&"y", HIT));
    assert_eq!(set.pending().count(), 0);
    assert_eq!(set.len(), 3);
}

#[test]
fn observer_configs_match_page_behavior() {
    assert_eq!(RevealConfig::SCROLL_REVEAL.threshold, 0.1);
    assert_eq!(RevealConfig::SCROLL_REVEAL.root_margin, "0px 0px -100px 0px");
    assert_eq!(RevealConfig::LAZY_IMAGES.threshold, 0.0);
    let set = RevealSet::new(Vec::<u8>::new(), RevealAction::SwapSource);
    assert!(set.is_empty());
    assert_eq!(set.action(), RevealAction::SwapSource);
}
