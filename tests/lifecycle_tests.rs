// Host-side tests for startup gating on document.readyState.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod lifecycle {
    include!("../src/core/lifecycle.rs");
}

use lifecycle::*;

#[test]
fn module_started_after_load_hides_preloader_immediately() {
    let phase = ReadyPhase::parse(Some("complete"));
    assert_eq!(phase, ReadyPhase::Complete);
    assert!(phase.loaded(), "load already fired; a listener would never run");
    assert!(phase.dom_parsed());
}

#[test]
fn interactive_page_waits_for_load_but_not_dom() {
    let phase = ReadyPhase::parse(Some("interactive"));
    assert!(phase.dom_parsed());
    assert!(!phase.loaded());
}

#[test]
fn loading_or_unknown_state_waits_for_both_events() {
    for state in [Some("loading"), Some("bogus"), None] {
        let phase = ReadyPhase::parse(state);
        assert_eq!(phase, ReadyPhase::Loading);
        assert!(!phase.dom_parsed());
        assert!(!phase.loaded());
    }
}
