// Host-side tests for navigation helpers and the body scroll lock.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod nav {
    include!("../src/core/nav.rs");
}

use nav::*;

#[test]
fn scroll_lock_holds_while_any_holder_remains() {
    let mut lock = ScrollLock::default();
    assert_eq!(lock.overflow(), "");
    assert_eq!(lock.set(LockHolder::Menu, true), "hidden");
    assert_eq!(lock.set(LockHolder::Lightbox, true), "hidden");

    // Closing the lightbox must not unlock scrolling under an open menu.
    assert_eq!(lock.set(LockHolder::Lightbox, false), "hidden");
    assert!(lock.is_locked());
    assert_eq!(lock.set(LockHolder::Menu, false), "");
    assert!(!lock.is_locked());
}

#[test]
fn scroll_lock_release_is_idempotent() {
    let mut lock = ScrollLock::default();
    assert_eq!(lock.set(LockHolder::Lightbox, false), "");
    lock.set(LockHolder::Lightbox, true);
    lock.set(LockHolder::Lightbox, true);
    assert_eq!(lock.set(LockHolder::Lightbox, false), "");
}

#[test]
fn mobile_menu_toggles_and_closes() {
    let mut menu = MobileMenu::default();
    assert!(!menu.is_open());
    assert!(menu.toggle());
    assert!(!menu.toggle());
    menu.toggle();
    menu.close();
    assert!(!menu.is_open());
}

#[test]
fn anchor_targets_skip_bare_hash_and_external_links() {
    assert_eq!(anchor_target("#gallery"), Some("#gallery"));
    assert_eq!(anchor_target("#"), None);
    assert_eq!(anchor_target("https://example.com/#x"), None);
    assert_eq!(anchor_target(""), None);
}

#[test]
fn smooth_scroll_leaves_room_for_header() {
    assert_eq!(smooth_scroll_top(500.0, 1200.0), 1620.0);
    assert_eq!(smooth_scroll_top(-300.0, 1200.0), 820.0);
}
