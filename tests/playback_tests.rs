// Host-side tests for the background music state machine.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod playback {
    include!("../src/core/playback.rs");
}

use playback::*;

#[test]
fn autoplay_success_shows_pause_face() {
    let mut p = MusicPlayer::default();
    let face = p.autoplay_started();
    assert!(p.is_playing());
    assert_eq!(face, ButtonFace::PLAYING);
    assert_eq!(face.label, "⏸");
    assert_eq!(p.gate(), InteractionGate::Idle);
}

#[test]
fn rejected_autoplay_starts_on_first_click_exactly_once() {
    let mut p = MusicPlayer::default();
    p.autoplay_rejected();
    assert_eq!(p.gate(), InteractionGate::Armed);

    // First click anywhere starts playback.
    assert!(p.take_interaction());
    assert_eq!(p.gate(), InteractionGate::Spent);
    p.interaction_started();
    assert!(p.is_playing());

    // Listener is gone: a second click never re-triggers the start logic.
    assert!(!p.take_interaction());
    assert!(!p.take_interaction());
}

#[test]
fn interaction_after_manual_play_only_disarms() {
    let mut p = MusicPlayer::default();
    p.autoplay_rejected();
    assert_eq!(p.toggle(), ToggleAction::Play);
    assert!(p.is_playing());
    assert!(!p.take_interaction(), "already playing; nothing to start");
    assert_eq!(p.gate(), InteractionGate::Spent);
}

#[test]
fn interaction_without_rejection_is_ignored() {
    let mut p = MusicPlayer::default();
    assert!(!p.take_interaction());
    assert_eq!(p.gate(), InteractionGate::Idle);
}

#[test]
fn toggle_alternates_and_flips_flag_immediately() {
    let mut p = MusicPlayer::default();
    assert_eq!(p.toggle(), ToggleAction::Play);
    assert!(p.is_playing());
    assert_eq!(p.toggle(), ToggleAction::Pause);
    assert!(!p.is_playing());
    assert_eq!(p.toggle(), ToggleAction::Play);
}

#[test]
fn paused_face_shows_play_symbol() {
    assert_eq!(ButtonFace::PAUSED.label, PLAY_LABEL);
    assert!(!ButtonFace::PAUSED.playing);
    assert!(ButtonFace::PLAYING.playing);
}
