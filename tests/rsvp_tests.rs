// Host-side tests for RSVP validation and the notification markup.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod error {
    include!("../src/core/error.rs");
}
mod rsvp {
    include!("../src/core/rsvp.rs");
}
mod notify {
    include!("../src/core/notify.rs");
}

use error::*;
use notify::*;
use rsvp::*;
use std::collections::HashMap;

fn form(name: &str, email: &str, attendance: &str) -> HashMap<&'static str, String> {
    HashMap::from([
        ("name", name.to_string()),
        ("email", email.to_string()),
        ("attendance", attendance.to_string()),
    ])
}

fn reader<'a>(
    fields: &'a HashMap<&'static str, String>,
) -> impl FnMut(&'static str) -> Option<String> + 'a {
    move |k| fields.get(k).cloned()
}

#[test]
fn complete_submission_succeeds_and_resets_state() {
    let fields = form("Asha", "asha@example.com", "yes");
    let mut state = RsvpForm::default();
    let sub = state.begin(reader(&fields)).unwrap().clone();
    assert_eq!(sub.name, "Asha");
    assert!(state.is_sending());

    let done = state.complete().expect("in-flight submission");
    assert_eq!(done, sub);
    assert!(!state.is_sending(), "submit control is re-enabled");
    assert!(state.complete().is_none());
}

#[test]
fn any_empty_required_field_never_reaches_success() {
    let cases = [
        form("", "a@b.c", "yes"),
        form("Ravi", "", "no"),
        form("Ravi", "a@b.c", ""),
        form("", "", ""),
    ];
    for fields in &cases {
        let mut state = RsvpForm::default();
        let err = state.begin(reader(fields)).unwrap_err();
        assert!(matches!(err, SiteError::Validation(_)), "{err}");
        assert!(!state.is_sending());
        assert!(state.complete().is_none());
    }
}

#[test]
fn missing_field_reports_first_absent_name() {
    let mut fields = form("Ravi", "r@x.y", "yes");
    fields.remove("email");
    let err = RsvpSubmission::from_fields(reader(&fields)).unwrap_err();
    assert_eq!(err, ValidationError { field: "email" });
    assert_eq!(err.to_string(), "required field `email` is empty");
}

#[test]
fn each_required_field_is_checked_by_name() {
    for field in REQUIRED_FIELDS {
        let mut fields = form("Meera", "meera@example.com", "maybe");
        fields.insert(field, String::new());
        let err = RsvpSubmission::from_fields(reader(&fields)).unwrap_err();
        assert_eq!(err.field, field);
    }
}

#[test]
fn in_flight_state_clears_on_complete() {
    let fields = form("Asha", "asha@example.com", "yes");
    let mut state = RsvpForm::default();
    state.begin(reader(&fields)).unwrap();
    assert!(state.is_sending());
    assert!(state.complete().is_some());
    assert!(!state.is_sending());
}

#[test]
fn notification_markup_escapes_message() {
    let html = markup("<b>Tom & \"Jerry\"</b>");
    assert!(html.contains("&lt;b&gt;Tom &amp; &quot;Jerry&quot;&lt;/b&gt;"));
    assert!(html.contains("class=\"notification-close\""));
    assert!(!html.contains("<b>"));
}

#[test]
fn notification_kinds_map_to_class_and_color() {
    assert_eq!(class_list(NotificationKind::Success), "notification success");
    assert_eq!(class_list(NotificationKind::Error), "notification error");
    assert!(inline_style(NotificationKind::Success).contains("#046307"));
    assert!(inline_style(NotificationKind::Error).contains("#C41E3A"));
    assert!(NOTIFICATION_KEYFRAMES_CSS.contains("@keyframes slideIn"));
    assert!(NOTIFICATION_KEYFRAMES_CSS.contains("@keyframes slideOut"));
}

#[test]
fn missing_element_is_distinguishable() {
    assert!(SiteError::MissingElement("#rsvpForm").is_missing_element());
    assert!(!SiteError::PlaybackRejected("NotAllowedError".into()).is_missing_element());
    assert_eq!(
        SiteError::MissingElement("#rsvpForm").to_string(),
        "missing element: #rsvpForm"
    );
}
