use crate::constants::COUNTDOWN_IDS;
use crate::core::constants::*;
use crate::core::{CountdownFields, SiteError};
use crate::dom;
use web_sys as web;

/// Event start as epoch milliseconds, interpreted in the browser's local zone.
fn event_target_ms() -> i64 {
    js_sys::Date::new_with_year_month_day_hr_min_sec(
        EVENT_YEAR,
        (EVENT_MONTH - 1) as i32,
        EVENT_DAY as i32,
        EVENT_HOUR as i32,
        0,
        0,
    )
    .get_time() as i64
}

fn render(slots: &[web::HtmlElement; 4], fields: &CountdownFields) {
    for (slot, value) in slots.iter().zip(fields.as_array()) {
        slot.set_text_content(Some(value));
    }
}

/// Render the countdown now and every second after.
pub fn wire_countdown(document: &web::Document) -> Result<(), SiteError> {
    let [d, h, m, s] = COUNTDOWN_IDS;
    let slots = [
        dom::require(dom::by_id(document, d), d)?,
        dom::require(dom::by_id(document, h), h)?,
        dom::require(dom::by_id(document, m), m)?,
        dom::require(dom::by_id(document, s), s)?,
    ];
    let target_ms = event_target_ms();
    let tick = move || {
        let now_ms = js_sys::Date::now() as i64;
        render(&slots, &CountdownFields::between(target_ms, now_ms));
    };
    tick();
    dom::set_interval(COUNTDOWN_TICK_MS, tick);
    Ok(())
}
