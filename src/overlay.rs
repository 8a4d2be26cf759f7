use crate::constants::{NOTIFICATION, NOTIFICATION_CLOSE};
use crate::core::constants::{NOTIFICATION_EXIT_MS, NOTIFICATION_LIFETIME_MS};
use crate::core::notify::{self, NotificationKind};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

fn ensure_styles(document: &web::Document) {
    if document
        .get_element_by_id(notify::NOTIFICATION_STYLES_ID)
        .is_some()
    {
        return;
    }
    let (Some(head), Ok(style)) = (document.head(), document.create_element("style")) else {
        return;
    };
    style.set_id(notify::NOTIFICATION_STYLES_ID);
    style.set_text_content(Some(notify::NOTIFICATION_KEYFRAMES_CSS));
    _ = head.append_child(&style);
}

/// Play the exit animation, then detach.
fn dismiss(el: &web::HtmlElement) {
    dom::set_style(el, "animation", notify::SLIDE_OUT_ANIMATION);
    let el = el.clone();
    dom::set_timeout(NOTIFICATION_EXIT_MS, move || el.remove());
}

/// Show a toast, replacing any toast already on screen.
pub fn show(document: &web::Document, message: &str, kind: NotificationKind) {
    if let Ok(Some(existing)) = document.query_selector(NOTIFICATION) {
        existing.remove();
    }

    let Some(el) = document
        .create_element("div")
        .ok()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        log::warn!("[notify] could not create notification");
        return;
    };
    el.set_class_name(&notify::class_list(kind));
    el.set_inner_html(&notify::markup(message));
    _ = el.set_attribute("style", &notify::inline_style(kind));

    ensure_styles(document);
    if let Some(body) = document.body() {
        _ = body.append_child(&el);
    }

    if let Some(close) = dom::query_in(&el, NOTIFICATION_CLOSE) {
        let target = el.clone();
        dom::add_click_listener(&close, move || dismiss(&target));
    }

    let target = el.clone();
    dom::set_timeout(NOTIFICATION_LIFETIME_MS, move || {
        if target.parent_node().is_some() {
            dismiss(&target);
        }
    });
    log::info!("[notify] {}: {}", kind.class_name(), message);
}
