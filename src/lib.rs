#![cfg(target_arch = "wasm32")]
use crate::core::SiteError;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod clock;
mod constants;
mod core;
mod dom;
mod effects;
mod events;
mod form;
mod gallery;
mod observe;
mod overlay;

/// Run one component initializer. A missing DOM hook leaves the component
/// inert; anything else is logged and swallowed so other components still start.
fn init_component<T>(name: &str, result: Result<T, SiteError>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) if e.is_missing_element() => {
            log::debug!("[init] {} skipped: {}", name, e);
            None
        }
        Err(e) => {
            log::error!("[init] {} failed: {}", name, e);
            None
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("event-site-web starting");

    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    // The module is fetched asynchronously, so either event may already be past.
    let phase = dom::ready_phase(&document);
    log::debug!("[init] document phase {:?}", phase);
    effects::wire_preloader(&window, &document, phase);

    if !phase.dom_parsed() {
        let win = window.clone();
        dom::add_listener(&document, "DOMContentLoaded", move |_ev: web::Event| {
            if let Err(e) = init(&win) {
                log::error!("init error: {:?}", e);
            }
        });
    } else if let Err(e) = init(&window) {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init(window: &web::Window) -> anyhow::Result<()> {
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let scroll_lock = dom::BodyScrollLock::new(&document);

    init_component("reveal", observe::wire_scroll_reveal(&document));
    init_component("lazy images", observe::wire_lazy_images(&document));

    let menu = init_component(
        "mobile menu",
        events::wire_mobile_menu(&document, scroll_lock.clone()),
    );
    events::wire_smooth_scrolling(window, &document, menu);

    if let Some(view) = init_component("lightbox", gallery::wire_lightbox(&document, scroll_lock)) {
        events::wire_lightbox_keydown(&document, view);
    }
    init_component("rsvp", form::wire_rsvp_form(&document));

    init_component("mandala", events::scroll::wire_mandala(window, &document));
    init_component("rocket", events::scroll::wire_rocket(window, &document));
    init_component("active nav", events::scroll::wire_active_nav(window, &document));
    init_component("floating", events::scroll::wire_floating(window, &document));
    init_component("parallax", events::scroll::wire_parallax(window, &document));
    init_component("navbar", events::scroll::wire_navbar(window, &document));

    init_component("petals", effects::start_petal_rain(&document));
    effects::start_title_reveal(&document);
    init_component("typing", effects::start_typing(&document));
    events::wire_tilt_cards(&document);

    init_component("countdown", clock::wire_countdown(&document));
    init_component("music", audio::wire_music(&document));

    effects::mark_loaded(&document);
    log::info!("[init] components wired");
    Ok(())
}
