//! Decorative one-off and self-sustaining effects.

use crate::constants::*;
use crate::core::constants::*;
use crate::core::petals::initial_spawn_delay_ms;
use crate::core::{PetalStream, ReadyPhase, SiteError, Typewriter};
use crate::dom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

// ---------------- Petal rain ----------------

fn spawn_petal(document: web::Document, container: web::Element, stream: Rc<RefCell<PetalStream>>) {
    let Some(spec) = stream.borrow_mut().next() else {
        return;
    };
    let Ok(petal) = document.create_element("div") else {
        return;
    };
    _ = petal.class_list().add_1(PETAL_CLASS);
    _ = petal.set_attribute("style", &spec.style());
    _ = container.append_child(&petal);

    // Replace the petal as soon as it lands so the pool size stays constant.
    dom::set_timeout(spec.lifetime_ms(), move || {
        petal.remove();
        spawn_petal(document, container, stream);
    });
}

pub fn start_petal_rain(document: &web::Document) -> Result<(), SiteError> {
    let body = dom::require(document.body(), "body")?;
    let container = document.create_element("div").map_err(dom::js_err)?;
    container.set_class_name(PETAL_CONTAINER_CLASS);
    body.append_child(&container).map_err(dom::js_err)?;

    let stream = Rc::new(RefCell::new(PetalStream::new(StdRng::from_entropy())));
    for slot in 0..PETAL_POOL_SIZE {
        let document = document.clone();
        let container = container.clone();
        let stream = stream.clone();
        dom::set_timeout(initial_spawn_delay_ms(slot), move || {
            spawn_petal(document, container, stream)
        });
    }
    Ok(())
}

// ---------------- Typing effect ----------------

fn type_next(tagline: web::HtmlElement, writer: Rc<RefCell<Typewriter>>) {
    let Some(text) = writer.borrow_mut().next() else {
        log::debug!("[typing] done");
        return;
    };
    tagline.set_text_content(Some(&text));
    dom::set_timeout(TYPING_CHAR_INTERVAL_MS, move || type_next(tagline, writer));
}

pub fn start_typing(document: &web::Document) -> Result<(), SiteError> {
    let tagline = dom::require(dom::query(document, HERO_TAGLINE), HERO_TAGLINE)?;
    let text = tagline.text_content().unwrap_or_default();
    tagline.set_text_content(Some(""));
    dom::set_style(&tagline, "opacity", "1");

    let writer = Rc::new(RefCell::new(Typewriter::new(&text)));
    dom::set_timeout(TYPING_START_DELAY_MS, move || type_next(tagline, writer));
    Ok(())
}

// ---------------- Hero title reveal ----------------

/// Hide the hero title words, then bring bride, ampersand and groom in one
/// after another.
pub fn start_title_reveal(document: &web::Document) {
    for span in dom::query_all(document, HERO_TITLE_SPANS) {
        dom::set_style(&span, "opacity", "0");
        dom::set_style(&span, "transform", "translateY(30px)");
        dom::set_style(&span, "transition", "all 1s cubic-bezier(0.2, 1, 0.3, 1)");
        dom::set_style(&span, "display", "inline-block");
    }

    for (stage, selector) in TITLE_STAGES.into_iter().enumerate() {
        let document = document.clone();
        let delay = (stage as i32 + 1) * TITLE_STAGE_STEP_MS;
        dom::set_timeout(delay, move || {
            if let Some(el) = dom::query(&document, selector) {
                dom::set_style(&el, "opacity", "1");
                dom::set_style(&el, "transform", "translateY(0)");
            }
        });
    }
}

// ---------------- Preloader ----------------

fn hide_preloader(document: &web::Document) {
    let Some(preloader) = document.query_selector(PRELOADER).ok().flatten() else {
        return;
    };
    dom::set_class(&preloader, CLASS_HIDDEN, true);
    dom::set_timeout(PRELOADER_FADE_MS, move || preloader.remove());
}

/// Fade the preloader out on `load`, or right away when the page finished
/// loading before the module started.
pub fn wire_preloader(window: &web::Window, document: &web::Document, phase: ReadyPhase) {
    if phase.loaded() {
        hide_preloader(document);
        return;
    }
    let document = document.clone();
    dom::add_listener(window, "load", move |_ev: web::Event| hide_preloader(&document));
}

pub fn mark_loaded(document: &web::Document) {
    if let Some(body) = document.body() {
        dom::set_class(&body, CLASS_LOADED, true);
    }
}
