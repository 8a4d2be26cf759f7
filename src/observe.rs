use crate::constants::{ANIMATE_ON_SCROLL, CLASS_VISIBLE, LAZY_IMAGES};
use crate::core::{IntersectionSample, RevealAction, RevealConfig, RevealSet, SiteError};
use crate::dom::{self, js_err};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn perform(action: RevealAction, el: &web::Element) {
    match action {
        RevealAction::MarkVisible => dom::set_class(el, CLASS_VISIBLE, true),
        RevealAction::SwapSource => {
            if let Some(src) = el.get_attribute("data-src") {
                _ = el.set_attribute("src", &src);
            }
            _ = el.remove_attribute("data-src");
        }
    }
}

/// Observe `elements` and run `action` on each exactly once, on its first
/// intersection; the element is unobserved right after.
pub fn observe_once(
    elements: Vec<web::HtmlElement>,
    config: RevealConfig,
    action: RevealAction,
) -> Result<(), SiteError> {
    let set = RevealSet::new(
        elements.iter().map(|e| e.clone().unchecked_into::<web::Element>()),
        action,
    );
    if set.is_empty() {
        return Ok(());
    }
    let count = set.len();
    let set = Rc::new(RefCell::new(set));

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            let mut set = set.borrow_mut();
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                let sample = IntersectionSample {
                    is_intersecting: entry.is_intersecting(),
                };
                if set.intersect(&target, sample) {
                    perform(set.action(), &target);
                    observer.unobserve(&target);
                }
            }
            if set.pending().next().is_none() {
                observer.disconnect();
                log::debug!("[reveal] all {} elements revealed", set.len());
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(config.threshold));
    init.set_root_margin(config.root_margin);
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(js_err)?;
    callback.forget();

    for el in &elements {
        observer.observe(el);
    }
    log::debug!("[reveal] observing {} elements ({:?})", count, action);
    Ok(())
}

pub fn wire_scroll_reveal(document: &web::Document) -> Result<(), SiteError> {
    observe_once(
        dom::query_all(document, ANIMATE_ON_SCROLL),
        RevealConfig::SCROLL_REVEAL,
        RevealAction::MarkVisible,
    )
}

pub fn wire_lazy_images(document: &web::Document) -> Result<(), SiteError> {
    observe_once(
        dom::query_all(document, LAZY_IMAGES),
        RevealConfig::LAZY_IMAGES,
        RevealAction::SwapSource,
    )
}
