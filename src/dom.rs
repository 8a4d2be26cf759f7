use crate::core::{
    ElementBox, LockHolder, MetricsSource, ReadyPhase, RenderTarget, ScrollLock, SiteError,
    ViewportSnapshot,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub fn ready_phase(document: &web::Document) -> ReadyPhase {
    let state = js_sys::Reflect::get(document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|v| v.as_string());
    ReadyPhase::parse(state.as_deref())
}

pub fn js_err(e: JsValue) -> SiteError {
    SiteError::Dom(format!("{:?}", e))
}

#[inline]
pub fn require<T>(el: Option<T>, hook: &'static str) -> Result<T, SiteError> {
    el.ok_or(SiteError::MissingElement(hook))
}

pub fn query(root: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn query_in(root: &web::Element, selector: &str) -> Option<web::HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

fn collect(list: Option<web::NodeList>) -> Vec<web::HtmlElement> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

pub fn query_all(root: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    collect(root.query_selector_all(selector).ok())
}

pub fn query_all_in(root: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    collect(root.query_selector_all(selector).ok())
}

/// Attach a listener for the lifetime of the page.
pub fn add_listener<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("[dom] add {} listener failed: {:?}", event, e);
    }
    closure.forget();
}

#[inline]
pub fn add_click_listener(target: &web::EventTarget, mut handler: impl FnMut() + 'static) {
    add_listener(target, "click", move |_ev: web::Event| handler());
}

/// Run `f` once after `ms`. The closure frees itself after firing.
pub fn set_timeout(ms: i32, f: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let cb = Closure::once_into_js(f);
    if let Err(e) =
        window.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms)
    {
        log::warn!("[dom] setTimeout failed: {:?}", e);
    }
}

pub fn set_interval(ms: i32, f: impl FnMut() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
    if let Err(e) = window
        .set_interval_with_callback_and_timeout_and_arguments_0(closure.as_ref().unchecked_ref(), ms)
    {
        log::warn!("[dom] setInterval failed: {:?}", e);
    }
    closure.forget();
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    _ = el.class_list().toggle_with_force(class, on);
}

// ---------------- Coordinator adapters ----------------

/// An on-screen element as a coordinator render target.
#[derive(Clone, PartialEq)]
pub struct ElementTarget(pub web::HtmlElement);

impl RenderTarget for ElementTarget {
    fn set_style(&self, property: &str, value: &str) {
        set_style(&self.0, property, value);
    }

    fn set_class(&self, class: &str, on: bool) {
        set_class(&self.0, class, on);
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn geometry(&self) -> ElementBox {
        let rect = self.0.get_bounding_client_rect();
        ElementBox {
            offset_top: self.0.offset_top() as f64,
            offset_height: self.0.offset_height() as f64,
            client_top: rect.top(),
            client_height: rect.height(),
        }
    }
}

pub fn targets(elements: Vec<web::HtmlElement>) -> Vec<ElementTarget> {
    elements.into_iter().map(ElementTarget).collect()
}

/// Scroll position and viewport height read from the window.
#[derive(Clone)]
pub struct WindowMetrics(pub web::Window);

impl MetricsSource for WindowMetrics {
    fn snapshot(&self) -> ViewportSnapshot {
        ViewportSnapshot {
            scroll_offset: self.0.scroll_y().unwrap_or(0.0),
            viewport_height: self
                .0
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0),
        }
    }
}

// ---------------- Body scroll lock ----------------

/// Shared handle to the lock that owns `body.style.overflow`.
#[derive(Clone)]
pub struct BodyScrollLock {
    body: Option<web::HtmlElement>,
    lock: Rc<RefCell<ScrollLock>>,
}

impl BodyScrollLock {
    pub fn new(document: &web::Document) -> Self {
        Self {
            body: document.body(),
            lock: Rc::new(RefCell::new(ScrollLock::default())),
        }
    }

    pub fn set(&self, holder: LockHolder, locked: bool) {
        let overflow = self.lock.borrow_mut().set(holder, locked);
        if let Some(body) = &self.body {
            set_style(body, "overflow", overflow);
        }
    }
}
