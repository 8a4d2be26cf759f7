use crate::constants::*;
use crate::core::constants::{PAISLEY_1_MOTION, PAISLEY_2_MOTION};
use crate::core::{
    ActiveNavBinding, Coordinator, FloatMotion, FloatingBinding, MandalaBinding, NavbarBinding,
    ParallaxBinding, RocketBinding, ScrollBinding, SiteError,
};
use crate::dom::{self, ElementTarget, WindowMetrics};
use web_sys as web;

/// Register `binding` on the window scroll event and apply it once so the
/// initial scroll position is reflected immediately.
fn register<B>(window: &web::Window, name: &'static str, binding: Option<B>) -> Result<(), SiteError>
where
    B: ScrollBinding + 'static,
{
    let binding = dom::require(binding, name)?;
    let coordinator = Coordinator::new(WindowMetrics(window.clone()), binding);
    coordinator.on_scroll();
    dom::add_listener(window, "scroll", move |_ev: web::Event| coordinator.on_scroll());
    log::debug!("[scroll] {} coordinator registered", name);
    Ok(())
}

fn one(document: &web::Document, selector: &str) -> Option<ElementTarget> {
    dom::query(document, selector).map(ElementTarget)
}

pub fn wire_navbar(window: &web::Window, document: &web::Document) -> Result<(), SiteError> {
    register(window, NAVBAR, NavbarBinding::new(one(document, NAVBAR)))
}

pub fn wire_parallax(window: &web::Window, document: &web::Document) -> Result<(), SiteError> {
    register(window, HERO_CONTENT, ParallaxBinding::new(one(document, HERO_CONTENT)))
}

pub fn wire_floating(window: &web::Window, document: &web::Document) -> Result<(), SiteError> {
    let binding = FloatingBinding::new([
        (one(document, PAISLEY_1), FloatMotion::new(PAISLEY_1_MOTION)),
        (one(document, PAISLEY_2), FloatMotion::new(PAISLEY_2_MOTION)),
    ]);
    register(window, PAISLEY_1, binding)
}

pub fn wire_mandala(window: &web::Window, document: &web::Document) -> Result<(), SiteError> {
    let tunnel = dom::by_id(document, MANDALA_TUNNEL_ID);
    let rings = tunnel
        .as_ref()
        .map(|t| dom::targets(dom::query_all_in(t, TUNNEL_RING)))
        .unwrap_or_default();
    register(window, MANDALA_TUNNEL_ID, MandalaBinding::new(tunnel.is_some(), rings))
}

pub fn wire_rocket(window: &web::Window, document: &web::Document) -> Result<(), SiteError> {
    let binding = RocketBinding::new(
        one(document, TIMELINE_CONTAINER),
        one(document, ROCKET),
        one(document, TIMELINE_LINE),
        dom::targets(dom::query_all(document, TIMELINE_EVENTS)),
    );
    register(window, TIMELINE_CONTAINER, binding)
}

pub fn wire_active_nav(window: &web::Window, document: &web::Document) -> Result<(), SiteError> {
    let binding = ActiveNavBinding::new(
        dom::targets(dom::query_all(document, SECTIONS_WITH_ID)),
        dom::targets(dom::query_all(document, NAV_LINK_ITEMS)),
    );
    register(window, SECTIONS_WITH_ID, binding)
}
