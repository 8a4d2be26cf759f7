use crate::constants::TILT_CARDS;
use crate::core::tilt::{tilt_for_pointer, NEUTRAL_TILT_TRANSFORM, TILT_TRANSITION};
use crate::dom;
use glam::Vec2;
use web_sys as web;

#[inline]
fn pointer_in_card(ev: &web::MouseEvent, card: &web::HtmlElement) -> (Vec2, Vec2) {
    let rect = card.get_bounding_client_rect();
    let local = Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    );
    (local, Vec2::new(rect.width() as f32, rect.height() as f32))
}

pub fn wire_tilt_cards(document: &web::Document) {
    let cards = dom::query_all(document, TILT_CARDS);
    for card in &cards {
        let card_move = card.clone();
        dom::add_listener(card, "mousemove", move |ev: web::MouseEvent| {
            let (local, size) = pointer_in_card(&ev, &card_move);
            let tilt = tilt_for_pointer(local, size);
            dom::set_style(&card_move, "transform", &tilt.transform());
        });

        let card_leave = card.clone();
        dom::add_listener(card, "mouseleave", move |_ev: web::MouseEvent| {
            dom::set_style(&card_leave, "transform", NEUTRAL_TILT_TRANSFORM);
        });

        dom::set_style(card, "transition", TILT_TRANSITION);
    }
    log::debug!("[tilt] wired {} cards", cards.len());
}
