use crate::gallery::LightboxView;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn handle_lightbox_keydown(ev: &web::KeyboardEvent, view: &Rc<RefCell<LightboxView>>) {
    let command = view.borrow().state.command_for_key(&ev.key());
    if let Some(command) = command {
        view.borrow_mut().run(command);
    }
}

// Escape / arrow keys drive the lightbox while it is open; ignored otherwise.
pub fn wire_lightbox_keydown(document: &web::Document, view: Rc<RefCell<LightboxView>>) {
    crate::dom::add_listener(document, "keydown", move |ev: web::KeyboardEvent| {
        handle_lightbox_keydown(&ev, &view);
    });
}
