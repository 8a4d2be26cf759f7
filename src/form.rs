use crate::constants::{RSVP_FORM_ID, SUBMIT_BUTTON};
use crate::core::constants::RSVP_SUBMIT_DELAY_MS;
use crate::core::rsvp::{MISSING_FIELDS_MESSAGE, SENDING_LABEL_HTML, SUCCESS_MESSAGE};
use crate::core::{NotificationKind, RsvpForm, SiteError};
use crate::dom::{self, js_err};
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn field_reader(form: &web::HtmlFormElement) -> Result<impl Fn(&'static str) -> Option<String>, SiteError> {
    let data = web::FormData::new_with_form(form).map_err(js_err)?;
    Ok(move |name: &'static str| data.get(name).as_string())
}

fn on_submit(
    document: &web::Document,
    form: &web::HtmlFormElement,
    state: &Rc<RefCell<RsvpForm>>,
) -> Result<(), SiteError> {
    if state.borrow().is_sending() {
        log::debug!("[rsvp] submit ignored while sending");
        return Ok(());
    }
    let read = field_reader(form)?;
    if let Err(e) = state.borrow_mut().begin(read) {
        log::info!("[rsvp] rejected: {}", e);
        overlay::show(document, MISSING_FIELDS_MESSAGE, NotificationKind::Error);
        return Ok(());
    }

    let button = form
        .query_selector(SUBMIT_BUTTON)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok());
    let original_label = button.as_ref().map(|b| b.inner_html()).unwrap_or_default();
    if let Some(b) = &button {
        b.set_inner_html(SENDING_LABEL_HTML);
        b.set_disabled(true);
    }

    let document = document.clone();
    let form = form.clone();
    let state = state.clone();
    dom::set_timeout(RSVP_SUBMIT_DELAY_MS, move || {
        if let Some(sent) = state.borrow_mut().complete() {
            log::info!("[rsvp] received from {} ({})", sent.name, sent.attendance);
        }
        overlay::show(&document, SUCCESS_MESSAGE, NotificationKind::Success);
        form.reset();
        if let Some(b) = &button {
            b.set_inner_html(&original_label);
            b.set_disabled(false);
        }
    });
    Ok(())
}

/// Simulated RSVP submission: validate, show "Sending...", succeed after a delay.
pub fn wire_rsvp_form(document: &web::Document) -> Result<(), SiteError> {
    let form = dom::require(
        document
            .get_element_by_id(RSVP_FORM_ID)
            .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok()),
        RSVP_FORM_ID,
    )?;
    let state = Rc::new(RefCell::new(RsvpForm::default()));
    let document = document.clone();
    let form_submit = form.clone();
    dom::add_listener(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        if let Err(e) = on_submit(&document, &form_submit, &state) {
            log::error!("[rsvp] submit failed: {}", e);
        }
    });
    Ok(())
}
