use crate::constants::*;
use crate::core::{GalleryImage, Lightbox, LightboxCommand, LockHolder, SiteError};
use crate::dom::{self, BodyScrollLock};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Lightbox state plus the elements it renders into.
pub struct LightboxView {
    pub state: Lightbox,
    modal: web::HtmlElement,
    image: web::HtmlImageElement,
    scroll_lock: BodyScrollLock,
}

impl LightboxView {
    fn render(&self) {
        if let Some(img) = self.state.current() {
            self.image.set_src(&img.source_uri);
            self.image.set_alt(&img.alt_text);
            log::debug!(
                "[lightbox] showing {}/{}",
                self.state.current_index() + 1,
                self.state.len()
            );
        }
    }

    pub fn open(&mut self, index: usize) {
        if self.state.open(index).is_none() {
            log::warn!("[lightbox] index {} out of range", index);
            return;
        }
        self.render();
        dom::set_class(&self.modal, CLASS_ACTIVE, true);
        self.scroll_lock.set(LockHolder::Lightbox, true);
    }

    pub fn run(&mut self, command: LightboxCommand) {
        if !self.state.is_open() {
            return;
        }
        self.state.apply(command);
        if command == LightboxCommand::Close {
            dom::set_class(&self.modal, CLASS_ACTIVE, false);
            self.scroll_lock.set(LockHolder::Lightbox, false);
        } else {
            self.render();
        }
    }
}

/// Gallery items paired with the image each one shows. Items without an
/// `<img>` are skipped so lightbox indices match the clickable items.
fn read_gallery(items: Vec<web::HtmlElement>) -> Vec<(web::HtmlElement, GalleryImage)> {
    items
        .into_iter()
        .filter_map(|item| {
            let img = dom::query_in(&item, "img")?
                .dyn_into::<web::HtmlImageElement>()
                .ok()?;
            let image = GalleryImage {
                source_uri: img.src(),
                alt_text: img.alt(),
            };
            Some((item, image))
        })
        .collect()
}

pub fn wire_lightbox(
    document: &web::Document,
    scroll_lock: BodyScrollLock,
) -> Result<Rc<RefCell<LightboxView>>, SiteError> {
    let modal = dom::require(dom::by_id(document, LIGHTBOX_ID), LIGHTBOX_ID)?;
    let image = dom::require(
        document
            .get_element_by_id(LIGHTBOX_IMAGE_ID)
            .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok()),
        LIGHTBOX_IMAGE_ID,
    )?;
    let close = dom::require(dom::query(document, LIGHTBOX_CLOSE), LIGHTBOX_CLOSE)?;
    let prev = dom::require(dom::query(document, LIGHTBOX_PREV), LIGHTBOX_PREV)?;
    let next = dom::require(dom::query(document, LIGHTBOX_NEXT), LIGHTBOX_NEXT)?;

    let (items, images): (Vec<_>, Vec<_>) =
        read_gallery(dom::query_all(document, GALLERY_ITEMS))
            .into_iter()
            .unzip();
    log::info!("[lightbox] {} gallery images", images.len());

    let view = Rc::new(RefCell::new(LightboxView {
        state: Lightbox::new(images),
        modal: modal.clone(),
        image,
        scroll_lock,
    }));
    if view.borrow().state.is_empty() {
        log::warn!("[lightbox] gallery has no images");
    }

    for (index, item) in items.iter().enumerate() {
        let view = view.clone();
        dom::add_click_listener(item, move || view.borrow_mut().open(index));
    }

    for (button, command) in [
        (close, LightboxCommand::Close),
        (prev, LightboxCommand::Prev),
        (next, LightboxCommand::Next),
    ] {
        let view = view.clone();
        dom::add_click_listener(&button, move || view.borrow_mut().run(command));
    }

    // Backdrop click: only when the modal itself is the target.
    {
        let view = view.clone();
        let backdrop = modal.clone();
        dom::add_listener(&modal, "click", move |ev: web::MouseEvent| {
            let on_backdrop = ev
                .target()
                .and_then(|t| t.dyn_into::<web::HtmlElement>().ok())
                .is_some_and(|t| t == backdrop);
            if on_backdrop {
                view.borrow_mut().run(LightboxCommand::Close);
            }
        });
    }

    Ok(view)
}
