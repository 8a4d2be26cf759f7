use crate::constants::*;
use crate::core::nav::{anchor_target, smooth_scroll_top};
use crate::core::{LockHolder, MobileMenu, SiteError};
use crate::dom::{self, BodyScrollLock};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Mobile menu: the toggle button and link list share the `active` class.
#[derive(Clone)]
pub struct MenuHandle {
    menu: Rc<RefCell<MobileMenu>>,
    toggle: web::HtmlElement,
    links: web::HtmlElement,
    scroll_lock: BodyScrollLock,
}

impl MenuHandle {
    fn render(&self, open: bool) {
        dom::set_class(&self.toggle, CLASS_ACTIVE, open);
        dom::set_class(&self.links, CLASS_ACTIVE, open);
        self.scroll_lock.set(LockHolder::Menu, open);
    }

    pub fn toggle(&self) {
        let open = self.menu.borrow_mut().toggle();
        self.render(open);
    }

    pub fn close(&self) {
        if !self.menu.borrow().is_open() {
            return;
        }
        self.menu.borrow_mut().close();
        self.render(false);
    }
}

pub fn wire_mobile_menu(
    document: &web::Document,
    scroll_lock: BodyScrollLock,
) -> Result<MenuHandle, SiteError> {
    let toggle = dom::require(dom::query(document, NAV_TOGGLE), NAV_TOGGLE)?;
    let links = dom::require(dom::query(document, NAV_LINKS), NAV_LINKS)?;
    let handle = MenuHandle {
        menu: Rc::new(RefCell::new(MobileMenu::default())),
        toggle: toggle.clone(),
        links,
        scroll_lock,
    };

    let on_toggle = handle.clone();
    dom::add_click_listener(&toggle, move || on_toggle.toggle());

    for link in dom::query_all(document, NAV_LINK_ITEMS) {
        let on_link = handle.clone();
        dom::add_click_listener(&link, move || on_link.close());
    }
    Ok(handle)
}

/// In-page anchors scroll smoothly below the fixed header and close the menu.
pub fn wire_smooth_scrolling(
    window: &web::Window,
    document: &web::Document,
    menu: Option<MenuHandle>,
) {
    for link in dom::query_all(document, ANCHOR_LINKS) {
        let window = window.clone();
        let document = document.clone();
        let menu = menu.clone();
        let anchor = link.clone();
        dom::add_listener(&link, "click", move |ev: web::MouseEvent| {
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            let Some(selector) = anchor_target(&href) else {
                return;
            };
            ev.prevent_default();
            let Some(target) = document.query_selector(selector).ok().flatten() else {
                return;
            };
            let page_offset = window.page_y_offset().unwrap_or(0.0);
            let top = smooth_scroll_top(target.get_bounding_client_rect().top(), page_offset);

            let opts = web::ScrollToOptions::new();
            opts.set_top(top);
            opts.set_behavior(web::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&opts);

            if let Some(menu) = &menu {
                menu.close();
            }
        });
    }
}
