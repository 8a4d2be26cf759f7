use super::constants::HEADER_OFFSET_PX;
use std::collections::BTreeSet;

/// Components that may lock page scrolling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LockHolder {
    Menu,
    Lightbox,
}

/// Sole owner of `body.style.overflow`. Scrolling stays locked while anyone
/// holds it.
#[derive(Clone, Debug, Default)]
pub struct ScrollLock {
    holders: BTreeSet<LockHolder>,
}

impl ScrollLock {
    pub fn set(&mut self, holder: LockHolder, locked: bool) -> &'static str {
        if locked {
            self.holders.insert(holder);
        } else {
            self.holders.remove(&holder);
        }
        self.overflow()
    }

    pub fn is_locked(&self) -> bool {
        !self.holders.is_empty()
    }

    /// Value for `body.style.overflow`.
    pub fn overflow(&self) -> &'static str {
        if self.is_locked() {
            "hidden"
        } else {
            ""
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// In-page anchor a link points at, or `None` for a bare `#` or an external href.
pub fn anchor_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(href),
        _ => None,
    }
}

/// Document offset to scroll to so the target sits below the fixed header.
#[inline]
pub fn smooth_scroll_top(target_client_top: f64, page_offset: f64) -> f64 {
    target_client_top + page_offset - HEADER_OFFSET_PX
}
