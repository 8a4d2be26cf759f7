pub mod keyboard;
pub mod nav;
pub mod pointer;
pub mod scroll;

pub use keyboard::wire_lightbox_keydown;
pub use nav::{wire_mobile_menu, wire_smooth_scrolling};
pub use pointer::wire_tilt_cards;
