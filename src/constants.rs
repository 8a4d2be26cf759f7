/// DOM hooks the page markup exposes to this crate.
///
/// Selectors, ids and class names live here so the wiring code reads as
/// behavior and the markup contract is visible in one place.
// Navigation
pub const NAVBAR: &str = ".navbar";
pub const NAV_TOGGLE: &str = ".nav-toggle";
pub const NAV_LINKS: &str = ".nav-links";
pub const NAV_LINK_ITEMS: &str = ".nav-links a";
pub const ANCHOR_LINKS: &str = "a[href^=\"#\"]";
pub const SECTIONS_WITH_ID: &str = "section[id]";

// Hero
pub const HERO_CONTENT: &str = ".hero .hero-content";
pub const HERO_TAGLINE: &str = ".hero-tagline";
pub const HERO_TITLE_SPANS: &str = ".hero-title span";
pub const TITLE_STAGES: [&str; 3] = [".bride-name", ".ampersand", ".groom-name"];

// Decorations
pub const PAISLEY_1: &str = ".paisley-1";
pub const PAISLEY_2: &str = ".paisley-2";
pub const MANDALA_TUNNEL_ID: &str = "mandala-tunnel";
pub const TUNNEL_RING: &str = ".tunnel-ring";
pub const TILT_CARDS: &str = ".invitation-card, .couple-card";

// Rocket timeline
pub const TIMELINE_CONTAINER: &str = ".timeline-container";
pub const ROCKET: &str = "#rocket";
pub const TIMELINE_LINE: &str = ".timeline-line";
pub const TIMELINE_EVENTS: &str = ".timeline-event";

// Reveal + lazy loading
pub const ANIMATE_ON_SCROLL: &str = ".animate-on-scroll";
pub const LAZY_IMAGES: &str = "img[data-src]";

// Countdown slots
pub const COUNTDOWN_IDS: [&str; 4] = ["days", "hours", "minutes", "seconds"];

// Gallery + lightbox
pub const GALLERY_ITEMS: &str = ".gallery-item";
pub const LIGHTBOX_ID: &str = "lightbox";
pub const LIGHTBOX_IMAGE_ID: &str = "lightboxImage";
pub const LIGHTBOX_CLOSE: &str = ".lightbox-close";
pub const LIGHTBOX_PREV: &str = ".lightbox-prev";
pub const LIGHTBOX_NEXT: &str = ".lightbox-next";

// RSVP
pub const RSVP_FORM_ID: &str = "rsvpForm";
pub const SUBMIT_BUTTON: &str = ".submit-btn";

// Notifications
pub const NOTIFICATION: &str = ".notification";
pub const NOTIFICATION_CLOSE: &str = ".notification-close";

// Audio
pub const MUSIC_ID: &str = "wedding-music";
pub const MUSIC_BUTTON_ID: &str = "music-btn";

// Effects
pub const PETAL_CONTAINER_CLASS: &str = "petal-container";
pub const PETAL_CLASS: &str = "petal";
pub const PRELOADER: &str = ".preloader";

// Classes interpreted by the stylesheet
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_VISIBLE: &str = "visible";
pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_PLAYING: &str = "playing";
pub const CLASS_LOADED: &str = "loaded";
