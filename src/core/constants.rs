// Tuning constants shared by the scroll bindings, effects and timers.

// Navbar
pub const NAVBAR_SCROLLED_THRESHOLD_PX: f64 = 100.0; // offset beyond which the bar is "scrolled"

// Parallax hero
pub const PARALLAX_TRANSLATE_FACTOR: f64 = 0.3;
pub const PARALLAX_FADE_FACTOR: f64 = 0.5; // opacity lost over one viewport of scroll

// Floating paisleys: (fixed rotation in deg, translate per px of scroll)
pub const PAISLEY_1_MOTION: (f64, f64) = (-30.0, 0.1);
pub const PAISLEY_2_MOTION: (f64, f64) = (30.0, -0.08);

// Mandala tunnel
pub const MANDALA_SPEED_STEP: f64 = 0.05; // deg per px, multiplied by (ring index + 1)
pub const MANDALA_SCALE_STEP: f64 = 0.0002; // scale per px, multiplied by (ring index + 1)

// Rocket timeline
pub const ROCKET_TRAVEL_INSET_PX: f64 = 150.0; // container height not covered by the rocket
pub const TIMELINE_LOOKAHEAD_PX: f64 = 100.0; // events light up this far ahead of the rocket

// Active nav
pub const SECTION_ACTIVATION_OFFSET_PX: f64 = 150.0;

// Smooth scrolling
pub const HEADER_OFFSET_PX: f64 = 80.0;

// Reveal-on-scroll observer
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";

// Lazy images use the browser defaults
pub const LAZY_THRESHOLD: f64 = 0.0;
pub const LAZY_ROOT_MARGIN: &str = "0px";

// Countdown target, browser-local time (month is 1-based here)
pub const EVENT_YEAR: u32 = 2026;
pub const EVENT_MONTH: u32 = 2;
pub const EVENT_DAY: u32 = 15;
pub const EVENT_HOUR: u32 = 10;
pub const COUNTDOWN_TICK_MS: i32 = 1000;

// Petal rain
pub const PETAL_POOL_SIZE: usize = 30;
pub const PETAL_STAGGER_MS: i32 = 300;
pub const PETAL_MIN_DURATION_SECS: f64 = 6.0;
pub const PETAL_DURATION_SPAN_SECS: f64 = 6.0;
pub const PETAL_MIN_SIZE_PX: f64 = 10.0;
pub const PETAL_SIZE_SPAN_PX: f64 = 15.0;

// Typing effect
pub const TYPING_START_DELAY_MS: i32 = 1500;
pub const TYPING_CHAR_INTERVAL_MS: i32 = 50;

// Card tilt
pub const TILT_MAX_DEG: f64 = 5.0;
pub const TILT_PERSPECTIVE_PX: f64 = 1000.0;
pub const TILT_HOVER_SCALE: f64 = 1.02;

// RSVP + notifications
pub const RSVP_SUBMIT_DELAY_MS: i32 = 1500;
pub const NOTIFICATION_LIFETIME_MS: i32 = 5000;
pub const NOTIFICATION_EXIT_MS: i32 = 300;

// Hero title stages and preloader
pub const TITLE_STAGE_STEP_MS: i32 = 500;
pub const PRELOADER_FADE_MS: i32 = 500;
