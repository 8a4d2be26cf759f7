pub mod constants;
pub mod coordinator;
pub mod countdown;
pub mod error;
pub mod lifecycle;
pub mod lightbox;
pub mod nav;
pub mod notify;
pub mod petals;
pub mod playback;
pub mod reveal;
pub mod rsvp;
pub mod tilt;
pub mod typing;

pub use coordinator::*;
pub use countdown::CountdownFields;
pub use error::SiteError;
pub use lifecycle::ReadyPhase;
pub use lightbox::{GalleryImage, Lightbox, LightboxCommand};
pub use nav::{LockHolder, MobileMenu, ScrollLock};
pub use notify::NotificationKind;
pub use petals::PetalStream;
pub use playback::{ButtonFace, MusicPlayer, ToggleAction};
pub use reveal::{IntersectionSample, RevealAction, RevealConfig, RevealSet};
pub use rsvp::RsvpForm;
pub use typing::Typewriter;
