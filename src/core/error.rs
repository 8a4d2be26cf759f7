use thiserror::Error;

/// A required RSVP field that was missing or blank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("required field `{field}` is empty")]
pub struct ValidationError {
    pub field: &'static str,
}

#[derive(Debug, Error)]
pub enum SiteError {
    /// A DOM hook the component depends on is absent; the component stays inert.
    #[error("missing element: {0}")]
    MissingElement(&'static str),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The browser refused `play()`, usually because of the autoplay policy.
    #[error("playback rejected: {0}")]
    PlaybackRejected(String),
    #[error("dom call failed: {0}")]
    Dom(String),
}

impl SiteError {
    pub fn is_missing_element(&self) -> bool {
        matches!(self, SiteError::MissingElement(_))
    }
}
