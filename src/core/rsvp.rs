use super::error::{SiteError, ValidationError};

pub const REQUIRED_FIELDS: [&str; 3] = ["name", "email", "attendance"];

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all required fields.";
pub const SUCCESS_MESSAGE: &str =
    "Thank you! Your RSVP has been received. We look forward to celebrating with you!";
pub const SENDING_LABEL_HTML: &str = "<span>Sending...</span>";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RsvpSubmission {
    pub name: String,
    pub email: String,
    pub attendance: String,
}

impl RsvpSubmission {
    /// Builds a submission from raw form values looked up by field name.
    pub fn from_fields<F>(mut get: F) -> Result<Self, ValidationError>
    where
        F: FnMut(&'static str) -> Option<String>,
    {
        let mut take = |field: &'static str| match get(field) {
            Some(v) if !v.is_empty() => Ok(v),
            _ => Err(ValidationError { field }),
        };
        let [name, email, attendance] = REQUIRED_FIELDS;
        Ok(Self {
            name: take(name)?,
            email: take(email)?,
            attendance: take(attendance)?,
        })
    }
}

/// Submit-button lifecycle for the simulated RSVP request.
#[derive(Clone, Debug, Default)]
pub struct RsvpForm {
    sending: Option<RsvpSubmission>,
}

impl RsvpForm {
    pub fn is_sending(&self) -> bool {
        self.sending.is_some()
    }

    /// Validates and starts the simulated request. The caller disables the
    /// submit button and completes after `RSVP_SUBMIT_DELAY_MS`.
    pub fn begin<F>(&mut self, get: F) -> Result<&RsvpSubmission, SiteError>
    where
        F: FnMut(&'static str) -> Option<String>,
    {
        let submission = RsvpSubmission::from_fields(get)?;
        let in_flight: &RsvpSubmission = self.sending.insert(submission);
        Ok(in_flight)
    }

    /// Finishes the in-flight request. `None` when nothing was sending.
    pub fn complete(&mut self) -> Option<RsvpSubmission> {
        self.sending.take()
    }
}
