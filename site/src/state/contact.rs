//! Contact form state machine.
//!
//! DESIGN
//! ======
//! Submission is simulated: after [`SUBMIT_DELAY_MS`] the form resets and a
//! success banner shows for [`BANNER_TIMEOUT_MS`]. Every completed submit
//! bumps a generation counter, so a stale banner timer from an earlier
//! submit cannot hide a newer banner.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::fmt;

use thiserror::Error;

/// Simulated delivery latency.
pub const SUBMIT_DELAY_MS: u32 = 1_000;

/// How long the success banner stays visible.
pub const BANNER_TIMEOUT_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    /// DOM id, shared by the `<label for>` and the control.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(Field),
    #[error("enter a valid email address")]
    InvalidEmail,
    #[error("a message is already being sent")]
    AlreadySubmitting,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    /// All four fields are required; email needs a local part and a dotted domain.
    ///
    /// # Errors
    ///
    /// The first missing field in form order, then [`ContactError::InvalidEmail`].
    pub fn validate(&self) -> Result<(), ContactError> {
        if let Some(field) = Field::ALL.into_iter().find(|f| self.get(*f).trim().is_empty()) {
            return Err(ContactError::MissingField(field));
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }
}

fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Sent,
}

#[derive(Clone, Debug, Default)]
pub struct ContactState {
    pub form: ContactForm,
    pub phase: Phase,
    /// Incremented on each completed submit; banner timers carry it as a ticket.
    pub generation: u64,
    /// Last validation failure, cleared on the next edit.
    pub error: Option<ContactError>,
}

impl ContactState {
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    #[must_use]
    pub fn banner_visible(&self) -> bool {
        self.phase == Phase::Sent
    }

    pub fn edit(&mut self, field: Field, value: String) {
        self.form.set(field, value);
        self.error = None;
    }

    /// Validate and move to `Submitting`, returning the snapshot being sent.
    ///
    /// # Errors
    ///
    /// [`ContactError::AlreadySubmitting`] while a submit is in flight, or the
    /// validation failure. State is unchanged apart from `error`.
    pub fn begin_submit(&mut self) -> Result<ContactForm, ContactError> {
        if self.is_submitting() {
            return Err(ContactError::AlreadySubmitting);
        }
        if let Err(err) = self.form.validate() {
            self.error = Some(err.clone());
            return Err(err);
        }
        self.error = None;
        self.phase = Phase::Submitting;
        Ok(self.form.clone())
    }

    /// Finish the simulated send: clear fields, show the banner.
    ///
    /// Returns the ticket the banner timer must present to [`Self::dismiss_banner`].
    pub fn complete_submit(&mut self) -> u64 {
        self.form = ContactForm::default();
        self.phase = Phase::Sent;
        self.generation += 1;
        self.generation
    }

    /// Hide the banner if `ticket` still names the latest submit.
    pub fn dismiss_banner(&mut self, ticket: u64) {
        if self.phase == Phase::Sent && ticket == self.generation {
            self.phase = Phase::Idle;
        }
    }
}
