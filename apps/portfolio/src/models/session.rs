use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::portfolio::{Portfolio, Profile};

/// Everything one visitor can change. Created in full by [`SessionState::new`]
/// the first time a session is seen, then threaded explicitly through every
/// handler and view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionState {
    pub profile: Profile,
    pub contact: ContactForm,
    pub created_at: DateTime<Utc>,
}

impl SessionState {
    pub fn new(portfolio: &Portfolio) -> Self {
        SessionState {
            profile: portfolio.profile.clone(),
            contact: ContactForm::default(),
            created_at: Utc::now(),
        }
    }

    /// Applies a Customize submission. Name and bio are taken verbatim,
    /// empty strings included. `picture_path` is only passed when a new
    /// picture was written to disk.
    pub fn apply_profile_update(&mut self, update: ProfileUpdate, picture_path: Option<String>) {
        self.profile.name = update.name;
        self.profile.bio = update.bio;
        if let Some(path) = picture_path {
            self.profile.profile_pic = Some(path);
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Contact form
// ────────────────────────────────────────────────────────────────────────────

/// Transient contact form values. Never persisted beyond the session and
/// never transmitted anywhere.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    /// At least one field was empty; the submitted values are kept.
    MissingFields,
    /// All fields were present; the form has been cleared. Nothing is sent.
    Sent,
}

impl ContactForm {
    /// Runs one submit of the Editing/Submitted state machine.
    ///
    /// Emptiness is an exact check: whitespace-only values count as present.
    pub fn submit(&mut self, submission: ContactSubmission) -> ContactOutcome {
        let ContactSubmission {
            name,
            email,
            message,
        } = submission;

        if name.is_empty() || email.is_empty() || message.is_empty() {
            self.name = name;
            self.email = email;
            self.message = message;
            return ContactOutcome::MissingFields;
        }

        *self = ContactForm::default();
        ContactOutcome::Sent
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Customize form
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub name: String,
    pub bio: String,
}
