use askama::Template;
use axum::response::Html;
use tracing::info;

use crate::errors::AppError;
use crate::models::portfolio::{SocialLinks, SocialPlatform};
use crate::models::session::{ContactForm, ContactOutcome, ContactSubmission, SessionState};
use crate::state::AppState;
use crate::views::{render_page, Layout, Notice, Section};

pub const MISSING_FIELDS_WARNING: &str = "Fields cannot be empty!";
pub const SENT_MESSAGE: &str = "Message sent successfully!";

struct SocialSlot<'a> {
    icon: &'static str,
    label: &'static str,
    url: &'a str,
}

#[derive(Template)]
#[template(path = "contact.html")]
struct ContactTemplate<'a> {
    layout: Layout,
    form: &'a ContactForm,
    notice: Option<Notice>,
    socials: Vec<SocialSlot<'a>>,
}

fn social_slots(links: &SocialLinks) -> Vec<SocialSlot<'_>> {
    SocialPlatform::ALL
        .iter()
        .map(|platform| SocialSlot {
            icon: platform.icon(),
            label: platform.label(),
            url: links.url(*platform),
        })
        .collect()
}

/// Handles a "Send Message" click. Nothing is delivered anywhere.
pub fn submit(session: &mut SessionState, submission: ContactSubmission) -> ContactOutcome {
    let (name_len, email_len, message_len) = (
        submission.name.len(),
        submission.email.len(),
        submission.message.len(),
    );
    let outcome = session.contact.submit(submission);
    info!(
        ?outcome,
        name_len, email_len, message_len, "Contact form submitted"
    );
    outcome
}

pub fn render(
    state: &AppState,
    session: &SessionState,
    outcome: Option<ContactOutcome>,
) -> Result<Html<String>, AppError> {
    let notice = outcome.map(|outcome| match outcome {
        ContactOutcome::MissingFields => Notice::warning(MISSING_FIELDS_WARNING),
        ContactOutcome::Sent => Notice::success(SENT_MESSAGE),
    });

    let template = ContactTemplate {
        layout: Layout::new(state, Section::Contact),
        form: &session.contact,
        notice,
        socials: social_slots(&state.portfolio.socials),
    };
    render_page(&template)
}
