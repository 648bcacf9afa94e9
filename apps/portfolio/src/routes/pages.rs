//! Axum route handlers for the portfolio pages.

use axum::{
    extract::{Multipart, Query, State},
    response::Html,
    Form,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::errors::AppError;
use crate::models::session::ContactSubmission;
use crate::session::{load_session_state, save_session_state};
use crate::state::AppState;
use crate::views::customize::CustomizeSubmission;
use crate::views::projects::Category;
use crate::views::{self, Section};

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub section: Section,
    #[serde(default)]
    pub category: Category,
}

/// GET /?section=<Section>&category=<Category>
///
/// The navigation menu. Dispatches to exactly one view; Home is followed by
/// the timeline.
pub async fn handle_page(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, AppError> {
    let session_state = load_session_state(&session, &state.portfolio).await?;

    match query.section {
        Section::Home => views::home::render(&state, &session_state),
        Section::Projects => views::projects::render(&state, query.category),
        Section::Skills => views::skills::render(&state),
        Section::Contact => views::contact::render(&state, &session_state, None),
        Section::Customize => views::customize::render(&state, &session_state, false),
    }
}

/// POST /contact
pub async fn handle_contact(
    State(state): State<AppState>,
    session: Session,
    Form(submission): Form<ContactSubmission>,
) -> Result<Html<String>, AppError> {
    let mut session_state = load_session_state(&session, &state.portfolio).await?;

    let outcome = views::contact::submit(&mut session_state, submission);
    save_session_state(&session, &session_state).await?;

    views::contact::render(&state, &session_state, Some(outcome))
}

/// POST /customize
///
/// Multipart form with `name`, `bio` and an optional `picture` file.
pub async fn handle_customize(
    State(state): State<AppState>,
    session: Session,
    multipart: Multipart,
) -> Result<Html<String>, AppError> {
    let mut session_state = load_session_state(&session, &state.portfolio).await?;

    let submission = CustomizeSubmission::from_multipart(multipart).await?;
    views::customize::submit(&state, &mut session_state, submission).await?;
    save_session_state(&session, &session_state).await?;

    views::customize::render(&state, &session_state, true)
}
