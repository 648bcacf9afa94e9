use askama::Template;
use axum::response::Html;

use crate::errors::AppError;
use crate::models::portfolio::Profile;
use crate::models::session::SessionState;
use crate::state::AppState;
use crate::views::{render_page, timeline, Layout, Section};

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate<'a> {
    layout: Layout,
    profile: &'a Profile,
    picture_url: String,
    timeline_html: String,
}

/// Home shows the visitor's (possibly customized) profile, always with the
/// picture at the fixed asset path, followed by the timeline.
pub fn render(state: &AppState, session: &SessionState) -> Result<Html<String>, AppError> {
    let template = HomeTemplate {
        layout: Layout::new(state, Section::Home),
        profile: &session.profile,
        picture_url: state.assets.fixed_picture_url(),
        timeline_html: timeline::render(&state.portfolio.timeline)?,
    };
    render_page(&template)
}
