use askama::Template;
use axum::response::Html;

use crate::errors::AppError;
use crate::models::portfolio::Skill;
use crate::state::AppState;
use crate::views::{render_page, Layout, Section};

/// Skill levels are rendered exactly as stored; no clamping.
#[derive(Template)]
#[template(path = "skills.html")]
struct SkillsTemplate<'a> {
    layout: Layout,
    skills: &'a [Skill],
    achievements: &'a [String],
}

pub fn render(state: &AppState) -> Result<Html<String>, AppError> {
    let template = SkillsTemplate {
        layout: Layout::new(state, Section::Skills),
        skills: &state.portfolio.skills,
        achievements: &state.portfolio.achievements,
    };
    render_page(&template)
}
