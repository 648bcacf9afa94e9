//! Page rendering. One module per menu section; each builds an Askama
//! template from the static data store and/or the visitor's session state.

pub mod contact;
pub mod customize;
pub mod home;
pub mod projects;
pub mod skills;
pub mod timeline;

use std::sync::Arc;

use askama::Template;
use axum::response::Html;
use chrono::{Datelike, Utc};
use serde::Deserialize;

use crate::errors::AppError;
use crate::state::AppState;

/// The navigation menu. Deserializes from the exact labels, so any other
/// value is rejected before reaching a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum Section {
    #[default]
    Home,
    Projects,
    Skills,
    Contact,
    Customize,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Projects,
        Section::Skills,
        Section::Contact,
        Section::Customize,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
            Section::Customize => "Customize",
        }
    }
}

/// One `<option>` of a select control.
#[derive(Debug, Clone)]
pub struct Choice {
    pub label: &'static str,
    pub selected: bool,
}

/// Shared page chrome: inlined stylesheet, sidebar navigation, footer.
#[derive(Debug, Clone)]
pub struct Layout {
    pub stylesheet: Arc<str>,
    pub nav: Vec<Choice>,
    pub year: i32,
}

impl Layout {
    pub fn new(state: &AppState, active: Section) -> Self {
        Layout {
            stylesheet: Arc::clone(&state.stylesheet),
            nav: Section::ALL
                .iter()
                .map(|section| Choice {
                    label: section.label(),
                    selected: *section == active,
                })
                .collect(),
            year: Utc::now().year(),
        }
    }
}

/// Status banner shown after a form submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub class: &'static str,
    pub text: &'static str,
}

impl Notice {
    pub fn warning(text: &'static str) -> Self {
        Notice {
            class: "warning",
            text,
        }
    }

    pub fn success(text: &'static str) -> Self {
        Notice {
            class: "success",
            text,
        }
    }
}

pub fn render_page(template: &impl Template) -> Result<Html<String>, AppError> {
    Ok(Html(template.render()?))
}
