use askama::Template;
use axum::response::Html;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::portfolio::Project;
use crate::state::AppState;
use crate::views::{render_page, Choice, Layout, Section};

/// Project filter options, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum Category {
    #[default]
    All,
    #[serde(rename = "Year 1")]
    Year1,
    #[serde(rename = "Year 2")]
    Year2,
    #[serde(rename = "Year 3")]
    Year3,
    Dissertation,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::All,
        Category::Year1,
        Category::Year2,
        Category::Year3,
        Category::Dissertation,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Year1 => "Year 1",
            Category::Year2 => "Year 2",
            Category::Year3 => "Year 3",
            Category::Dissertation => "Dissertation",
        }
    }
}

/// Keeps projects whose `type` contains the category label, ignoring case.
/// This is substring matching: "Year 1" also keeps a "Year 10" project.
pub fn filter_projects(projects: &[Project], category: Category) -> Vec<&Project> {
    if category == Category::All {
        return projects.iter().collect();
    }

    let needle = category.label().to_lowercase();
    projects
        .iter()
        .filter(|project| project.kind.to_lowercase().contains(&needle))
        .collect()
}

#[derive(Template)]
#[template(path = "projects.html")]
struct ProjectsTemplate<'a> {
    layout: Layout,
    categories: Vec<Choice>,
    projects: Vec<&'a Project>,
}

pub fn render(state: &AppState, category: Category) -> Result<Html<String>, AppError> {
    let template = ProjectsTemplate {
        layout: Layout::new(state, Section::Projects),
        categories: Category::ALL
            .iter()
            .map(|c| Choice {
                label: c.label(),
                selected: *c == category,
            })
            .collect(),
        projects: filter_projects(&state.portfolio.projects, category),
    };
    render_page(&template)
}
