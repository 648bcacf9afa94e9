use askama::Template;
use axum::extract::Multipart;
use axum::response::Html;
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::models::portfolio::Profile;
use crate::models::session::{ProfileUpdate, SessionState};
use crate::state::AppState;
use crate::views::{render_page, Layout, Notice, Section};

pub const UPDATED_MESSAGE: &str = "Profile updated successfully!";

/// A decoded "Update Profile" submit.
#[derive(Debug, Default)]
pub struct CustomizeSubmission {
    pub update: ProfileUpdate,
    pub picture: Option<Bytes>,
}

impl CustomizeSubmission {
    /// Reads the `name`, `bio` and `picture` parts. Absent text parts are
    /// empty; a file part with no filename or no bytes means no upload.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut submission = CustomizeSubmission::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };
            match name.as_str() {
                "name" => submission.update.name = field.text().await?,
                "bio" => submission.update.bio = field.text().await?,
                "picture" => {
                    let has_file_name = field.file_name().is_some_and(|f| !f.is_empty());
                    let data = field.bytes().await?;
                    if has_file_name && !data.is_empty() {
                        submission.picture = Some(data);
                    }
                }
                _ => {}
            }
        }

        Ok(submission)
    }
}

/// Applies a Customize submit: name and bio unconditionally, and the picture
/// (overwriting the shared fixed-path file) when one was uploaded.
pub async fn submit(
    state: &AppState,
    session: &mut SessionState,
    submission: CustomizeSubmission,
) -> Result<(), AppError> {
    let picture_path = match submission.picture {
        Some(bytes) => {
            state.assets.replace_profile_picture(bytes).await?;
            Some(state.assets.picture_reference())
        }
        None => None,
    };

    info!(
        picture_replaced = picture_path.is_some(),
        "Session profile updated"
    );
    session.apply_profile_update(submission.update, picture_path);
    Ok(())
}

#[derive(Template)]
#[template(path = "customize.html")]
struct CustomizeTemplate<'a> {
    layout: Layout,
    profile: &'a Profile,
    notice: Option<Notice>,
    picture_url: Option<String>,
}

pub fn render(
    state: &AppState,
    session: &SessionState,
    updated: bool,
) -> Result<Html<String>, AppError> {
    let template = CustomizeTemplate {
        layout: Layout::new(state, Section::Customize),
        profile: &session.profile,
        notice: updated.then(|| Notice::success(UPDATED_MESSAGE)),
        picture_url: session
            .profile
            .profile_pic
            .as_deref()
            .and_then(|path| state.assets.picture_url(path)),
    };
    render_page(&template)
}
