use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
};

use crate::config::RESUME_FILE;
use crate::errors::AppError;
use crate::state::AppState;

/// GET /resume
/// Streams the resume as a download named `resume.pdf`.
pub async fn handle_resume(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let bytes = state.assets.read_resume().await?;
    Ok((
        [
            (header::CONTENT_TYPE, "application/octet-stream".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{RESUME_FILE}\""),
            ),
        ],
        bytes,
    ))
}
