pub mod assets;
pub mod health;
pub mod pages;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::session::session_layer;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let asset_files = ServeDir::new(&state.config.asset_dir);
    let sessions = session_layer(&state.config);
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Pages
        .route("/", get(pages::handle_page))
        .route("/contact", post(pages::handle_contact))
        .route(
            "/customize",
            post(pages::handle_customize).layer(DefaultBodyLimit::max(upload_limit)),
        )
        // Static assets
        .route("/resume", get(assets::handle_resume))
        .nest_service("/asset", asset_files)
        .layer(sessions)
        .with_state(state)
}
