use std::sync::Arc;

use crate::assets::AssetStore;
use crate::config::Config;
use crate::models::portfolio::Portfolio;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Everything here is read-only after startup except the profile picture
/// file behind `assets`. Per-visitor state lives in the session store.
#[derive(Clone)]
pub struct AppState {
    pub portfolio: Arc<Portfolio>,
    /// Global stylesheet, inlined into every page.
    pub stylesheet: Arc<str>,
    pub assets: Arc<AssetStore>,
    pub config: Config,
}
