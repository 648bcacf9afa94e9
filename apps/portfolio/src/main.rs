mod assets;
mod config;
mod data;
mod errors;
mod models;
mod routes;
mod session;
mod state;
#[cfg(test)]
mod test_support;
mod views;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::assets::AssetStore;
use crate::config::Config;
use crate::data::{ensure_assets, ensure_profile_pic_servable, load_portfolio, load_stylesheet};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio v{}", env!("CARGO_PKG_VERSION"));

    // Static content: any failure here is fatal
    let portfolio = load_portfolio(&config.data_path).await?;
    let stylesheet = load_stylesheet(&config.stylesheet_path).await?;
    ensure_assets(&config).await?;
    ensure_profile_pic_servable(&portfolio, &config)?;
    info!("Assets present in {}", config.asset_dir.display());

    let state = AppState {
        portfolio: Arc::new(portfolio),
        stylesheet: Arc::from(stylesheet),
        assets: Arc::new(AssetStore::new(&config)),
        config: config.clone(),
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
