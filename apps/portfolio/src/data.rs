use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::info;

use crate::assets::asset_relative_path;
use crate::config::Config;
use crate::models::portfolio::Portfolio;

/// Reads and parses the portfolio data file. Called once at startup; a
/// missing or malformed file is fatal.
pub async fn load_portfolio(path: &Path) -> Result<Portfolio> {
    info!("Loading portfolio data from {}", path.display());

    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read portfolio data file {}", path.display()))?;
    let portfolio: Portfolio = serde_json::from_str(&raw)
        .with_context(|| format!("Malformed portfolio data file {}", path.display()))?;

    info!(
        "Portfolio loaded: {} timeline events, {} projects, {} skills, {} achievements",
        portfolio.timeline.len(),
        portfolio.projects.len(),
        portfolio.skills.len(),
        portfolio.achievements.len()
    );
    Ok(portfolio)
}

/// Reads the global stylesheet that every page inlines.
pub async fn load_stylesheet(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read stylesheet {}", path.display()))
}

/// Fails unless the resume and the profile picture are present on disk.
pub async fn ensure_assets(config: &Config) -> Result<()> {
    for path in [config.resume_path(), config.profile_picture_path()] {
        let is_file = tokio::fs::metadata(&path)
            .await
            .map(|meta| meta.is_file())
            .unwrap_or(false);
        if !is_file {
            bail!("Required asset {} is missing", path.display());
        }
    }
    Ok(())
}

/// A configured `profile_pic` must live inside the asset directory, the
/// only place pictures are served from.
pub fn ensure_profile_pic_servable(portfolio: &Portfolio, config: &Config) -> Result<()> {
    if let Some(path) = &portfolio.profile.profile_pic {
        if asset_relative_path(&config.asset_dir, Path::new(path)).is_none() {
            bail!(
                "profile.profile_pic '{}' is outside the asset directory {}",
                path,
                config.asset_dir.display()
            );
        }
    }
    Ok(())
}
