use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable has a default, so a bare checkout starts with the bundled
/// `data/`, `styles/` and `asset/` directories.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_path: PathBuf,
    pub stylesheet_path: PathBuf,
    pub asset_dir: PathBuf,
    pub max_upload_bytes: usize,
    pub secure_cookies: bool,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            data_path: env_path("PORTFOLIO_DATA_PATH", "data/data.json"),
            stylesheet_path: env_path("PORTFOLIO_STYLESHEET_PATH", "styles/styles.css"),
            asset_dir: env_path("PORTFOLIO_ASSET_DIR", "asset"),
            max_upload_bytes: match std::env::var("PORTFOLIO_MAX_UPLOAD_BYTES") {
                Ok(raw) => raw
                    .parse::<usize>()
                    .context("PORTFOLIO_MAX_UPLOAD_BYTES must be a byte count")?,
                Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
            },
            secure_cookies: match std::env::var("PORTFOLIO_SECURE_COOKIES") {
                Ok(raw) => raw
                    .parse::<bool>()
                    .context("PORTFOLIO_SECURE_COOKIES must be 'true' or 'false'")?,
                Err(_) => false,
            },
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Fixed on-disk location of the profile picture.
    pub fn profile_picture_path(&self) -> PathBuf {
        self.asset_dir.join(PROFILE_PICTURE_FILE)
    }

    pub fn resume_path(&self) -> PathBuf {
        self.asset_dir.join(RESUME_FILE)
    }
}

pub const PROFILE_PICTURE_FILE: &str = "profile.jpg";
pub const RESUME_FILE: &str = "resume.pdf";

fn env_path(key: &str, default: &str) -> PathBuf {
    std::env::var(key)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(default))
}
