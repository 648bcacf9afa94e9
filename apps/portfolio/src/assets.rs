use std::io::Write;
use std::path::{Component, Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use bytes::Bytes;
use tokio::sync::Mutex;
use tracing::info;

use crate::config::{Config, PROFILE_PICTURE_FILE};
use crate::errors::AppError;

/// Binary assets on disk: the downloadable resume and the single, shared
/// profile picture.
///
/// The picture lives at one fixed path for every session, so the last
/// upload wins. Writes go through a temp file in the same directory and an
/// atomic rename, serialized by `write_lock`, so readers never observe a
/// partially written image.
#[derive(Debug)]
pub struct AssetStore {
    asset_dir: PathBuf,
    resume_path: PathBuf,
    picture_path: PathBuf,
    write_lock: Mutex<()>,
    revision: AtomicU64,
}

impl AssetStore {
    pub fn new(config: &Config) -> Self {
        AssetStore {
            asset_dir: config.asset_dir.clone(),
            resume_path: config.resume_path(),
            picture_path: config.profile_picture_path(),
            write_lock: Mutex::new(()),
            revision: AtomicU64::new(0),
        }
    }

    /// Path recorded in the session profile after an upload.
    pub fn picture_reference(&self) -> String {
        self.picture_path.to_string_lossy().into_owned()
    }

    /// Browser URL for a profile picture path, served from `/asset`, or
    /// `None` when the path is not inside the asset directory.
    /// The revision suffix changes after every replacement.
    pub fn picture_url(&self, path: &str) -> Option<String> {
        let relative = asset_relative_path(&self.asset_dir, Path::new(path))?;
        Some(format!("/asset/{}?v={}", relative, self.revision()))
    }

    /// URL of the fixed-path picture shown on the Home view.
    pub fn fixed_picture_url(&self) -> String {
        format!("/asset/{}?v={}", PROFILE_PICTURE_FILE, self.revision())
    }

    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::SeqCst)
    }

    pub async fn read_resume(&self) -> Result<Vec<u8>, AppError> {
        Ok(tokio::fs::read(&self.resume_path).await?)
    }

    /// Overwrites the profile picture with `bytes`. No backup is kept.
    pub async fn replace_profile_picture(&self, bytes: Bytes) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;

        let dir = self.asset_dir.clone();
        let target = self.picture_path.clone();
        let len = bytes.len();

        tokio::task::spawn_blocking(move || -> std::io::Result<()> {
            let mut tmp = tempfile::NamedTempFile::new_in(&dir)?;
            tmp.write_all(&bytes)?;
            tmp.as_file().sync_all()?;
            tmp.persist(&target).map_err(|e| e.error)?;
            Ok(())
        })
        .await
        .map_err(|e| AppError::Internal(e.into()))??;

        let revision = self.revision.fetch_add(1, Ordering::SeqCst) + 1;
        info!(
            "Profile picture replaced ({len} bytes) at {}, revision {revision}",
            self.picture_path.display()
        );
        Ok(())
    }
}

/// `path` relative to `asset_dir` as a `/`-joined URL path. `None` if it
/// lies outside the directory or climbs out of it with `..`.
pub fn asset_relative_path(asset_dir: &Path, path: &Path) -> Option<String> {
    let normalize = |p: &Path| -> PathBuf {
        p.components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect()
    };
    let relative = normalize(path)
        .strip_prefix(normalize(asset_dir))
        .ok()?
        .to_path_buf();

    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
            _ => return None,
        }
    }
    if parts.is_empty() {
        return None;
    }
    Some(parts.join("/"))
}
