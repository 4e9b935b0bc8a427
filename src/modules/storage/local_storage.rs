//! Local-filesystem storage for uploaded comment images
//!
//! Files land in one shared upload directory that is served back as static
//! content under a fixed URL prefix.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::{debug, warn};

use crate::core::config::UploadConfig;
use crate::shared::ids::next_id;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid filename: {0:?}")]
    InvalidFilename(String),
}

/// A file written to the upload directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// Name on disk, `<id>_<original name>`
    pub filename: String,
    /// Path under the public URL prefix
    pub web_path: String,
    /// Absolute or working-directory relative location on disk
    pub disk_path: PathBuf,
}

pub struct LocalStorage {
    dir: PathBuf,
    url_prefix: String,
}

impl LocalStorage {
    pub fn new(config: &UploadConfig) -> Self {
        Self {
            dir: config.dir.clone(),
            url_prefix: config.url_prefix.trim_end_matches('/').to_string(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Generate the on-disk name for an upload.
    ///
    /// Only the last path component of the client-supplied name is kept, and
    /// the time-based id prefix keeps concurrent uploads of the same name apart.
    pub fn generate_filename(original_filename: &str) -> Result<String, StorageError> {
        let base = original_filename
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or_default()
            .trim();

        if base.is_empty() || base == "." || base == ".." {
            return Err(StorageError::InvalidFilename(original_filename.to_string()));
        }

        Ok(format!("{}_{}", next_id(), base))
    }

    pub fn web_path(&self, filename: &str) -> String {
        format!("{}/{}", self.url_prefix, filename)
    }

    /// Write `data` to the upload directory, creating the directory on demand
    pub async fn save(&self, original_filename: &str, data: &[u8]) -> Result<StoredFile, StorageError> {
        let filename = Self::generate_filename(original_filename)?;

        fs::create_dir_all(&self.dir).await?;

        let disk_path = self.dir.join(&filename);
        fs::write(&disk_path, data).await?;

        debug!("Stored upload '{}' ({} bytes)", disk_path.display(), data.len());

        Ok(StoredFile {
            web_path: self.web_path(&filename),
            filename,
            disk_path,
        })
    }

    /// Best-effort removal of a file whose database row never committed
    pub async fn discard(&self, file: &StoredFile) {
        if let Err(e) = fs::remove_file(&file.disk_path).await {
            warn!(
                "Failed to remove orphaned upload '{}': {}",
                file.disk_path.display(),
                e
            );
        }
    }
}
