//! Filesystem media store - uploaded images land under a media root and are
//! referenced by relative path from post rows.

use std::path::PathBuf;

use async_trait::async_trait;
use uuid::Uuid;

use quill_core::ports::{MediaError, MediaStore};

/// Writes media files under a configurable root directory.
pub struct FsMediaStore {
    root: PathBuf,
}

impl FsMediaStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl MediaStore for FsMediaStore {
    async fn store(&self, extension: &str, bytes: &[u8]) -> Result<String, MediaError> {
        let relative = format!("posts/{}.{}", Uuid::new_v4(), extension);
        let full_path = self.root.join(&relative);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| MediaError::Write(e.to_string()))?;
        }

        tokio::fs::write(&full_path, bytes)
            .await
            .map_err(|e| MediaError::Write(e.to_string()))?;

        tracing::debug!(path = %relative, size = bytes.len(), "Stored uploaded image");
        Ok(relative)
    }
}
