//! Media storage port - uploaded images live as files referenced by path.

use async_trait::async_trait;

/// Stores uploaded media and hands back the relative path it was stored under.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Persist the bytes under a fresh name with the given extension.
    async fn store(&self, extension: &str, bytes: &[u8]) -> Result<String, MediaError>;
}

/// Media storage errors.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("Media write failed: {0}")]
    Write(String),
}
