use async_trait::async_trait;

use crate::domain::TempAudio;

#[async_trait]
pub trait MediaAcquirer: Send + Sync {
    /// Downloads the referenced video and extracts its audio track into a
    /// uniquely named local file.
    async fn acquire(&self, url: &str) -> Result<TempAudio, AcquisitionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AcquisitionError {
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("extraction tool unavailable: {0}")]
    ToolUnavailable(String),
    #[error("extracted audio missing: {0}")]
    OutputMissing(String),
}
