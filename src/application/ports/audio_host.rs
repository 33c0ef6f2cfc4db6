use std::io;
use std::path::Path;

use async_trait::async_trait;

#[async_trait]
pub trait AudioHost: Send + Sync {
    /// Uploads a local audio file and returns a publicly fetchable URL.
    async fn host(&self, path: &Path) -> Result<String, AudioHostError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioHostError {
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("upload rejected: status {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("malformed upload response: {0}")]
    MalformedResponse(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
