use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Submits a publicly fetchable audio URL for synchronous transcription
    /// and returns the provider's raw response payload.
    ///
    /// The payload shape is provider-controlled and unstable; callers must
    /// not assume a schema beyond "arbitrary JSON".
    async fn transcribe(&self, audio_url: &str, language: &str)
        -> Result<Value, TranscriberError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriberError {
    #[error("inference request failed: {0}")]
    RequestFailed(String),
    #[error("inference api returned status {status}: {body}")]
    ApiStatus { status: u16, body: String },
    #[error("malformed inference response: {0}")]
    MalformedResponse(String),
}
