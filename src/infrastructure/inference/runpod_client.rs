use async_trait::async_trait;
use serde_json::{json, Value};

use crate::application::ports::{Transcriber, TranscriberError};

/// Client for a RunPod serverless Whisper endpoint, invoked synchronously
/// via `runsync`. One request, no retry; a non-200 status carries the raw
/// response body for diagnostics.
pub struct RunpodTranscriber {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl RunpodTranscriber {
    pub fn new(api_base: &str, endpoint_id: &str, api_key: &str, model: &str) -> Self {
        let endpoint = format!(
            "{}/v2/{}/runsync",
            api_base.trim_end_matches('/'),
            endpoint_id,
        );
        Self {
            client: reqwest::Client::new(),
            endpoint,
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl Transcriber for RunpodTranscriber {
    async fn transcribe(
        &self,
        audio_url: &str,
        language: &str,
    ) -> Result<Value, TranscriberError> {
        let payload = json!({
            "input": {
                "model": self.model,
                "transcribe_args": {
                    "url": audio_url,
                    "language": language,
                    "return_timestamps": true,
                    "diarize": false,
                }
            }
        });

        tracing::debug!(endpoint = %self.endpoint, language = %language, "Sending audio URL to RunPod");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| TranscriberError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriberError::ApiStatus { status, body });
        }

        let raw: Value = response
            .json()
            .await
            .map_err(|e| TranscriberError::MalformedResponse(e.to_string()))?;

        tracing::info!("RunPod transcription completed");

        Ok(raw)
    }
}
