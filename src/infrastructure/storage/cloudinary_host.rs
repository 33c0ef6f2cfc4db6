use std::fmt::Write as _;
use std::path::Path;

use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;
use sha1::{Digest, Sha1};

use crate::application::ports::{AudioHost, AudioHostError};

/// Uploads local audio files to Cloudinary and returns the public delivery
/// URL. Audio goes up under the `video` resource type, which is how
/// Cloudinary files audio media.
pub struct CloudinaryHost {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    api_secret: String,
}

impl CloudinaryHost {
    pub fn new(api_base: &str, cloud_name: &str, api_key: &str, api_secret: &str) -> Self {
        let endpoint = format!(
            "{}/v1_1/{}/video/upload",
            api_base.trim_end_matches('/'),
            cloud_name,
        );
        Self {
            client: reqwest::Client::new(),
            endpoint,
            api_key: api_key.to_string(),
            api_secret: api_secret.to_string(),
        }
    }

    /// SHA-1 hex over the signed params concatenated with the API secret,
    /// per Cloudinary's authentication scheme.
    fn signature(&self, timestamp: i64) -> String {
        let mut hasher = Sha1::new();
        hasher.update(format!("timestamp={}{}", timestamp, self.api_secret));
        hasher
            .finalize()
            .iter()
            .fold(String::new(), |mut hex, byte| {
                let _ = write!(hex, "{:02x}", byte);
                hex
            })
    }
}

#[derive(Deserialize)]
struct CloudinaryUploadResponse {
    secure_url: String,
}

#[async_trait]
impl AudioHost for CloudinaryHost {
    async fn host(&self, path: &Path) -> Result<String, AudioHostError> {
        let data = tokio::fs::read(path).await?;
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "audio".to_string());

        let timestamp = chrono::Utc::now().timestamp();
        let signature = self.signature(timestamp);

        let file_part = multipart::Part::bytes(data).file_name(filename);
        let form = multipart::Form::new()
            .part("file", file_part)
            .text("api_key", self.api_key.clone())
            .text("timestamp", timestamp.to_string())
            .text("signature", signature);

        tracing::debug!(endpoint = %self.endpoint, path = %path.display(), "Uploading audio to Cloudinary");

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AudioHostError::UploadFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(AudioHostError::Rejected { status, body });
        }

        let result: CloudinaryUploadResponse = response
            .json()
            .await
            .map_err(|e| AudioHostError::MalformedResponse(e.to_string()))?;

        tracing::info!(url = %result.secure_url, "Audio upload completed");

        Ok(result.secure_url)
    }
}
