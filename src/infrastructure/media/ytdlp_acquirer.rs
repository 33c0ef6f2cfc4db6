use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;
use uuid::Uuid;

use crate::application::ports::{AcquisitionError, MediaAcquirer};
use crate::domain::TempAudio;

const AUDIO_FORMAT: &str = "mp3";
const AUDIO_QUALITY: &str = "192K";

/// Pulls the audio track of a hosted video onto local disk by driving the
/// `yt-dlp` binary.
pub struct YtDlpAcquirer {
    binary: String,
    work_dir: PathBuf,
}

impl YtDlpAcquirer {
    pub fn new(binary: String, work_dir: PathBuf) -> Result<Self, AcquisitionError> {
        std::fs::create_dir_all(&work_dir)
            .map_err(|e| AcquisitionError::ToolUnavailable(format!("work dir: {}", e)))?;
        Ok(Self { binary, work_dir })
    }

    /// Unique basename per invocation; concurrent requests must never
    /// collide on or delete each other's file.
    fn fresh_basename() -> String {
        format!("audio_{}", Uuid::new_v4().simple())
    }
}

#[async_trait]
impl MediaAcquirer for YtDlpAcquirer {
    async fn acquire(&self, url: &str) -> Result<TempAudio, AcquisitionError> {
        let basename = Self::fresh_basename();
        let template = self.work_dir.join(format!("{}.%(ext)s", basename));
        let audio_path = self.work_dir.join(format!("{}.{}", basename, AUDIO_FORMAT));

        tracing::debug!(url = %url, output = %audio_path.display(), "Invoking yt-dlp");

        let output = Command::new(&self.binary)
            .arg("--format")
            .arg("bestaudio/best")
            .arg("--extract-audio")
            .arg("--audio-format")
            .arg(AUDIO_FORMAT)
            .arg("--audio-quality")
            .arg(AUDIO_QUALITY)
            .arg("--output")
            .arg(&template)
            .arg("--quiet")
            .arg("--no-warnings")
            .arg(url)
            .output()
            .await
            .map_err(|e| AcquisitionError::ToolUnavailable(format!("{}: {}", self.binary, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::warn!(url = %url, status = %output.status, stderr = %stderr, "yt-dlp failed");
            return Err(AcquisitionError::DownloadFailed(format!(
                "{}: {}",
                output.status,
                stderr.trim()
            )));
        }

        match tokio::fs::try_exists(&audio_path).await {
            Ok(true) => {
                tracing::info!(path = %audio_path.display(), "Audio extracted");
                Ok(TempAudio::new(audio_path))
            }
            _ => Err(AcquisitionError::OutputMissing(
                audio_path.display().to_string(),
            )),
        }
    }
}
