use std::sync::Arc;

use serde_json::Value;

use crate::application::ports::{
    AcquisitionError, AudioHost, AudioHostError, MediaAcquirer, Transcriber, TranscriberError,
};
use crate::domain::{extract_text, MediaSource, TempAudio};

/// Orchestrates one transcription request end to end:
/// acquire (video URLs only) → host → transcribe → extract.
pub struct TranscriptionService<M, H, T>
where
    M: MediaAcquirer,
    H: AudioHost,
    T: Transcriber,
{
    acquirer: Arc<M>,
    audio_host: Arc<H>,
    transcriber: Arc<T>,
}

impl<M, H, T> TranscriptionService<M, H, T>
where
    M: MediaAcquirer,
    H: AudioHost,
    T: Transcriber,
{
    pub fn new(acquirer: Arc<M>, audio_host: Arc<H>, transcriber: Arc<T>) -> Self {
        Self {
            acquirer,
            audio_host,
            transcriber,
        }
    }

    /// Runs the full pipeline for one request and shapes the outcome.
    ///
    /// Invariant: the temporary audio file, once acquired, is removed at the
    /// single cleanup site below after the inner pipeline has returned, so
    /// every exit path (success, empty result, failure) is covered.
    pub async fn process(&self, url: &str, language: &str) -> TranscriptionOutcome {
        let mut local_audio = None;

        let outcome = match self.run_pipeline(url, language, &mut local_audio).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(error = %e, url = %url, "Transcription pipeline failed");
                TranscriptionOutcome::Failed {
                    message: e.to_string(),
                }
            }
        };

        if let Some(audio) = local_audio.take() {
            audio.remove().await;
        }

        outcome
    }

    async fn run_pipeline(
        &self,
        url: &str,
        language: &str,
        local_audio: &mut Option<TempAudio>,
    ) -> Result<TranscriptionOutcome, PipelineError> {
        let working_url = match MediaSource::classify(url) {
            MediaSource::VideoSite => {
                tracing::debug!(url = %url, "Acquiring audio from video-sharing site");
                let audio = self.acquirer.acquire(url).await?;
                let path = audio.path().to_path_buf();
                *local_audio = Some(audio);

                let public_url = self.audio_host.host(&path).await?;
                tracing::info!(public_url = %public_url, "Audio hosted");
                public_url
            }
            MediaSource::Direct => url.to_string(),
        };

        let raw = self.transcriber.transcribe(&working_url, language).await?;
        tracing::debug!(raw = %raw, "Raw inference response");

        let text = raw.get("output").map(extract_text).unwrap_or_default();
        let text = text.trim();

        if text.is_empty() {
            tracing::info!(url = %working_url, "Transcription produced no text");
            Ok(TranscriptionOutcome::Empty { raw })
        } else {
            tracing::info!(chars = text.len(), url = %working_url, "Transcription completed");
            Ok(TranscriptionOutcome::Completed {
                transcription: text.to_string(),
                audio_url: working_url,
            })
        }
    }
}

/// Terminal result of one pipeline run.
#[derive(Debug, Clone)]
pub enum TranscriptionOutcome {
    Completed {
        transcription: String,
        audio_url: String,
    },
    /// The pipeline completed but no text could be extracted anywhere in
    /// the payload; the raw response is kept for diagnostics. Distinct from
    /// `Failed` so callers can tell "nothing transcribed" from "failed".
    Empty { raw: Value },
    Failed { message: String },
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("audio download failed: {0}")]
    Acquisition(#[from] AcquisitionError),
    #[error("audio hosting failed: {0}")]
    Hosting(#[from] AudioHostError),
    #[error("transcription failed: {0}")]
    Transcription(#[from] TranscriberError),
}
