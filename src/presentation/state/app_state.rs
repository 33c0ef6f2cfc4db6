use std::sync::Arc;

use crate::application::ports::{AudioHost, MediaAcquirer, Transcriber};
use crate::application::services::TranscriptionService;

pub struct AppState<M, H, T>
where
    M: MediaAcquirer,
    H: AudioHost,
    T: Transcriber,
{
    pub transcription_service: Arc<TranscriptionService<M, H, T>>,
}

impl<M, H, T> Clone for AppState<M, H, T>
where
    M: MediaAcquirer,
    H: AudioHost,
    T: Transcriber,
{
    fn clone(&self) -> Self {
        Self {
            transcription_service: Arc::clone(&self.transcription_service),
        }
    }
}
