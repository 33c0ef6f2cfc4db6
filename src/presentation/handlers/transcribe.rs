use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::ports::{AudioHost, MediaAcquirer, Transcriber};
use crate::application::services::TranscriptionOutcome;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct TranscribeRequest {
    pub url: String,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "he".to_string()
}

/// Wire shape of a pipeline outcome. All three variants are returned with
/// HTTP 200; the `status` field is the discriminator.
#[derive(Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TranscribeResponse {
    Success {
        transcription: String,
        audio_url: String,
    },
    SuccessEmpty {
        message: String,
        debug_raw: Value,
    },
    Error {
        message: String,
    },
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn transcribe_handler<M, H, T>(
    State(state): State<AppState<M, H, T>>,
    Json(request): Json<TranscribeRequest>,
) -> impl IntoResponse
where
    M: MediaAcquirer + 'static,
    H: AudioHost + 'static,
    T: Transcriber + 'static,
{
    if request.url.trim().is_empty() {
        tracing::warn!("Transcribe request with empty url");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "url must not be empty".to_string(),
            }),
        )
            .into_response();
    }

    tracing::info!(url = %request.url, language = %request.language, "Processing transcription request");

    let outcome = state
        .transcription_service
        .process(&request.url, &request.language)
        .await;

    let response = match outcome {
        TranscriptionOutcome::Completed {
            transcription,
            audio_url,
        } => TranscribeResponse::Success {
            transcription,
            audio_url,
        },
        TranscriptionOutcome::Empty { raw } => TranscribeResponse::SuccessEmpty {
            message: "No text found".to_string(),
            debug_raw: raw,
        },
        TranscriptionOutcome::Failed { message } => TranscribeResponse::Error { message },
    };

    (StatusCode::OK, Json(response)).into_response()
}
