use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use tavor::application::ports::{Transcriber, TranscriberError};
use tavor::infrastructure::inference::RunpodTranscriber;

async fn start_mock_runpod_server(
    response_status: u16,
    response_body: &'static str,
) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        "/v2/my-endpoint/runsync",
        post(move || async move {
            let status = axum::http::StatusCode::from_u16(response_status).unwrap();
            (status, response_body).into_response()
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx)
}

async fn start_echo_server() -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        "/v2/my-endpoint/runsync",
        post(|headers: HeaderMap, Json(body): Json<Value>| async move {
            let auth = headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            Json(json!({"authorization": auth, "received": body}))
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx)
}

#[tokio::test]
async fn given_success_status_when_transcribing_then_returns_raw_payload() {
    let body = r#"{"output": {"text": "hello world"}}"#;
    let (base_url, shutdown_tx) = start_mock_runpod_server(200, body).await;

    let client = RunpodTranscriber::new(&base_url, "my-endpoint", "test-key", "whisper-test");
    let raw = client
        .transcribe("https://cdn.example/audio.mp3", "he")
        .await
        .unwrap();

    assert_eq!(raw["output"]["text"], "hello world");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_error_status_when_transcribing_then_error_preserves_body() {
    let body = r#"{"error": "worker crashed"}"#;
    let (base_url, shutdown_tx) = start_mock_runpod_server(500, body).await;

    let client = RunpodTranscriber::new(&base_url, "my-endpoint", "test-key", "whisper-test");
    let result = client.transcribe("https://cdn.example/audio.mp3", "he").await;

    match result {
        Err(TranscriberError::ApiStatus { status, body }) => {
            assert_eq!(status, 500);
            assert!(body.contains("worker crashed"));
        }
        other => panic!("expected ApiStatus error, got {:?}", other),
    }
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_transcription_request_when_sent_then_payload_carries_model_and_args() {
    let (base_url, shutdown_tx) = start_echo_server().await;

    let client = RunpodTranscriber::new(&base_url, "my-endpoint", "secret-key", "whisper-test");
    let raw = client
        .transcribe("https://cdn.example/a.mp3", "en")
        .await
        .unwrap();

    assert_eq!(raw["authorization"], "Bearer secret-key");
    assert_eq!(raw["received"]["input"]["model"], "whisper-test");
    let args = &raw["received"]["input"]["transcribe_args"];
    assert_eq!(args["url"], "https://cdn.example/a.mp3");
    assert_eq!(args["language"], "en");
    assert_eq!(args["return_timestamps"], true);
    assert_eq!(args["diarize"], false);
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unreachable_endpoint_when_transcribing_then_request_failed() {
    let client = RunpodTranscriber::new("http://127.0.0.1:9", "my-endpoint", "key", "model");
    let result = client.transcribe("https://cdn.example/audio.mp3", "he").await;

    assert!(matches!(result, Err(TranscriberError::RequestFailed(_))));
}
