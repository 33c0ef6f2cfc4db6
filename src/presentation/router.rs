use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{AudioHost, MediaAcquirer, Transcriber};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{health_handler, transcribe_handler};
use crate::presentation::state::AppState;

pub fn create_router<M, H, T>(state: AppState<M, H, T>) -> Router
where
    M: MediaAcquirer + 'static,
    H: AudioHost + 'static,
    T: Transcriber + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/", get(health_handler))
        .route("/health", get(health_handler))
        .route("/transcribe", post(transcribe_handler::<M, H, T>))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
