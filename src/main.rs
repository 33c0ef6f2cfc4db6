use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use tavor::application::services::TranscriptionService;
use tavor::infrastructure::inference::RunpodTranscriber;
use tavor::infrastructure::media::YtDlpAcquirer;
use tavor::infrastructure::observability::{init_tracing, TracingConfig};
use tavor::infrastructure::storage::CloudinaryHost;
use tavor::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;

    init_tracing(TracingConfig::default(), settings.server.port);

    let acquirer = Arc::new(YtDlpAcquirer::new(
        settings.media.ytdlp_bin.clone(),
        settings.media.work_dir.clone(),
    )?);
    let audio_host = Arc::new(CloudinaryHost::new(
        &settings.storage.api_base,
        &settings.storage.cloud_name,
        &settings.storage.api_key,
        &settings.storage.api_secret,
    ));
    let transcriber = Arc::new(RunpodTranscriber::new(
        &settings.inference.api_base,
        &settings.inference.endpoint_id,
        &settings.inference.api_key,
        &settings.inference.model,
    ));

    let transcription_service = Arc::new(TranscriptionService::new(
        acquirer,
        audio_host,
        transcriber,
    ));

    let state = AppState {
        transcription_service,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
