use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use verba::application::services::{CoachService, InteractionController};
use verba::infrastructure::audio::TranscriptionEngineFactory;
use verba::infrastructure::google::{GoogleAuth, build_http_client};
use verba::infrastructure::llm::LlmClientFactory;
use verba::infrastructure::observability::{TracingConfig, init_tracing};
use verba::infrastructure::persistence::InteractionLogFactory;
use verba::infrastructure::storage::LocalFeedbackStore;
use verba::infrastructure::tts::SpeechSynthesizerFactory;
use verba::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load configuration")?;

    init_tracing(
        TracingConfig::new(
            environment.as_str(),
            settings.logging.enable_json,
            settings.logging.level.clone(),
        ),
        settings.server.port,
    );

    if settings.scaffold.enabled {
        tracing::warn!(
            delay_ms = settings.scaffold.mock_response_delay_ms,
            "Scaffold mode enabled, external services are mocked"
        );
    }

    let http_client = build_http_client(Duration::from_secs(settings.http.timeout_secs))
        .context("Failed to build HTTP client")?;
    let auth = GoogleAuth::from_parts(
        settings.google.api_key.clone(),
        settings.google.access_token.clone(),
    );

    let transcription_engine = TranscriptionEngineFactory::create(
        &settings.speech,
        &settings.scaffold,
        http_client.clone(),
        auth.clone(),
    );
    let llm_client = LlmClientFactory::create(
        &settings.llm,
        &settings.scaffold,
        http_client.clone(),
        auth.clone(),
    );
    let speech_synthesizer = SpeechSynthesizerFactory::create(
        &settings.tts,
        &settings.scaffold,
        http_client.clone(),
        auth.clone(),
    );
    let interaction_log = InteractionLogFactory::create(
        &settings.interaction_log,
        &settings.scaffold,
        http_client,
        auth,
        settings.google.project_id.as_deref(),
    )
    .await
    .context("Failed to initialize interaction log")?;

    let coach_service = Arc::new(CoachService::new(
        transcription_engine,
        llm_client,
        speech_synthesizer,
        interaction_log,
    ));

    let feedback_store = Arc::new(
        LocalFeedbackStore::new(PathBuf::from(&settings.storage.local_path))
            .context("Failed to initialize feedback store")?,
    );

    let interaction_controller = Arc::new(InteractionController::new(
        Arc::clone(&coach_service),
        feedback_store.clone(),
        settings.coach.user_id.clone(),
    ));

    let state = AppState {
        interaction_controller,
        feedback_store,
        max_upload_bytes: settings.server.max_upload_mb * 1024 * 1024,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
