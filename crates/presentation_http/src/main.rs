//! Voice reply HTTP server
//!
//! Main entry point for the HTTP API server.

use std::{future::IntoFuture, sync::Arc, time::Duration};

use application::{CompletionPort, SynthesisPort, TranscriptionPort, VoiceReplyService};
use axum::http::HeaderName;
use infrastructure::{
    AppConfig, InferenceCompletionAdapter, SynthesisAdapter, TranscriptionAdapter, init_logging,
};
use presentation_http::{
    headers::{RESPONSE_HEADER, TRANSCRIPT_HEADER},
    routes,
    state::AppState,
};
use tokio::{net::TcpListener, signal, sync::watch};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;

    init_logging(config.server.log_format)?;

    info!("🎙️ Voice reply server v{} starting...", env!("CARGO_PKG_VERSION"));

    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    let completion = InferenceCompletionAdapter::new(config.inference.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize completion: {e}"))?;
    let model = completion.model().to_string();
    let transcription = TranscriptionAdapter::new(config.transcription.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize transcription: {e}"))?;
    let synthesis = SynthesisAdapter::new(config.synthesis.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize synthesis: {e}"))?;

    let transcription: Arc<dyn TranscriptionPort> = Arc::new(transcription);
    let completion: Arc<dyn CompletionPort> = Arc::new(completion);
    let synthesis: Arc<dyn SynthesisPort> = Arc::new(synthesis);

    let voice_reply = VoiceReplyService::new(
        transcription,
        completion,
        synthesis,
        config.assistant.system_prompt(),
    );

    let state = AppState::new(Arc::new(voice_reply))
        .with_max_body_bytes(config.server.max_body_bytes);

    // Browsers only see custom response headers that are exposed explicitly
    let exposed: [HeaderName; 2] = [TRANSCRIPT_HEADER, RESPONSE_HEADER];
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers(exposed);

    let app = routes::create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer);

    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr).await?;

    info!(
        completion_model = %model,
        transcription_model = %config.transcription.model,
        synthesis_model = %config.synthesis.model_id,
        voice = %config.synthesis.voice_id,
        "Providers configured"
    );
    info!("🚀 Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs);
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        let _ = shutdown_tx.send(true);
    });

    let deadline = async move {
        if shutdown_rx.wait_for(|signalled| *signalled).await.is_err() {
            std::future::pending::<()>().await;
        }
        info!("⏳ Waiting up to {:?} for in-flight replies to finish...", shutdown_timeout);
        tokio::time::sleep(shutdown_timeout).await;
    };

    tokio::select! {
        result = server.into_future() => result?,
        () = deadline => warn!("Shutdown timeout elapsed, dropping open connections"),
    }

    info!("👋 Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
