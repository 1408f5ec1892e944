//! `mentor serve`: load configuration, wire the gateway, and run the HTTP server.

use std::path::Path;

use anyhow::Context;

use mentor_infra::config::load_gateway_config;

use crate::http::router::build_router;
use crate::state::AppState;

pub async fn run(config_path: &Path, host: Option<String>, port: Option<u16>) -> anyhow::Result<()> {
    let mut config = load_gateway_config(config_path)
        .await
        .with_context(|| format!("failed to load configuration from {}", config_path.display()))?;

    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let state = AppState::init(&config).await?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(
        %addr,
        model = %config.llm.model,
        max_retries = config.retry.max_retries,
        static_dir = %config.server.static_dir,
        "MentorGPT gateway listening"
    );

    let router = build_router(state, Path::new(&config.server.static_dir));

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
///
/// A signal source that cannot be installed is logged and never fires.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
