//! Axum router configuration with middleware.
//!
//! Routes: `POST /api/chat`, `GET /health`. Any other path falls through to
//! the static frontend directory when it exists.
//! Middleware: CORS (permissive), request tracing.

use std::path::Path;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .route("/api/chat", post(handlers::chat::chat))
        .route("/health", get(health_check))
        .with_state(state);

    if static_dir.is_dir() {
        router = router.fallback_service(ServeDir::new(static_dir));
        tracing::info!(path = %static_dir.display(), "Static file serving enabled");
    } else {
        tracing::warn!(path = %static_dir.display(), "Static directory not found, serving API only");
    }

    router.layer(cors).layer(TraceLayer::new_for_http())
}

async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
