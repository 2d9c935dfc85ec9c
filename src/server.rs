//! HTTP API - brief, classification and auth-config routes.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::brief::{build_brief, BriefDefaults, BriefRequest, ContentBrief};
use crate::classify::{classify_page, PageClassification};
use crate::config::Config;
use crate::error::{Result, SeoError};
use crate::page_facts::PageSignals;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub brief_defaults: Arc<BriefDefaults>,
    pub google_client_id: Arc<str>,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            brief_defaults: Arc::new(config.brief_defaults()),
            google_client_id: Arc::from(config.google_client_id()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GoogleAuthConfig {
    pub ok: bool,
    pub enabled: bool,
    pub client_id: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Build the Axum application router
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/brief", get(brief_handler))
        .route("/api/classify", get(classify_handler))
        .route("/api/auth-google-config", get(google_config_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until the process is interrupted
pub async fn serve(config: &Config) -> Result<()> {
    let addr: SocketAddr = config.bind_addr()?;
    let state = AppState::from_config(config);

    tracing::info!(
        google_auth = !state.google_client_id.is_empty(),
        "Starting seobrief API on http://{}",
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| SeoError::ServerError(format!("Failed to bind {}: {}", addr, e)))?;

    axum::serve(listener, build_app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| SeoError::ServerError(e.to_string()))?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}

/// Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Content brief endpoint. Every parameter is optional; blanks fall back to defaults.
pub async fn brief_handler(
    State(state): State<AppState>,
    Query(request): Query<BriefRequest>,
) -> Json<ContentBrief> {
    let brief = build_brief(&request, &state.brief_defaults);
    tracing::info!(
        input_type = %brief.input_type,
        page_type = %brief.page_type,
        topic = %brief.topic,
        "brief generated"
    );
    Json(brief)
}

/// Page type classification from url/title/h1/metaDescription query parameters
pub async fn classify_handler(Query(signals): Query<PageSignals>) -> Json<PageClassification> {
    Json(classify_page(&signals))
}

/// Whether Google sign-in is configured, and with which client id
pub async fn google_config_handler(State(state): State<AppState>) -> Json<GoogleAuthConfig> {
    let client_id = state.google_client_id.to_string();
    Json(GoogleAuthConfig {
        ok: true,
        enabled: !client_id.is_empty(),
        client_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_google_config_disabled_without_client_id() {
        let state = AppState::from_config(&Config::default());
        let Json(body) = google_config_handler(State(state)).await;
        assert!(body.ok);
        assert!(!body.enabled);
        assert_eq!(body.client_id, "");
    }

    #[tokio::test]
    async fn test_brief_handler_uses_state_defaults() {
        let config = Config {
            default_audience: "agency owners".into(),
            ..Default::default()
        };
        let state = AppState::from_config(&config);
        let Json(brief) = brief_handler(State(state), Query(BriefRequest::default())).await;
        assert_eq!(brief.target_audience, "agency owners");
    }
}
