//! HTTP API server implementation

use axum::{
    body::Bytes,
    extract::{Json, State},
    response::Html,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::core::client::TranslationClient;
use crate::core::config::ServerConfig;
use crate::core::models::{LanguageEntry, TranslationRequest, TranslationResponse};
use crate::server::errors::ApiError;

/// Landing page served on `/`
const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Application state
#[derive(Clone)]
pub struct AppState {
    client: TranslationClient,
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    service: String,
    version: String,
}

/// Health check handler
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Landing page handler
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Read the body as JSON without trusting its content type or field types
fn parse_body(body: &[u8]) -> Result<TranslationRequest, ApiError> {
    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|e| ApiError::Internal(format!("Invalid JSON body: {}", e)))?;
    TranslationRequest::from_json(&value).map_err(ApiError::Internal)
}

/// Translation handler
async fn translate(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<TranslationResponse>, ApiError> {
    let raw = parse_body(&body).map_err(|e| {
        error!(body = %String::from_utf8_lossy(&body), "Rejected translation body: {}", e);
        e
    })?;

    let Some(request) = raw.validate() else {
        error!(
            text = ?raw.text,
            source_lang = ?raw.source_lang,
            target_lang = ?raw.target_lang,
            "Missing 'text' or 'target_lang' parameter."
        );
        return Err(ApiError::MissingParameters);
    };

    info!("Translating text: {}", request);

    match state
        .client
        .translate(&request.text, &request.source_lang, &request.target_lang)
        .await
    {
        Ok(translated_text) => Ok(Json(TranslationResponse { translated_text })),
        Err(e) => {
            error!(
                text = %request.text,
                source_lang = %request.source_lang,
                target_lang = %request.target_lang,
                "Translation failed: {}",
                e
            );
            Err(ApiError::from(e))
        }
    }
}

/// Supported languages handler
async fn languages(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<LanguageEntry>>, ApiError> {
    state.client.list_languages().await.map(Json).map_err(|e| {
        error!("Fetching languages failed: {}", e);
        ApiError::from(e)
    })
}

/// Build the application router.
///
/// Front-end assets are served from `static_dir` under `/static`.
pub fn build_router(client: TranslationClient, static_dir: &Path) -> Router {
    let state = Arc::new(AppState { client });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/api/translate", post(translate))
        .route("/api/languages", get(languages))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the HTTP server until Ctrl-C
pub async fn run_server(config: ServerConfig, client: TranslationClient) -> anyhow::Result<()> {
    let app = build_router(client, &config.static_dir);

    let addr = config.bind_addr()?;
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
