//! HTTP API server implementation

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::core::client::{HttpTranslator, Translate};
use crate::core::errors::TranslationError;
use crate::core::models::TranslationRequest;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub translator: Arc<dyn Translate>,
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    service: String,
    version: String,
}

/// Translation query parameters
#[derive(Debug, Deserialize)]
pub struct TranslateParams {
    pub text: Option<String>,
    pub src: Option<String>,
    pub dest: Option<String>,
}

/// Translation response
#[derive(Serialize)]
pub struct TranslateResponse {
    pub translated_text: String,
}

/// Error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
}

/// Map a translation error to an HTTP status and a structured error body
fn error_response(err: &TranslationError) -> (StatusCode, Json<ErrorResponse>) {
    let (status, code, kind) = match err {
        TranslationError::MissingParam { .. } => (
            StatusCode::BAD_REQUEST,
            "invalid_request",
            "invalid_request_error",
        ),
        TranslationError::RateLimitError { .. } => {
            (StatusCode::TOO_MANY_REQUESTS, "rate_limited", "api_error")
        }
        TranslationError::TimeoutError => {
            (StatusCode::GATEWAY_TIMEOUT, "upstream_timeout", "api_error")
        }
        TranslationError::ApiError { .. }
        | TranslationError::NetworkError { .. }
        | TranslationError::InvalidResponseError { .. } => {
            (StatusCode::BAD_GATEWAY, "upstream_error", "api_error")
        }
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            "api_error",
        ),
    };

    (
        status,
        Json(ErrorResponse {
            error: ErrorDetail {
                message: err.to_string(),
                code: Some(code.to_string()),
                r#type: Some(kind.to_string()),
            },
        }),
    )
}

fn missing_param(name: &str) -> (StatusCode, Json<ErrorResponse>) {
    error_response(&TranslationError::MissingParam {
        name: name.to_string(),
    })
}

/// Health check handler
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Translation handler
async fn translate(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TranslateParams>,
) -> Result<Json<TranslateResponse>, (StatusCode, Json<ErrorResponse>)> {
    let text = match params.text {
        Some(text) if !text.is_empty() => text,
        _ => return Err(missing_param("text")),
    };

    let dest = match params.dest {
        Some(dest) if !dest.is_empty() => dest,
        _ => return Err(missing_param("dest")),
    };

    let mut request = TranslationRequest::new(text, dest);
    // An absent or "auto" source selects provider-side detection
    if let Some(src) = params.src.filter(|s| !s.is_empty() && s != "auto") {
        request = request.with_source_lang(src);
    }

    match state.translator.translate(&request).await {
        Ok(result) => {
            if let Some(lang) = &result.detected_source_lang {
                debug!("Detected source language: {}", lang);
            }

            Ok(Json(TranslateResponse {
                translated_text: result.translated_text,
            }))
        }
        Err(e) => {
            warn!("Translation failed: {}", e);
            Err(error_response(&e))
        }
    }
}

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health_check))
        .route("/translate", get(translate))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the HTTP server
pub async fn run_server(host: String, port: u16) -> anyhow::Result<()> {
    // Create translator
    let translator = Arc::new(HttpTranslator::from_env()?);

    // Create app state
    let state = Arc::new(AppState { translator });

    // Create router
    let app = create_router(state);

    // Bind address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Starting server on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
