mod config;
mod error;

use std::any::Any;
use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::{header, HeaderValue, Method, Request, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{body::Body, Router};
use serde::{Deserialize, Serialize};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any as AnyOrigin, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use triage_analyzer::EmailAnalyzer;
use triage_core::EmailAnalysis;
use triage_observability::{AppMetrics, MetricsSnapshot};

pub use config::{parse_allowed_origins, parse_body_limit, ApiConfig};
pub use error::{ApiError, EMPTY_INPUT_MESSAGE, INTERNAL_ERROR_MESSAGE};

#[derive(Clone)]
pub struct ApiState {
    pub analyzer: Arc<EmailAnalyzer>,
    pub metrics: Arc<AppMetrics>,
}

impl ApiState {
    pub fn new(analyzer: EmailAnalyzer) -> Self {
        let metrics = analyzer.metrics().clone();
        Self {
            analyzer: Arc::new(analyzer),
            metrics,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    timestamp_utc: String,
    sentiment_model: &'static str,
    keyword_entries: usize,
    metrics: MetricsSnapshot,
}

/// Router with keyword sets and lexicon resolved from the environment.
pub fn build_app(config: &ApiConfig) -> Router {
    let analyzer = EmailAnalyzer::load_default(AppMetrics::shared());
    build_router(ApiState::new(analyzer), config)
}

pub fn build_router(state: ApiState, config: &ApiConfig) -> Router {
    let index = config.public_dir.join("index.html");

    Router::new()
        .route("/api/analyze", post(analyze))
        .route("/api/health", get(health))
        .route_service("/", ServeFile::new(index))
        .nest_service("/public", ServeDir::new(&config.public_dir))
        .layer(build_cors_layer(&config.allowed_origins))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(RequestBodyLimitLayer::new(config.body_limit_bytes))
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

async fn analyze(
    State(state): State<ApiState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<EmailAnalysis>, ApiError> {
    let text = request.text.trim().to_string();
    if text.is_empty() {
        state.metrics.inc_rejected();
        return Err(ApiError::EmptyInput);
    }

    let analyzer = state.analyzer.clone();
    let analysis = tokio::task::spawn_blocking(move || analyzer.analyze(&text))
        .await
        .map_err(|error| {
            state.metrics.inc_failure();
            anyhow::Error::new(error).context("analysis task did not complete")
        })?;

    Ok(Json(analysis))
}

async fn health(State(state): State<ApiState>) -> impl IntoResponse {
    let payload = HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        timestamp_utc: chrono::Utc::now().to_rfc3339(),
        sentiment_model: state.analyzer.sentiment_model(),
        keyword_entries: state.analyzer.keyword_sets().len(),
        metrics: state.metrics.snapshot(),
    };
    (StatusCode::OK, Json(payload))
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = detail, "request handler panicked");

    error::internal_error_response()
}

fn build_cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins = allowed_origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect::<Vec<_>>();

    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    if origins.is_empty() {
        layer.allow_origin(AnyOrigin)
    } else {
        layer.allow_origin(AllowOrigin::list(origins))
    }
}

async fn security_headers_middleware(request: Request<Body>, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(
        header::HeaderName::from_static("x-frame-options"),
        HeaderValue::from_static("DENY"),
    );
    headers.insert(
        header::HeaderName::from_static("referrer-policy"),
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    headers.insert(
        header::HeaderName::from_static("content-security-policy"),
        HeaderValue::from_static("default-src 'self'; frame-ancestors 'none'; base-uri 'none'"),
    );

    response
}
