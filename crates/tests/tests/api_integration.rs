use std::fs;
use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use triage_analyzer::EmailAnalyzer;
use triage_api::{
    build_router, ApiConfig, ApiState, EMPTY_INPUT_MESSAGE, INTERNAL_ERROR_MESSAGE,
};
use triage_core::response::{REQUEST_ACK_RESPONSE, SERVICE_INQUIRY_RESPONSE, WELL_WISHES_RESPONSE};
use triage_core::{KeywordSets, SentimentScorer};
use triage_ml::TriageMlStack;
use triage_observability::AppMetrics;

fn app_with_config(config: &ApiConfig) -> Router {
    let analyzer = EmailAnalyzer::new(
        Arc::new(KeywordSets::default()),
        TriageMlStack::default(),
        AppMetrics::shared(),
    );
    build_router(ApiState::new(analyzer), config)
}

struct PanickingSentiment;

impl SentimentScorer for PanickingSentiment {
    fn model_name(&self) -> &'static str {
        "panicking"
    }

    fn polarity(&self, _text: &str) -> f32 {
        panic!("lexicon state corrupted at 0xdeadbeef");
    }
}

fn app() -> Router {
    app_with_config(&ApiConfig::default())
}

fn analyze_request(payload: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/analyze")
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn health_reports_healthy() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let parsed = json_body(response).await;
    assert_eq!(parsed["status"], "healthy");
    assert!(parsed["version"].is_string());
    assert_eq!(parsed["sentiment_model"], "lexicon-builtin");
    assert!(parsed.get("metrics").is_some());
}

#[tokio::test]
async fn analyze_returns_structured_payload() {
    let response = app()
        .oneshot(analyze_request(json!({
            "text": "Qual o prazo de entrega do pedido?"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let parsed = json_body(response).await;

    assert_eq!(parsed["category"], "Produtivo");
    assert!((parsed["confidence"].as_f64().unwrap() - 0.9).abs() < 1e-6);
    assert_eq!(parsed["suggested_response"], REQUEST_ACK_RESPONSE);
    assert_eq!(
        parsed["keywords"],
        json!(["qual", "prazo", "entrega", "pedido"])
    );
}

#[tokio::test]
async fn analyze_trims_before_classifying() {
    let response = app()
        .oneshot(analyze_request(json!({
            "text": "\n\n   Feliz natal e um ano novo de paz   \n"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let parsed = json_body(response).await;
    assert_eq!(parsed["category"], "Improdutivo");
    assert_eq!(parsed["suggested_response"], WELL_WISHES_RESPONSE);
}

#[tokio::test]
async fn unproductive_keyword_wins_over_productive() {
    let response = app()
        .oneshot(analyze_request(json!({ "text": "problema feliz" })))
        .await
        .unwrap();

    let parsed = json_body(response).await;
    assert_eq!(parsed["category"], "Improdutivo");
    assert!((parsed["confidence"].as_f64().unwrap() - 0.9).abs() < 1e-6);
}

#[tokio::test]
async fn catalog_request_gets_service_template() {
    let response = app()
        .oneshot(analyze_request(json!({
            "text": "Bom dia, poderiam enviar o catálogo com os preços?"
        })))
        .await
        .unwrap();

    let parsed = json_body(response).await;
    assert_eq!(parsed["category"], "Produtivo");
    assert_eq!(parsed["suggested_response"], SERVICE_INQUIRY_RESPONSE);
}

#[tokio::test]
async fn neutral_fallback_uses_lower_confidence() {
    let response = app()
        .oneshot(analyze_request(json!({ "text": "Segue em anexo o arquivo." })))
        .await
        .unwrap();

    let parsed = json_body(response).await;
    assert_eq!(parsed["category"], "Neutro");
    assert!((parsed["confidence"].as_f64().unwrap() - 0.6).abs() < 1e-6);
}

#[tokio::test]
async fn empty_and_blank_text_are_rejected() {
    let app = app();

    for text in ["", "   \n\t  "] {
        let response = app
            .clone()
            .oneshot(analyze_request(json!({ "text": text })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let parsed = json_body(response).await;
        assert_eq!(parsed["error"], "empty_input");
        assert_eq!(parsed["message"], EMPTY_INPUT_MESSAGE);
    }

    let health = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let parsed = json_body(health).await;
    assert_eq!(parsed["metrics"]["rejected_total"], 2);
    assert_eq!(parsed["metrics"]["requests_total"], 0);
}

#[tokio::test]
async fn missing_text_field_is_a_client_error() {
    let response = app()
        .oneshot(analyze_request(json!({ "body": "sem campo text" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let config = ApiConfig {
        body_limit_bytes: 256,
        ..ApiConfig::default()
    };
    let response = app_with_config(&config)
        .oneshot(analyze_request(json!({ "text": "pedido ".repeat(100) })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn concurrent_requests_are_independent() {
    let app = app();
    let texts = [
        ("Temos um problema urgente no sistema", "Produtivo"),
        ("Feliz natal e um ano novo de paz", "Improdutivo"),
        ("Segue em anexo o arquivo.", "Neutro"),
    ];

    let requests = (0..24).map(|idx| {
        let (text, expected) = texts[idx % texts.len()];
        let app = app.clone();
        async move {
            let response = app
                .oneshot(analyze_request(json!({ "text": text })))
                .await
                .unwrap();
            (json_body(response).await, expected)
        }
    });

    for (parsed, expected) in futures::future::join_all(requests).await {
        assert_eq!(parsed["category"], expected);
    }
}

#[tokio::test]
async fn root_serves_index_from_public_dir() {
    let public_dir = tempfile::tempdir().unwrap();
    fs::write(
        public_dir.path().join("index.html"),
        "<html><body>triagem de emails</body></html>",
    )
    .unwrap();

    let config = ApiConfig {
        public_dir: public_dir.path().to_path_buf(),
        ..ApiConfig::default()
    };
    let response = app_with_config(&config)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(String::from_utf8_lossy(&body).contains("triagem de emails"));
}

#[tokio::test]
async fn cors_allows_any_origin_by_default() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/analyze")
                .header("origin", "https://mail.example.com")
                .header("access-control-request-method", "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn public_assets_are_served_with_security_headers() {
    let public_dir = tempfile::tempdir().unwrap();
    fs::write(public_dir.path().join("app.js"), "console.log('triagem');").unwrap();

    let config = ApiConfig {
        public_dir: public_dir.path().to_path_buf(),
        ..ApiConfig::default()
    };
    let app = app_with_config(&config);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/public/app.js")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-content-type-options"], "nosniff");

    let missing = app
        .oneshot(
            Request::builder()
                .uri("/public/missing.css")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn scorer_panic_returns_generic_internal_error() {
    let analyzer = EmailAnalyzer::new(
        Arc::new(KeywordSets::default()),
        TriageMlStack::new(Arc::new(PanickingSentiment)),
        AppMetrics::shared(),
    );
    let app = build_router(ApiState::new(analyzer), &ApiConfig::default());

    // no keyword matches, so the scorer runs
    let response = app
        .clone()
        .oneshot(analyze_request(json!({ "text": "Segue em anexo o arquivo." })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8_lossy(&body);
    assert!(!text.contains("corrupted"));
    assert!(!text.contains("deadbeef"));

    let parsed: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(parsed["error"], "internal_error");
    assert_eq!(parsed["message"], INTERNAL_ERROR_MESSAGE);

    let health = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let parsed = json_body(health).await;
    assert_eq!(parsed["metrics"]["failures_total"], 1);
}
