//! Integration tests for the HTTP API.
//!
//! The router is driven in-process with stub providers, so no network is used.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use assert_json_diff::assert_json_eq;
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use translate_relay::core::errors::Result;
use translate_relay::{build_router, TranslationClient, TranslationError, TranslationProvider};

/// Provider answering from fixed tables and recording the calls it receives
#[derive(Default)]
struct StubProvider {
    translations: HashMap<String, String>,
    languages: HashMap<String, String>,
    fail_with: Option<String>,
    calls: Mutex<Vec<(String, String, String)>>,
}

impl StubProvider {
    fn translating(text: &str, translated: &str) -> Self {
        Self {
            translations: HashMap::from([(text.to_string(), translated.to_string())]),
            ..Default::default()
        }
    }

    fn with_languages(pairs: &[(&str, &str)]) -> Self {
        Self {
            languages: pairs
                .iter()
                .map(|(name, code)| (name.to_string(), code.to_string()))
                .collect(),
            ..Default::default()
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Default::default()
        }
    }
}

#[async_trait]
impl TranslationProvider for StubProvider {
    async fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> Result<String> {
        self.calls.lock().unwrap().push((
            text.to_string(),
            source_lang.to_string(),
            target_lang.to_string(),
        ));

        if let Some(message) = &self.fail_with {
            return Err(TranslationError::ApiError {
                status: 503,
                message: message.clone(),
            });
        }

        self.translations
            .get(text)
            .cloned()
            .ok_or_else(|| TranslationError::InvalidResponseError {
                message: "No translation in response".to_string(),
            })
    }

    async fn supported_languages(&self) -> Result<HashMap<String, String>> {
        if let Some(message) = &self.fail_with {
            return Err(TranslationError::NetworkError {
                message: message.clone(),
            });
        }
        Ok(self.languages.clone())
    }
}

fn app(provider: Arc<StubProvider>) -> Router {
    build_router(TranslationClient::new(provider), Path::new("static"))
}

async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    post_body(app, uri, body, Some("application/json")).await
}

async fn post_body(
    app: Router,
    uri: &str,
    body: &str,
    content_type: Option<&str>,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method(Method::POST).uri(uri);
    if let Some(content_type) = content_type {
        request = request.header(header::CONTENT_TYPE, content_type);
    }

    let response = app
        .oneshot(request.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn translate_returns_translated_text() {
    let provider = Arc::new(StubProvider::translating("Hello", "Hola"));

    let (status, body) = post_json(
        app(provider.clone()),
        "/api/translate",
        r#"{"text": "Hello", "target_lang": "es"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_json_eq!(body, json!({ "translatedText": "Hola" }));

    let calls = provider.calls.lock().unwrap();
    assert_eq!(
        *calls,
        vec![("Hello".to_string(), "auto".to_string(), "es".to_string())]
    );
}

#[tokio::test]
async fn translate_passes_explicit_source_language() {
    let provider = Arc::new(StubProvider::translating("Bonjour", "Hello"));

    let (status, _) = post_json(
        app(provider.clone()),
        "/api/translate",
        r#"{"text": "Bonjour", "source_lang": "fr", "target_lang": "en"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(provider.calls.lock().unwrap()[0].1, "fr");
}

#[tokio::test]
async fn translate_is_repeatable_for_deterministic_provider() {
    let provider = Arc::new(StubProvider::translating("Hello", "Hola"));
    let body = r#"{"text": "Hello", "target_lang": "es"}"#;

    let (_, first) = post_json(app(provider.clone()), "/api/translate", body).await;
    let (_, second) = post_json(app(provider.clone()), "/api/translate", body).await;

    assert_json_eq!(first, second);
}

#[tokio::test]
async fn translate_without_required_fields_is_rejected() {
    let cases = [
        r#"{"target_lang": "es"}"#,
        r#"{"text": "Hello"}"#,
        r#"{"text": "", "target_lang": "es"}"#,
        r#"{"text": "Hello", "target_lang": ""}"#,
        r#"{"text": null, "target_lang": "es"}"#,
        r#"{"text": "Hello", "target_lang": false}"#,
        r#"{"text": "Hello", "target_lang": null}"#,
        r#"{"target_lang": 5}"#,
        r#"{"text": 0, "target_lang": "es"}"#,
        r#"{}"#,
    ];

    for case in cases {
        let provider = Arc::new(StubProvider::translating("Hello", "Hola"));
        let (status, body) = post_json(app(provider.clone()), "/api/translate", case).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {}", case);
        assert_json_eq!(body, json!({ "error": "Missing required parameters" }));
        assert!(provider.calls.lock().unwrap().is_empty());
    }
}

#[tokio::test]
async fn translate_without_content_type_reads_body() {
    let provider = Arc::new(StubProvider::translating("Hello", "Hola"));

    let (status, body) = post_body(
        app(provider.clone()),
        "/api/translate",
        r#"{"target_lang": "es"}"#,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_json_eq!(body, json!({ "error": "Missing required parameters" }));

    let (status, body) = post_body(
        app(provider),
        "/api/translate",
        r#"{"text": "Hello", "target_lang": "es"}"#,
        Some("text/plain"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_json_eq!(body, json!({ "translatedText": "Hola" }));
}

#[tokio::test]
async fn translate_unusable_body_is_500_with_json_error() {
    let cases = [
        "{not json",
        "",
        "null",
        r#"["Hello", "es"]"#,
        r#"{"text": 123, "target_lang": "es"}"#,
        r#"{"text": "Hello", "target_lang": ["es"]}"#,
    ];

    for case in cases {
        let provider = Arc::new(StubProvider::translating("Hello", "Hola"));
        let (status, body) = post_json(app(provider.clone()), "/api/translate", case).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "body: {}", case);
        assert!(
            body["error"].as_str().is_some_and(|e| !e.is_empty()),
            "body: {}",
            case
        );
        assert!(provider.calls.lock().unwrap().is_empty());
    }
}

#[tokio::test]
async fn translate_non_string_text_reports_type() {
    let provider = Arc::new(StubProvider::default());

    let (status, body) = post_json(
        app(provider),
        "/api/translate",
        r#"{"text": 123, "target_lang": "es"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_json_eq!(body, json!({ "error": "text must be a string, got number" }));
}

#[tokio::test]
async fn translate_provider_failure_is_500_with_message() {
    let provider = Arc::new(StubProvider::failing("quota exceeded"));

    let (status, body) = post_json(
        app(provider),
        "/api/translate",
        r#"{"text": "Hello", "target_lang": "es"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_json_eq!(body, json!({ "error": "API error: 503 - quota exceeded" }));
}

#[tokio::test]
async fn languages_sorted_by_name() {
    let provider = Arc::new(StubProvider::with_languages(&[
        ("Spanish", "es"),
        ("English", "en"),
    ]));

    let (status, body) = get_json(app(provider), "/api/languages").await;

    assert_eq!(status, StatusCode::OK);
    assert_json_eq!(
        body,
        json!([
            { "code": "en", "name": "English" },
            { "code": "es", "name": "Spanish" }
        ])
    );
}

#[tokio::test]
async fn languages_have_unique_codes() {
    let provider = Arc::new(StubProvider::with_languages(&[
        ("tagalog", "tl"),
        ("filipino", "tl"),
        ("german", "de"),
    ]));

    let (status, body) = get_json(app(provider), "/api/languages").await;

    assert_eq!(status, StatusCode::OK);
    let codes: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, ["tl", "de"]);
}

#[tokio::test]
async fn languages_provider_failure_is_500() {
    let provider = Arc::new(StubProvider::failing("connection refused"));

    let (status, body) = get_json(app(provider), "/api/languages").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_json_eq!(body, json!({ "error": "Network error: connection refused" }));
}

#[tokio::test]
async fn index_serves_html() {
    let response = app(Arc::new(StubProvider::default()))
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let response = app(Arc::new(StubProvider::with_languages(&[("english", "en")])))
        .oneshot(
            Request::builder()
                .uri("/api/languages")
                .header(header::ORIGIN, "https://example.org")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn health_reports_service() {
    let (status, body) = get_json(app(Arc::new(StubProvider::default())), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "translate-relay");
}
