//! Integration tests for API route handlers
//!
//! Tests key endpoints:
//! - POST /api/generate - One completion round trip, stores the result
//! - GET /api/result - Retrieve the stored result
//! - GET /download/llms.txt - Short artifact download
//! - GET /download/llms-full.txt - Detailed artifact download
//! - GET /health - Liveness

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use api_llmo::{models::GeneratePayload, routes::router, state::AppState};
use core_llmo::LlmProvider;
use core_llmo::llms::mock::{MockLlmProvider, sample_not_json, sample_two_key_json};

/// Router wired to a mock provider; the returned router shares one session slot.
fn test_app(provider: impl LlmProvider + Send + Sync + 'static) -> axum::Router {
    router().with_state(AppState::new(Arc::new(provider)))
}

fn generate_request(payload: &GeneratePayload) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/generate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(payload).unwrap()))
        .unwrap()
}

fn payload(api_key: &str, site_name: &str) -> GeneratePayload {
    GeneratePayload {
        api_key: api_key.to_string(),
        site_name: site_name.to_string(),
        overview: "news site".to_string(),
        key_pages: "- Sports\n- Politics".to_string(),
        notes: "daily digests".to_string(),
    }
}

/// Helper to parse JSON response body
async fn response_json(body: Body) -> serde_json::Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn response_text(body: Body) -> String {
    let bytes = body.collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

//
// POST /api/generate tests
//

#[tokio::test]
async fn test_generate_success_returns_both_artifacts() {
    let app = test_app(MockLlmProvider::with_two_key_json());

    let response = app
        .oneshot(generate_request(&payload("sk-test", "box24news.com")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response.into_body()).await;
    assert!(body["llms_txt"].as_str().unwrap().starts_with("# box24news.com"));
    assert!(
        body["llms_full_txt"]
            .as_str()
            .unwrap()
            .starts_with("# box24news.com Full")
    );
}

#[tokio::test]
async fn test_generate_missing_credential_never_reaches_provider() {
    // A provider that would fail the request if consulted: a 400 (not 502)
    // proves the credential precondition aborted first.
    let app = test_app(MockLlmProvider::with_failure());

    let response = app
        .oneshot(generate_request(&payload("   ", "box24news.com")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response.into_body()).await;
    assert_eq!(body["error"], "missing_credential");
}

#[tokio::test]
async fn test_generate_unparseable_completion_is_bad_gateway() {
    let app = test_app(MockLlmProvider::with_default(sample_not_json()));

    let response = app
        .oneshot(generate_request(&payload("sk-test", "box24news.com")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let body = response_json(response.into_body()).await;
    assert_eq!(body["error"], "response_parse_failure");
    assert!(body["details"].as_str().unwrap().len() > 0);
}

#[tokio::test]
async fn test_generate_missing_key_in_completion_is_bad_gateway() {
    let app = test_app(MockLlmProvider::with_default(r#"{"llms_txt":"A"}"#));

    let response = app
        .oneshot(generate_request(&payload("sk-test", "box24news.com")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let body = response_json(response.into_body()).await;
    assert_eq!(body["error"], "response_parse_failure");
}

#[tokio::test]
async fn test_generate_provider_failure_is_bad_gateway() {
    let app = test_app(MockLlmProvider::with_failure());

    let response = app
        .oneshot(generate_request(&payload("sk-test", "box24news.com")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let body = response_json(response.into_body()).await;
    assert_eq!(body["error"], "completion_failure");
}

#[tokio::test]
async fn test_failed_generation_preserves_previous_result() {
    let mut provider = MockLlmProvider::with_default(sample_not_json());
    provider.add_response("box24news.com", sample_two_key_json());
    let app = test_app(provider);

    // First generation succeeds and fills the slot.
    let response = app
        .clone()
        .oneshot(generate_request(&payload("sk-test", "box24news.com")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Second generation fails to parse.
    let response = app
        .clone()
        .oneshot(generate_request(&payload("sk-test", "brokensite.example")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    // The stored result is still the first one.
    let response = app
        .oneshot(Request::builder().uri("/api/result").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response.into_body()).await;
    assert!(body["llms_txt"].as_str().unwrap().starts_with("# box24news.com"));
}

//
// GET /api/result tests
//

#[tokio::test]
async fn test_get_result_before_any_generation() {
    let app = test_app(MockLlmProvider::with_two_key_json());

    let response = app
        .oneshot(Request::builder().uri("/api/result").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response_json(response.into_body()).await;
    assert_eq!(body["error"], "not_generated");
}

//
// Download tests
//

#[tokio::test]
async fn test_download_endpoints_serve_exact_artifacts() {
    let app = test_app(MockLlmProvider::with_response(
        "box24news.com",
        r##"{"llms_txt":"# box24news.com\n...","llms_full_txt":"# box24news.com Full\n..."}"##,
    ));

    let response = app
        .clone()
        .oneshot(generate_request(&payload("sk-test", "box24news.com")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/download/llms.txt")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/markdown; charset=utf-8"
    );
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"llms.txt\""
    );
    assert_eq!(response_text(response.into_body()).await, "# box24news.com\n...");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/download/llms-full.txt")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"llms-full.txt\""
    );
    assert_eq!(
        response_text(response.into_body()).await,
        "# box24news.com Full\n..."
    );
}

#[tokio::test]
async fn test_download_before_any_generation() {
    let app = test_app(MockLlmProvider::with_two_key_json());

    for uri in ["/download/llms.txt", "/download/llms-full.txt"] {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

#[tokio::test]
async fn test_new_generation_overwrites_download_content() {
    let mut provider = MockLlmProvider::new();
    provider.add_response(
        "box24news.com",
        r##"{"llms_txt":"# first","llms_full_txt":"# first full"}"##,
    );
    provider.add_response(
        "othersite.example",
        r##"{"llms_txt":"# second","llms_full_txt":"# second full"}"##,
    );
    let app = test_app(provider);

    for site in ["box24news.com", "othersite.example"] {
        let response = app
            .clone()
            .oneshot(generate_request(&payload("sk-test", site)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .oneshot(
            Request::builder()
                .uri("/download/llms.txt")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response_text(response.into_body()).await, "# second");
}

//
// GET /health tests
//

#[tokio::test]
async fn test_health() {
    let app = test_app(MockLlmProvider::new());

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_text(response.into_body()).await, "healthy");
}
