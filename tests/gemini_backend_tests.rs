//! Gemini backend wire-format and status-classification tests.

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cyberprep::backend::{GeminiBackend, GenerationBackend};
use cyberprep::config::Credential;
use cyberprep::error::GatewayError;

fn backend(server: &MockServer) -> GeminiBackend {
    GeminiBackend::with_base_url(Credential::new("test-key"), server.uri())
}

#[tokio::test]
async fn generate_sends_the_expected_wire_format() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.0-flash:generateContent"))
        .and(query_param("key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [{"parts": [{"text": "ping"}]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {"parts": [{"text": "pong"}]},
                "finishReason": "STOP"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let text = backend(&server)
        .generate("gemini-2.0-flash", "ping")
        .await
        .expect("generation should succeed");

    assert_eq!(text, "pong");
}

#[tokio::test]
async fn multiple_text_parts_are_concatenated() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {"parts": [{"text": "question---"}, {"text": "answer"}]}
            }]
        })))
        .mount(&server)
        .await;

    let text = backend(&server)
        .generate("gemini-pro", "prompt")
        .await
        .unwrap();

    assert_eq!(text, "question---answer");
}

#[tokio::test]
async fn not_found_status_is_a_retryable_model_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(404).set_body_string("model deprecated"))
        .mount(&server)
        .await;

    let err = backend(&server)
        .generate("gemini-1.0-pro", "prompt")
        .await
        .unwrap_err();

    assert!(matches!(err, GatewayError::ModelNotFound(_)));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn quota_status_is_retryable_and_carries_retry_after() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(429).set_body_string(r#"{"error":{"retry_after":2.0}}"#),
        )
        .mount(&server)
        .await;

    let err = backend(&server)
        .generate("gemini-1.5-flash", "prompt")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        GatewayError::RateLimited {
            retry_after_ms: Some(2000)
        }
    ));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn auth_status_is_fatal() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_string("API key invalid"))
        .mount(&server)
        .await;

    let err = backend(&server)
        .generate("gemini-pro", "prompt")
        .await
        .unwrap_err();

    assert!(matches!(err, GatewayError::Authentication(_)));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn bad_request_status_is_fatal() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_string("malformed request"))
        .mount(&server)
        .await;

    let err = backend(&server)
        .generate("gemini-pro", "prompt")
        .await
        .unwrap_err();

    assert!(matches!(err, GatewayError::Api { status: 400, .. }));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn missing_candidates_is_a_fatal_malformed_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
        .mount(&server)
        .await;

    let err = backend(&server)
        .generate("gemini-pro", "prompt")
        .await
        .unwrap_err();

    assert!(matches!(err, GatewayError::MalformedResponse(_)));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn missing_text_parts_is_a_fatal_malformed_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"parts": []}}]
        })))
        .mount(&server)
        .await;

    let err = backend(&server)
        .generate("gemini-pro", "prompt")
        .await
        .unwrap_err();

    assert!(matches!(err, GatewayError::MalformedResponse(_)));
}

#[tokio::test]
async fn non_json_success_body_is_a_fatal_malformed_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy error</html>"))
        .mount(&server)
        .await;

    let err = backend(&server)
        .generate("gemini-pro", "prompt")
        .await
        .unwrap_err();

    assert!(matches!(err, GatewayError::MalformedResponse(_)));
    assert!(!err.is_retryable());
}
