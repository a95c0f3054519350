use super::types::{GenerateRequest, GenerateResponse};
use super::*;

#[test]
fn test_generate_request_shape() {
    let request = GenerateRequest::from_prompt("What is Rust?");
    let body = serde_json::to_value(&request).expect("should serialize");

    assert_eq!(body["contents"][0]["parts"][0]["text"], "What is Rust?");
    assert_eq!(body["generationConfig"]["maxOutputTokens"], 1024);
    assert!(body["generationConfig"]["temperature"].is_number());
}

#[test]
fn test_response_extracts_first_candidate() {
    let response: GenerateResponse = serde_json::from_value(serde_json::json!({
        "candidates": [
            {"content": {"parts": [{"text": "Answer one."}, {"text": "trailing part"}]}},
            {"content": {"parts": [{"text": "Answer two."}]}}
        ]
    }))
    .expect("should deserialize");

    assert_eq!(response.into_text().expect("should extract"), "Answer one.");
}

#[test]
fn test_response_surfaces_api_error() {
    let response: GenerateResponse = serde_json::from_value(serde_json::json!({
        "error": {"message": "API key not valid", "code": 400, "status": "INVALID_ARGUMENT"}
    }))
    .expect("should deserialize");

    let err = response.into_text().unwrap_err();
    match err {
        ProviderError::Api { message } => assert_eq!(message, "API key not valid"),
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[test]
fn test_response_without_candidates_is_empty_response() {
    let response: GenerateResponse =
        serde_json::from_value(serde_json::json!({})).expect("should deserialize");

    assert!(matches!(
        response.into_text(),
        Err(ProviderError::EmptyResponse)
    ));
}

#[test]
fn test_response_with_blank_text_is_empty_response() {
    let response: GenerateResponse = serde_json::from_value(serde_json::json!({
        "candidates": [{"content": {"parts": [{"text": ""}]}}]
    }))
    .expect("should deserialize");

    assert!(matches!(
        response.into_text(),
        Err(ProviderError::EmptyResponse)
    ));
}

#[test]
fn test_gemini_client_without_key() {
    let client = GeminiClient::new(reqwest::Client::new(), "http://localhost:1/", None);
    assert!(!client.has_api_key());

    let client = GeminiClient::new(
        reqwest::Client::new(),
        "http://localhost:1/",
        Some(String::new()),
    );
    assert!(!client.has_api_key());
}

#[tokio::test]
async fn test_gemini_client_missing_key_fails_before_network() {
    // URL is unreachable; a missing key must short-circuit before any I/O.
    let client = GeminiClient::new(reqwest::Client::new(), "http://127.0.0.1:1/", None);

    let err = client.complete("hello").await.unwrap_err();
    assert!(matches!(err, ProviderError::MissingApiKey));
    assert!(err.to_string().contains("GEMINI_API_KEY"));
}

#[tokio::test]
async fn test_mock_backend_returns_stub_text_unchanged() {
    let backend = MockBackend::replying("stubbed answer");

    let first = backend.complete("prompt one").await.expect("should reply");
    let second = backend.complete("prompt two").await.expect("should reply");

    assert_eq!(first, "stubbed answer");
    assert_eq!(second, "stubbed answer");
    assert_eq!(backend.prompts(), vec!["prompt one", "prompt two"]);
}

#[tokio::test]
async fn test_mock_backend_scripted_sequence() {
    let backend =
        MockBackend::with_replies(vec!["first".to_string(), "second".to_string()]);

    assert_eq!(backend.complete("a").await.expect("reply"), "first");
    assert_eq!(backend.complete("b").await.expect("reply"), "second");
    // Script exhausted: the last entry repeats.
    assert_eq!(backend.complete("c").await.expect("reply"), "second");
}

#[tokio::test]
async fn test_mock_backend_failures() {
    let backend = MockBackend::missing_key();
    assert!(matches!(
        backend.complete("x").await.unwrap_err(),
        ProviderError::MissingApiKey
    ));

    let backend = MockBackend::failing("quota exceeded");
    match backend.complete("x").await.unwrap_err() {
        ProviderError::Api { message } => assert_eq!(message, "quota exceeded"),
        other => panic!("expected Api error, got {other:?}"),
    }
}
