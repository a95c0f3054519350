mod common;

use common::harness::spawn_test_server;
use synapse::provider::MockBackend;

fn rubric_reply(total_per_dimension: i64) -> String {
    serde_json::json!({
        "total_score": total_per_dimension * 4,
        "factual_accuracy": total_per_dimension,
        "completeness": total_per_dimension,
        "relevance": total_per_dimension,
        "clarity": total_per_dimension,
        "verdict": "ignored",
        "feedback": "Scored by the test backend.",
        "matches_expected": true
    })
    .to_string()
}

#[tokio::test]
async fn test_answer_and_score_lifecycle() {
    let server = spawn_test_server(MockBackend::with_replies(vec![
        "Paris is the capital of France.".to_string(),
        rubric_reply(25),
    ]))
    .await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/search", server.url()))
        .json(&serde_json::json!({
            "query": "What is the capital of France?",
            "expected_answer": "Paris"
        }))
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(response.status(), 200);
    assert_eq!(
        response
            .headers()
            .get("x-synapse-status")
            .expect("status header")
            .to_str()
            .expect("ascii"),
        "ok"
    );

    let body: serde_json::Value = response.json().await.expect("JSON body");
    assert_eq!(body["ai_answer"], "Paris is the capital of France.");
    assert_eq!(body["web_context"], "");
    assert_eq!(body["score"]["total_score"], 100);
    assert_eq!(body["score"]["verdict"], "Excellent");
    assert_eq!(body["score"]["origin"], "model");

    // Two provider calls: one generation, one scoring.
    assert_eq!(server.backend.prompts().len(), 2);
}

#[tokio::test]
async fn test_standalone_scoring_with_poor_marks() {
    let server = spawn_test_server(MockBackend::replying(rubric_reply(0))).await;
    let client = reqwest::Client::new();

    let body: serde_json::Value = client
        .post(format!("{}/api/score", server.url()))
        .json(&serde_json::json!({
            "query": "q",
            "ai_answer": "completely wrong",
            "expected_answer": "something else"
        }))
        .send()
        .await
        .expect("request should succeed")
        .json()
        .await
        .expect("JSON body");

    assert_eq!(body["total_score"], 0);
    assert_eq!(body["verdict"], "Poor");
}

#[tokio::test]
async fn test_missing_api_key_end_to_end() {
    let server = spawn_test_server(MockBackend::missing_key()).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/search", server.url()))
        .json(&serde_json::json!({"query": "q"}))
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(response.status(), 500);
    let body: serde_json::Value = response.json().await.expect("JSON body");
    assert!(
        body["error"]
            .as_str()
            .expect("error string")
            .contains("GEMINI_API_KEY")
    );
}

#[tokio::test]
async fn test_health_and_index_routes() {
    let server = spawn_test_server(MockBackend::replying("unused")).await;
    let client = reqwest::Client::new();

    let health: serde_json::Value = client
        .get(format!("{}/healthz", server.url()))
        .send()
        .await
        .expect("request should succeed")
        .json()
        .await
        .expect("JSON body");
    assert_eq!(health["status"], "ok");

    let page = client
        .get(server.url())
        .send()
        .await
        .expect("request should succeed")
        .text()
        .await
        .expect("text body");
    assert!(page.contains("Synapse"));
    assert!(page.contains("/api/score"));
}
