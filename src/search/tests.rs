use super::*;
use crate::constants::MAX_RELATED_TOPICS;

fn parse(json: serde_json::Value) -> InstantAnswer {
    serde_json::from_value(json).expect("should deserialize")
}

#[test]
fn test_snippet_abstract_only() {
    let answer = parse(serde_json::json!({
        "AbstractText": "Rust is a systems programming language.",
        "RelatedTopics": []
    }));

    assert_eq!(
        answer.snippet(MAX_RELATED_TOPICS),
        "Rust is a systems programming language."
    );
}

#[test]
fn test_snippet_topics_only() {
    let answer = parse(serde_json::json!({
        "AbstractText": "",
        "RelatedTopics": [
            {"Text": "First topic"},
            {"Text": "Second topic"}
        ]
    }));

    assert_eq!(
        answer.snippet(MAX_RELATED_TOPICS),
        "First topic\nSecond topic"
    );
}

#[test]
fn test_snippet_abstract_and_topics() {
    let answer = parse(serde_json::json!({
        "AbstractText": "Overview.",
        "RelatedTopics": [{"Text": "Detail."}]
    }));

    assert_eq!(answer.snippet(MAX_RELATED_TOPICS), "Overview.\nDetail.");
}

#[test]
fn test_snippet_caps_topic_count() {
    let topics: Vec<serde_json::Value> = (0..10)
        .map(|i| serde_json::json!({"Text": format!("topic {i}")}))
        .collect();
    let answer = parse(serde_json::json!({
        "AbstractText": "",
        "RelatedTopics": topics
    }));

    let snippet = answer.snippet(MAX_RELATED_TOPICS);
    assert_eq!(snippet.lines().count(), MAX_RELATED_TOPICS);
    assert!(snippet.starts_with("topic 0"));
    assert!(snippet.ends_with("topic 4"));
}

#[test]
fn test_snippet_skips_topic_groups_without_text() {
    // Topic groups nest their entries under "Topics" and have no "Text".
    let answer = parse(serde_json::json!({
        "AbstractText": "",
        "RelatedTopics": [
            {"Name": "See also", "Topics": [{"Text": "nested, ignored"}]},
            {"Text": "flat entry"}
        ]
    }));

    assert_eq!(answer.snippet(MAX_RELATED_TOPICS), "flat entry");
}

#[test]
fn test_snippet_empty_document() {
    let answer = parse(serde_json::json!({}));
    assert_eq!(answer.snippet(MAX_RELATED_TOPICS), "");
}

#[test]
fn test_snippet_whitespace_entries_are_dropped() {
    let answer = parse(serde_json::json!({
        "AbstractText": "   ",
        "RelatedTopics": [{"Text": "  "}, {"Text": "kept"}]
    }));

    assert_eq!(answer.snippet(MAX_RELATED_TOPICS), "kept");
}

#[tokio::test]
async fn test_fetch_context_unreachable_endpoint_returns_empty() {
    // Nothing listens on port 1; the fetch must degrade, not error.
    let client = SearchClient::new(reqwest::Client::new(), "http://127.0.0.1:1/");

    let snippet = client.fetch_context("anything").await;
    assert_eq!(snippet, "");
}
