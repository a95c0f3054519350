use serde::{Deserialize, Serialize};

use crate::scoring::ScoreReport;

/// Body of `POST /api/search`.
#[derive(Debug, Clone, Deserialize)]
pub struct AskRequest {
    pub query: String,

    /// When present and non-blank, the generated answer is also scored
    /// against it.
    #[serde(default)]
    pub expected_answer: Option<String>,
}

impl AskRequest {
    /// The expected answer, trimmed; `None` when absent or blank.
    pub fn expected(&self) -> Option<&str> {
        self.expected_answer
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Body of the `POST /api/search` response.
#[derive(Debug, Clone, Serialize)]
pub struct AskResponse {
    pub id: String,
    pub created: i64,
    pub query: String,
    pub ai_answer: String,
    pub web_context: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<ScoreReport>,
}

/// Body of `POST /api/score` (standalone scoring, used by the UI's
/// Compare & Score flow).
#[derive(Debug, Clone, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub ai_answer: String,
    #[serde(default)]
    pub expected_answer: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub gemini_configured: bool,
}
