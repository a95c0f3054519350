use tracing::{debug, instrument, warn};

use crate::constants::{MAX_RELATED_TOPICS, SEARCH_TIMEOUT};

use super::types::InstantAnswer;

/// Client for the Instant Answer API.
///
/// Cheap to clone; the inner [`reqwest::Client`] is a shared handle.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    base_url: String,
}

impl SearchClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Fetches a short context snippet for `query`.
    ///
    /// Never fails: transport errors, non-2xx statuses, and undecodable
    /// bodies are logged and collapsed to an empty snippet so the answer
    /// pipeline keeps going.
    #[instrument(skip(self))]
    pub async fn fetch_context(&self, query: &str) -> String {
        match self.instant_answer(query).await {
            Ok(answer) => {
                let snippet = answer.snippet(MAX_RELATED_TOPICS);
                debug!(snippet_len = snippet.len(), "web search completed");
                snippet
            }
            Err(e) => {
                warn!(error = %e, "web search failed, continuing without context");
                String::new()
            }
        }
    }

    async fn instant_answer(&self, query: &str) -> Result<InstantAnswer, reqwest::Error> {
        self.http
            .get(&self.base_url)
            .query(&[
                ("q", query),
                ("format", "json"),
                ("no_html", "1"),
                ("skip_disambig", "1"),
            ])
            .timeout(SEARCH_TIMEOUT)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}
