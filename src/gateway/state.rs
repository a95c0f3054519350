use std::sync::Arc;

use crate::config::Config;
use crate::provider::{CompletionBackend, GeminiClient};
use crate::scoring::{RubricScorer, VerdictThresholds};
use crate::search::SearchClient;

/// Per-request handler state. Generic over the completion backend so tests
/// can drive the full router with a scripted provider.
pub struct AppState<P: CompletionBackend + 'static> {
    pub search: SearchClient,

    pub provider: Arc<P>,

    pub scorer: RubricScorer<P>,

    /// Whether an API key was present at startup (reported by `/healthz`).
    pub gemini_configured: bool,
}

impl<P: CompletionBackend + 'static> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            search: self.search.clone(),
            provider: Arc::clone(&self.provider),
            scorer: self.scorer.clone(),
            gemini_configured: self.gemini_configured,
        }
    }
}

impl<P: CompletionBackend + 'static> AppState<P> {
    pub fn new(
        search: SearchClient,
        provider: Arc<P>,
        thresholds: VerdictThresholds,
        gemini_configured: bool,
    ) -> Self {
        let scorer = RubricScorer::with_thresholds(Arc::clone(&provider), thresholds);
        Self {
            search,
            provider,
            scorer,
            gemini_configured,
        }
    }
}

impl AppState<GeminiClient> {
    /// Production wiring: one shared HTTP client across both outbound APIs.
    pub fn from_config(config: &Config, http: reqwest::Client) -> Self {
        let search = SearchClient::new(http.clone(), config.search_url.clone());
        let provider = Arc::new(GeminiClient::from_config(config, http));
        let gemini_configured = provider.has_api_key();

        Self::new(
            search,
            provider,
            VerdictThresholds::default(),
            gemini_configured,
        )
    }
}
