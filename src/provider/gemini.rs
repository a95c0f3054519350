use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::config::Config;
use crate::constants::GENERATION_TIMEOUT;

use super::CompletionBackend;
use super::error::ProviderError;
use super::types::{GenerateRequest, GenerateResponse};

/// Gemini `generateContent` client.
///
/// Holds the key as an `Option` so construction succeeds without one; each
/// call then fails with [`ProviderError::MissingApiKey`] until the operator
/// configures the credential.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    url: String,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn new(
        http: reqwest::Client,
        url: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            http,
            url: url.into(),
            api_key: api_key.filter(|key| !key.is_empty()),
        }
    }

    pub fn from_config(config: &Config, http: reqwest::Client) -> Self {
        Self::new(http, config.gemini_url.clone(), config.gemini_api_key.clone())
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait]
impl CompletionBackend for GeminiClient {
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        let api_key = self.api_key.as_deref().ok_or(ProviderError::MissingApiKey)?;

        let request = GenerateRequest::from_prompt(prompt);

        // Error statuses still carry the in-band `error` document, so the
        // body is decoded unconditionally rather than via error_for_status.
        let response: GenerateResponse = self
            .http
            .post(&self.url)
            .query(&[("key", api_key)])
            .json(&request)
            .timeout(GENERATION_TIMEOUT)
            .send()
            .await?
            .json()
            .await?;

        let text = response.into_text()?;
        debug!(answer_len = text.len(), "completion received");
        Ok(text)
    }
}
