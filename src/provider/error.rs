use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    /// The credential is absent. Reported per request so the server can boot
    /// without it; the message names the variable the operator must set.
    #[error("GEMINI_API_KEY is not set; configure it in the deployment environment")]
    MissingApiKey,

    #[error("provider request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider answered with its own error document.
    #[error("provider API error: {message}")]
    Api { message: String },

    #[error("provider returned no candidates")]
    EmptyResponse,
}
