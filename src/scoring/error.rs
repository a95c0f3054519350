use thiserror::Error;

use crate::provider::ProviderError;

/// Scoring failures.
///
/// Malformed scoring replies are absorbed into a fallback report and never
/// surface here; only the provider call itself can fail.
#[derive(Debug, Error)]
pub enum ScoringError {
    #[error(transparent)]
    Provider(#[from] ProviderError),
}
