//! Hosted-LLM completion provider.
//!
//! [`CompletionBackend`] is the seam between the answer pipeline and the
//! model API: the gateway and scorer are generic over it so tests can swap in
//! [`MockBackend`]. The production implementation is [`GeminiClient`], a thin
//! `reqwest` wrapper around the `generateContent` REST endpoint.

pub mod error;
pub mod gemini;
pub mod types;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

#[cfg(test)]
mod tests;

pub use error::ProviderError;
pub use gemini::GeminiClient;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockBackend;

use async_trait::async_trait;

/// A completion API that turns a prompt into generated text.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError>;
}
