//! Best-effort web-context fetcher.
//!
//! Queries the DuckDuckGo Instant Answer API and condenses the reply into a
//! short snippet for the LLM prompt. The fetch is strictly best-effort: a
//! request that fails, times out, or returns an unexpected body yields an
//! empty snippet and the answer pipeline continues without web context.

pub mod client;
pub mod types;

#[cfg(test)]
mod tests;

pub use client::SearchClient;
pub use types::{InstantAnswer, RelatedTopic};
