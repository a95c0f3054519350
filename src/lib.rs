//! Synapse library crate (used by the server binary and integration tests).
//!
//! Synapse answers a user question in three steps: fetch a few lines of web
//! context from a search API, hand the question plus context to a hosted LLM,
//! and (optionally) score the generated answer against the answer the user
//! expected.
//!
//! # Public API Surface
//!
//! - [`Config`], [`ConfigError`] - Server configuration
//! - [`SearchClient`] - Best-effort web-context fetcher
//! - [`CompletionBackend`], [`GeminiClient`], [`ProviderError`] - LLM provider
//! - [`RubricScorer`], [`ScoreReport`], [`Verdict`] - Answer scoring
//! - [`AppState`], [`create_router`] - HTTP gateway
//!
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod config;
pub mod constants;
pub mod gateway;
pub mod provider;
pub mod scoring;
pub mod search;

pub use config::{Config, ConfigError};
pub use gateway::{AppState, GatewayError, create_router};
#[cfg(any(test, feature = "mock"))]
pub use provider::MockBackend;
pub use provider::{CompletionBackend, GeminiClient, ProviderError};
pub use scoring::{
    RubricScorer, ScoreCard, ScoreOrigin, ScoreReport, ScoringError, Verdict, VerdictThresholds,
};
pub use search::SearchClient;

pub static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
