//! Rubric scoring of generated answers.
//!
//! Given a question, the generated answer, and the answer the user expected,
//! [`RubricScorer`] asks the completion provider to grade four dimensions
//! (factual accuracy, completeness, relevance, clarity; 0-25 each) and turns
//! the reply into a [`ScoreReport`].
//!
//! # Defensive Parsing
//!
//! The model's reply is untrusted text. The scorer strips Markdown code
//! fences, clamps every sub-score into range, recomputes the total, and
//! derives the [`Verdict`] locally from [`VerdictThresholds`] - the model's
//! own `total_score`/`verdict` fields are ignored so the documented
//! threshold mapping stays deterministic. A reply that does not parse at all
//! degrades to a neutral fallback report instead of failing the request;
//! only provider-level failures (missing key, upstream error) propagate.

pub mod error;
pub mod scorer;
pub mod types;


pub use error::ScoringError;
pub use scorer::RubricScorer;
pub use types::{ScoreCard, ScoreOrigin, ScoreReport, Verdict, VerdictThresholds};
