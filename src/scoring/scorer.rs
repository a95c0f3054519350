use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::provider::CompletionBackend;

use super::error::ScoringError;
use super::types::{ScoreCard, ScoreReport, VerdictThresholds};

/// The shape the rubric prompt asks the model to return.
///
/// `total_score` and `verdict` also appear in the reply but are deliberately
/// not read: both are recomputed locally. Missing sub-score fields fail the
/// parse and trigger the fallback report.
#[derive(Debug, Deserialize)]
struct RawReply {
    factual_accuracy: i64,
    completeness: i64,
    relevance: i64,
    clarity: i64,
    #[serde(default)]
    feedback: String,
    #[serde(default)]
    matches_expected: bool,
}

/// Grades a generated answer against the user's expected answer with one
/// provider call.
pub struct RubricScorer<P> {
    provider: Arc<P>,
    thresholds: VerdictThresholds,
}

impl<P> Clone for RubricScorer<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            thresholds: self.thresholds,
        }
    }
}

impl<P: CompletionBackend> RubricScorer<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self::with_thresholds(provider, VerdictThresholds::default())
    }

    pub fn with_thresholds(provider: Arc<P>, thresholds: VerdictThresholds) -> Self {
        Self {
            provider,
            thresholds,
        }
    }

    pub fn thresholds(&self) -> VerdictThresholds {
        self.thresholds
    }

    /// Scores `ai_answer` against `expected`.
    ///
    /// Provider failures propagate; an unparseable reply degrades to
    /// [`ScoreReport::fallback`].
    #[instrument(skip(self, question, ai_answer, expected))]
    pub async fn score(
        &self,
        question: &str,
        ai_answer: &str,
        expected: &str,
    ) -> Result<ScoreReport, ScoringError> {
        let prompt = rubric_prompt(question, ai_answer, expected);
        let raw = self.provider.complete(&prompt).await?;
        Ok(self.parse_reply(&raw))
    }

    fn parse_reply(&self, raw: &str) -> ScoreReport {
        let cleaned = strip_code_fences(raw);

        match serde_json::from_str::<RawReply>(cleaned) {
            Ok(reply) => {
                let scores = ScoreCard::from_raw(
                    reply.factual_accuracy,
                    reply.completeness,
                    reply.relevance,
                    reply.clarity,
                );
                debug!(total = scores.total(), "scoring reply parsed");
                ScoreReport::from_scores(
                    scores,
                    reply.feedback,
                    reply.matches_expected,
                    &self.thresholds,
                )
            }
            Err(e) => {
                warn!(
                    error = %e,
                    reply_len = raw.len(),
                    "scoring reply did not parse as rubric JSON, using fallback score"
                );
                ScoreReport::fallback(&self.thresholds)
            }
        }
    }
}

/// Strips a Markdown code fence (```` ```json ... ``` ````) around the reply,
/// tolerating prose before the fence. Returns the trimmed input when no fence
/// is present.
pub(crate) fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(start) = trimmed.find("```") else {
        return trimmed;
    };

    let body = &trimmed[start + 3..];
    let body = body.strip_prefix("json").unwrap_or(body);
    let body = match body.find("```") {
        Some(end) => &body[..end],
        None => body,
    };

    body.trim()
}

fn rubric_prompt(question: &str, ai_answer: &str, expected: &str) -> String {
    format!(
        "You are an expert answer evaluator. Compare the AI-generated answer with the \
         user's expected answer for the given question.\n\n\
         Question: {question}\n\n\
         AI Answer:\n{ai_answer}\n\n\
         User's Expected Answer:\n{expected}\n\n\
         Evaluate on these 4 dimensions (each 0-25 points):\n\
         1. Factual Accuracy (0-25): Is the AI answer factually correct?\n\
         2. Completeness (0-25): Does the AI answer cover what was expected?\n\
         3. Relevance (0-25): Does the AI answer address the question directly?\n\
         4. Clarity (0-25): Is the AI answer well-explained?\n\n\
         Respond ONLY with valid JSON in this exact format (no markdown):\n\
         {{\n\
           \"total_score\": <number 0-100>,\n\
           \"factual_accuracy\": <number 0-25>,\n\
           \"completeness\": <number 0-25>,\n\
           \"relevance\": <number 0-25>,\n\
           \"clarity\": <number 0-25>,\n\
           \"verdict\": \"<one of: Excellent | Good | Acceptable | Poor>\",\n\
           \"feedback\": \"<2-3 sentences explaining the score and key differences>\",\n\
           \"matches_expected\": <true or false>\n\
         }}"
    )
}
