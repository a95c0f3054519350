use serde::{Deserialize, Serialize};

use crate::constants::MAX_DIMENSION_SCORE;

/// The four rubric sub-scores, each clamped to 0..=25.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCard {
    pub factual_accuracy: u8,
    pub completeness: u8,
    pub relevance: u8,
    pub clarity: u8,
}

impl ScoreCard {
    /// Builds a card from untrusted integers, clamping each into range.
    pub fn from_raw(factual_accuracy: i64, completeness: i64, relevance: i64, clarity: i64) -> Self {
        Self {
            factual_accuracy: clamp_dimension(factual_accuracy),
            completeness: clamp_dimension(completeness),
            relevance: clamp_dimension(relevance),
            clarity: clamp_dimension(clarity),
        }
    }

    /// Sum of the four dimensions, in 0..=100.
    pub fn total(&self) -> u8 {
        self.factual_accuracy + self.completeness + self.relevance + self.clarity
    }
}

fn clamp_dimension(value: i64) -> u8 {
    value.clamp(0, MAX_DIMENSION_SCORE) as u8
}

/// Cut points for deriving a [`Verdict`] from a total score.
///
/// The defaults (90/70/50) are product copy, not an invariant; pass custom
/// thresholds to [`RubricScorer::with_thresholds`](crate::scoring::RubricScorer::with_thresholds)
/// to move them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerdictThresholds {
    pub excellent: u8,
    pub good: u8,
    pub acceptable: u8,
}

impl Default for VerdictThresholds {
    fn default() -> Self {
        Self {
            excellent: 90,
            good: 70,
            acceptable: 50,
        }
    }
}

/// Categorical grade derived from the sub-score total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Excellent,
    Good,
    Acceptable,
    Poor,
}

impl Verdict {
    /// Maps a total to a verdict. Deterministic: equal inputs and thresholds
    /// always yield the same label.
    pub fn from_total(total: u8, thresholds: &VerdictThresholds) -> Self {
        if total >= thresholds.excellent {
            Verdict::Excellent
        } else if total >= thresholds.good {
            Verdict::Good
        } else if total >= thresholds.acceptable {
            Verdict::Acceptable
        } else {
            Verdict::Poor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Excellent => "Excellent",
            Verdict::Good => "Good",
            Verdict::Acceptable => "Acceptable",
            Verdict::Poor => "Poor",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a report came from the model or from the parse-failure fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreOrigin {
    Model,
    Fallback,
}

/// Full scoring result returned to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    #[serde(flatten)]
    pub scores: ScoreCard,
    pub total_score: u8,
    pub verdict: Verdict,
    pub feedback: String,
    pub matches_expected: bool,
    pub origin: ScoreOrigin,
}

impl ScoreReport {
    /// Report for a successfully parsed model reply. Total and verdict are
    /// recomputed from the clamped card, not taken from the reply.
    pub fn from_scores(
        scores: ScoreCard,
        feedback: String,
        matches_expected: bool,
        thresholds: &VerdictThresholds,
    ) -> Self {
        let total_score = scores.total();
        Self {
            scores,
            total_score,
            verdict: Verdict::from_total(total_score, thresholds),
            feedback,
            matches_expected,
            origin: ScoreOrigin::Model,
        }
    }

    /// Neutral midpoint report used when the model's reply does not parse.
    pub fn fallback(thresholds: &VerdictThresholds) -> Self {
        let scores = ScoreCard {
            factual_accuracy: 13,
            completeness: 13,
            relevance: 12,
            clarity: 12,
        };
        let total_score = scores.total();
        Self {
            scores,
            total_score,
            verdict: Verdict::from_total(total_score, thresholds),
            feedback: "Detailed scoring could not be parsed from the model's reply; \
                       a neutral midpoint score was applied."
                .to_string(),
            matches_expected: false,
            origin: ScoreOrigin::Fallback,
        }
    }
}
