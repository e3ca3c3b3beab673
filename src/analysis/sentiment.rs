//! Sentiment scoring and classification.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::toolkit::Toolkit;

/// Subjectivity reported when the toolkit's sentiment estimator fails.
/// Distinct from the `0.0` scored for empty input.
const FALLBACK_SUBJECTIVITY: f64 = 0.5;

/// Three-way sentiment classification, derived from polarity sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentCategory {
    /// Polarity above zero.
    Positive,
    /// Polarity below zero.
    Negative,
    /// Polarity exactly zero.
    Neutral,
}

impl SentimentCategory {
    /// Classify a polarity value.
    ///
    /// This is the only way a category is produced; it is never stored
    /// independently of the polarity it was derived from.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            SentimentCategory::Positive
        } else if polarity < 0.0 {
            SentimentCategory::Negative
        } else {
            SentimentCategory::Neutral
        }
    }
}

impl std::fmt::Display for SentimentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentCategory::Positive => write!(f, "Positive"),
            SentimentCategory::Negative => write!(f, "Negative"),
            SentimentCategory::Neutral => write!(f, "Neutral"),
        }
    }
}

/// Polarity, subjectivity, and the derived category for a text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    /// Sentiment strength and direction in [-1.0, 1.0].
    pub polarity: f64,
    /// How opinion-based the text is, in [0.0, 1.0].
    pub subjectivity: f64,
    /// Classification derived from the polarity sign.
    pub category: SentimentCategory,
}

impl SentimentScore {
    fn from_values(polarity: f64, subjectivity: f64) -> Self {
        let polarity = polarity.clamp(-1.0, 1.0);
        Self {
            polarity,
            subjectivity: subjectivity.clamp(0.0, 1.0),
            category: SentimentCategory::from_polarity(polarity),
        }
    }

    /// Neutral score for empty input.
    fn empty() -> Self {
        Self::from_values(0.0, 0.0)
    }

    /// Neutral-biased fallback for a failed toolkit call.
    fn fallback() -> Self {
        Self::from_values(0.0, FALLBACK_SUBJECTIVITY)
    }
}

/// Score sentiment for a normalized text.
///
/// Delegates to the toolkit's estimator. On any toolkit error the failure is
/// logged and the neutral fallback `{0.0, 0.5, Neutral}` is returned; the
/// caller of the pipeline never sees the error. Whitespace-only input
/// short-circuits to a zero score without invoking the toolkit.
pub fn score<T: Toolkit + ?Sized>(toolkit: &T, normalized_text: &str) -> SentimentScore {
    if normalized_text.trim().is_empty() {
        return SentimentScore::empty();
    }

    match toolkit.estimate_sentiment(normalized_text) {
        Ok(estimate) => SentimentScore::from_values(estimate.polarity, estimate.subjectivity),
        Err(e) => {
            warn!(error = %e, "Sentiment estimation failed, returning neutral fallback");
            SentimentScore::fallback()
        }
    }
}
