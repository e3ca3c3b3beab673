//! Analysis orchestrator.
//!
//! Composes the pipeline stages into a single structured result per input
//! text. Stage order matters for correctness: lexical statistics and POS
//! tagging read the raw text (punctuation and capitalization carry signal),
//! while sentiment scoring reads the normalized text (estimation benefits
//! from noise reduction).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::lexical;
use super::normalize::normalize;
use super::pos;
use super::sentiment::{self, SentimentCategory};
use crate::config::AnalysisConfig;
use crate::history::HistoryEntry;
use crate::toolkit::Toolkit;

/// Marker appended to a truncated text preview.
const ELLIPSIS: &str = "...";

/// Structured result of analyzing one text. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Truncated preview of the original input, for history display only.
    pub source_text_preview: String,
    /// Whitespace-delimited token count of the original text.
    pub word_count: usize,
    /// Count of non-empty `.`/`!`/`?`-delimited segments of the original text.
    pub sentence_count: usize,
    /// Part-of-speech tag frequencies; empty if tagging was unavailable.
    pub pos_counts: BTreeMap<String, u32>,
    /// Sentiment strength and direction in [-1.0, 1.0].
    pub polarity: f64,
    /// How opinion-based the text is, in [0.0, 1.0].
    pub subjectivity: f64,
    /// Classification derived from the polarity sign.
    pub sentiment: SentimentCategory,
}

impl AnalysisResult {
    /// Project this result into the reduced form kept in the session history.
    pub fn to_history_entry(&self) -> HistoryEntry {
        HistoryEntry::new(
            self.source_text_preview.clone(),
            self.sentiment,
            self.polarity,
        )
    }
}

/// Orchestrator composing normalization, lexical statistics, POS tagging,
/// and sentiment scoring over a toolkit.
#[derive(Debug, Clone)]
pub struct Analyzer<T: Toolkit> {
    toolkit: T,
    config: AnalysisConfig,
}

impl<T: Toolkit> Analyzer<T> {
    /// Create an analyzer with the default configuration.
    pub fn new(toolkit: T) -> Self {
        Self::with_config(toolkit, AnalysisConfig::default())
    }

    /// Create an analyzer with an explicit configuration.
    pub fn with_config(toolkit: T, config: AnalysisConfig) -> Self {
        Self { toolkit, config }
    }

    /// Analyze one text.
    ///
    /// Total over all string inputs: toolkit failures are absorbed by the
    /// POS and sentiment stages' fallbacks, and empty input short-circuits
    /// to zero counts and a neutral score.
    pub fn analyze(&self, raw_text: &str) -> AnalysisResult {
        let normalized = normalize(raw_text);

        let stats = lexical::extract_stats(raw_text);
        let pos_counts = pos::build_distribution(&self.toolkit, raw_text);
        let score = sentiment::score(&self.toolkit, &normalized);

        let result = AnalysisResult {
            source_text_preview: make_preview(raw_text, self.config.preview_max_chars),
            word_count: stats.word_count,
            sentence_count: stats.sentence_count,
            pos_counts,
            polarity: score.polarity,
            subjectivity: score.subjectivity,
            sentiment: score.category,
        };

        debug!(
            words = result.word_count,
            sentences = result.sentence_count,
            polarity = result.polarity,
            category = %result.sentiment,
            "Analysis completed"
        );

        result
    }
}

/// Truncate a text to `max_chars` characters, marking truncation with `...`.
///
/// Texts at or under the limit are returned exactly as given.
fn make_preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let mut preview: String = text.chars().take(max_chars).collect();
        preview.push_str(ELLIPSIS);
        preview
    }
}
