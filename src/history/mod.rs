//! Session-scoped history of analysis results.
//!
//! An append-only, deduplicating log owned by the caller for the lifetime of
//! one interactive session. Created empty at session start, appended to after
//! each analysis, and dropped when the session ends; nothing is persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::analysis::SentimentCategory;

/// Reduced projection of an analysis result kept in the session history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Preview of the analyzed text (truncated, display only).
    pub text_preview: String,
    /// Sentiment classification of the analysis.
    pub sentiment: SentimentCategory,
    /// Polarity of the analysis.
    pub polarity: f64,
}

impl HistoryEntry {
    /// Create a new history entry.
    pub fn new(
        text_preview: impl Into<String>,
        sentiment: SentimentCategory,
        polarity: f64,
    ) -> Self {
        Self {
            text_preview: text_preview.into(),
            sentiment,
            polarity,
        }
    }

    /// Field-wise equality over the dedup key: preview, category, polarity.
    pub fn matches(&self, other: &HistoryEntry) -> bool {
        self.text_preview == other.text_preview
            && self.sentiment == other.sentiment
            && self.polarity == other.polarity
    }
}

/// Ordered, append-only sequence of [`HistoryEntry`] values for one session.
#[derive(Debug, Clone)]
pub struct SessionHistory {
    id: String,
    started_at: DateTime<Utc>,
    entries: Vec<HistoryEntry>,
}

impl SessionHistory {
    /// Create an empty history for a new session.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            started_at: Utc::now(),
            entries: Vec::new(),
        }
    }

    /// Unique identifier of this session.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// When this session started.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Append an entry unless it repeats the most recent one exactly.
    ///
    /// Deduplication suppresses consecutive exact repeats only; a value seen
    /// earlier in the session may reappear after different entries. Returns
    /// whether the entry was appended.
    pub fn append(&mut self, entry: HistoryEntry) -> bool {
        if self.entries.last().is_some_and(|last| last.matches(&entry)) {
            debug!(
                session_id = %self.id,
                preview = %entry.text_preview,
                "Duplicate analysis suppressed from history"
            );
            return false;
        }

        self.entries.push(entry);
        true
    }

    /// Entries in insertion order.
    pub fn snapshot(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of entries recorded so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history is still empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SessionHistory {
    fn default() -> Self {
        Self::new()
    }
}
