//! Natural-language toolkit boundary.
//!
//! The pipeline delegates primitive language operations (tokenization with
//! part-of-speech tagging, polarity/subjectivity estimation) to a [`Toolkit`]
//! implementation. The trait is the seam that lets tests inject failures and
//! lets callers swap in a different engine; [`LexiconToolkit`] is the built-in
//! rule- and lexicon-based implementation.

mod lexicon;

pub use lexicon::LexiconToolkit;

use serde::{Deserialize, Serialize};

use crate::error::ToolkitResult;

/// A single token paired with its part-of-speech tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    /// The token text as it appeared in the input (edge punctuation stripped).
    pub token: String,
    /// Penn-style part-of-speech tag (e.g. "NN", "VB", "JJ").
    pub tag: String,
}

impl TaggedToken {
    /// Create a new tagged token.
    pub fn new(token: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            tag: tag.into(),
        }
    }
}

/// Raw polarity/subjectivity estimate for a text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentEstimate {
    /// Sentiment strength and direction in [-1.0, 1.0].
    pub polarity: f64,
    /// How opinion-based the text is, in [0.0, 1.0].
    pub subjectivity: f64,
}

/// Primitive natural-language operations the analysis pipeline delegates to.
///
/// Both operations may fail (malformed input, missing lexicon data); callers
/// are expected to catch the error and degrade to a well-defined fallback
/// rather than propagate it.
#[cfg_attr(test, mockall::automock)]
pub trait Toolkit {
    /// Tokenize the text and assign a part-of-speech tag to each token.
    fn tokenize_and_tag(&self, text: &str) -> ToolkitResult<Vec<TaggedToken>>;

    /// Estimate polarity and subjectivity for the text.
    fn estimate_sentiment(&self, text: &str) -> ToolkitResult<SentimentEstimate>;
}
