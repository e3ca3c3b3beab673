//! Lexical statistics extraction.
//!
//! Operates on the original, non-normalized text so punctuation is available
//! for sentence segmentation and numerals still count as words.

use serde::{Deserialize, Serialize};

/// Word and sentence counts for a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LexicalStats {
    /// Count of whitespace-delimited tokens.
    pub word_count: usize,
    /// Count of non-empty segments between `.`, `!`, `?` runs.
    pub sentence_count: usize,
}

/// Compute word and sentence counts from raw text.
///
/// Whitespace-only input short-circuits to zero counts.
pub fn extract_stats(text: &str) -> LexicalStats {
    if text.trim().is_empty() {
        return LexicalStats::default();
    }

    let word_count = text.split_whitespace().count();

    let sentence_count = text
        .split(|c: char| matches!(c, '.' | '!' | '?'))
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .count();

    LexicalStats {
        word_count,
        sentence_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_sentence() {
        let stats = extract_stats("I love sunny days!");
        assert_eq!(stats.word_count, 4);
        assert_eq!(stats.sentence_count, 1);
    }

    #[test]
    fn test_multiple_sentences() {
        let stats = extract_stats("First one. Second one! Third?");
        assert_eq!(stats.word_count, 5);
        assert_eq!(stats.sentence_count, 3);
    }

    #[test]
    fn test_punctuation_runs_count_once() {
        let stats = extract_stats("Wait... what?! Really!!");
        assert_eq!(stats.sentence_count, 3);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(extract_stats(""), LexicalStats::default());
    }

    #[test]
    fn test_whitespace_only_input() {
        assert_eq!(extract_stats("  \t\n  "), LexicalStats::default());
    }

    #[test]
    fn test_no_terminal_punctuation() {
        let stats = extract_stats("no punctuation here");
        assert_eq!(stats.word_count, 3);
        assert_eq!(stats.sentence_count, 1);
    }

    #[test]
    fn test_numerals_count_as_words() {
        let stats = extract_stats("room 101 is free");
        assert_eq!(stats.word_count, 4);
    }
}
