//! Lexicon-backed toolkit implementation.
//!
//! A lightweight, fully in-process engine: part-of-speech tagging uses
//! closed-class word lists plus suffix and shape heuristics, and sentiment
//! estimation uses positive/negative word lexicons with negation and
//! intensifier handling. No model data is loaded from disk.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use tracing::debug;

use super::{SentimentEstimate, TaggedToken, Toolkit};
use crate::error::{ToolkitError, ToolkitResult};

/// Boost applied to a sentiment word preceded by an intensifier.
const INTENSIFIER_BOOST: f64 = 1.5;

/// How far back (in tokens) a negation word flips a sentiment word.
const NEGATION_WINDOW: usize = 2;

/// Scale factor mapping opinion-token density to the subjectivity range.
const SUBJECTIVITY_SCALE: f64 = 2.5;

// Positive words lexicon
static POSITIVE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "good", "great", "excellent", "wonderful", "fantastic", "amazing", "awesome",
        "love", "loved", "loves", "happy", "joy", "joyful", "pleased", "delighted",
        "satisfied", "perfect", "beautiful", "brilliant", "outstanding", "superb",
        "magnificent", "marvelous", "terrific", "fabulous", "exceptional", "impressive",
        "remarkable", "best", "better", "positive", "advantage", "benefit", "success",
        "successful", "win", "winner", "winning", "accomplished", "achievement",
        "triumph", "enjoy", "enjoyed", "pleasant", "comfortable", "excited", "exciting",
        "thrilled", "approve", "approved", "like", "liked", "favorite", "prefer",
        "sunny", "bright", "warm", "friendly", "kind", "glad", "grateful", "hopeful",
        "charming", "delightful", "refreshing", "splendid",
    ]
    .into_iter()
    .collect()
});

// Negative words lexicon
static NEGATIVE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "bad", "terrible", "awful", "horrible", "poor", "worst", "worse",
        "hate", "hated", "hates", "angry", "sad", "upset", "disappointed",
        "dissatisfied", "unhappy", "fail", "failure", "failed", "problem",
        "problems", "issue", "issues", "wrong", "error", "errors", "difficult",
        "hard", "tough", "struggle", "struggling", "broken", "pain", "painful",
        "hurt", "hurting", "damage", "damaged", "disaster", "negative", "loss",
        "lose", "losing", "lost", "defeat", "defeated", "reject", "rejected",
        "dislike", "disliked", "unpleasant", "uncomfortable", "disappointing",
        "frustrate", "frustrated", "frustrating", "gloomy", "miserable", "dreadful",
        "annoying", "boring", "ugly", "nasty", "cruel", "scary",
    ]
    .into_iter()
    .collect()
});

// Intensifiers
static INTENSIFIERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "very", "extremely", "absolutely", "really", "incredibly", "highly",
        "totally", "so", "truly", "deeply",
    ]
    .into_iter()
    .collect()
});

// Negation words
static NEGATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "not", "no", "never", "nothing", "nobody", "nowhere", "neither", "nor",
        "none", "nt", "dont", "doesnt", "didnt", "isnt", "wasnt", "cant", "wont",
    ]
    .into_iter()
    .collect()
});

// Opinion markers that signal subjectivity without carrying polarity
static SUBJECTIVE_MARKERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "think", "thought", "believe", "feel", "felt", "opinion", "seems",
        "seemed", "apparently", "personally", "probably", "maybe", "perhaps",
        "hope", "wish", "guess", "suppose", "surely", "honestly",
    ]
    .into_iter()
    .collect()
});

// Closed-class word lists for tagging
static DETERMINERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["the", "a", "an", "this", "that", "these", "those", "each", "every", "some", "any"]
        .into_iter()
        .collect()
});

static CONJUNCTIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["and", "but", "or", "nor", "so", "yet", "for"].into_iter().collect()
});

static PREPOSITIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "in", "on", "at", "by", "with", "about", "against", "between", "into",
        "through", "during", "before", "after", "above", "below", "to", "from",
        "up", "down", "of", "off", "over", "under", "as",
    ]
    .into_iter()
    .collect()
});

static PERSONAL_PRONOUNS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them"]
        .into_iter()
        .collect()
});

static POSSESSIVE_PRONOUNS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["my", "your", "his", "its", "our", "their", "mine", "yours", "ours", "theirs"]
        .into_iter()
        .collect()
});

static MODALS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["can", "could", "will", "would", "shall", "should", "may", "might", "must"]
        .into_iter()
        .collect()
});

static COMMON_VERBS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "be", "am", "is", "are", "was", "were", "been", "being", "have", "has",
        "had", "do", "does", "did", "go", "goes", "went", "get", "got", "make",
        "made", "say", "said", "see", "saw", "know", "knew",
    ]
    .into_iter()
    .collect()
});

static COMMON_ADVERBS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "not", "very", "too", "quite", "never", "always", "often", "sometimes",
        "here", "there", "now", "then", "also", "just", "still", "again",
    ]
    .into_iter()
    .collect()
});

/// Built-in lexicon- and rule-based natural-language toolkit.
///
/// Tagging and sentiment estimation are heuristic: adequate for short English
/// text, and deliberately simple. Non-English input gets whatever these rules
/// produce.
#[derive(Debug, Clone, Default)]
pub struct LexiconToolkit;

impl LexiconToolkit {
    /// Create a new lexicon toolkit.
    pub fn new() -> Self {
        Self
    }

    /// Reject input the engine cannot meaningfully process: non-whitespace
    /// ASCII control characters are treated as binary, not text.
    fn check_input(text: &str) -> ToolkitResult<()> {
        if text
            .chars()
            .any(|c| c.is_ascii_control() && !c.is_whitespace())
        {
            return Err(ToolkitError::UnsupportedInput {
                message: "input contains non-whitespace control characters".to_string(),
            });
        }
        Ok(())
    }

    /// Strip punctuation from both edges of a raw whitespace-delimited token.
    fn strip_token(raw: &str) -> &str {
        raw.trim_matches(|c: char| !c.is_alphanumeric())
    }

    /// Assign a Penn-style tag to a single token.
    fn tag_token(token: &str) -> &'static str {
        let lower = token.to_lowercase();

        if token.chars().all(|c| c.is_ascii_digit() || c == ',' || c == '.')
            && token.chars().any(|c| c.is_ascii_digit())
        {
            return "CD";
        }

        // Closed classes first; they dominate suffix shape.
        if DETERMINERS.contains(lower.as_str()) {
            return "DT";
        }
        if CONJUNCTIONS.contains(lower.as_str()) {
            return "CC";
        }
        if PREPOSITIONS.contains(lower.as_str()) {
            return "IN";
        }
        if PERSONAL_PRONOUNS.contains(lower.as_str()) {
            return "PRP";
        }
        if POSSESSIVE_PRONOUNS.contains(lower.as_str()) {
            return "PRP$";
        }
        if MODALS.contains(lower.as_str()) {
            return "MD";
        }
        if COMMON_VERBS.contains(lower.as_str()) {
            return "VB";
        }
        if COMMON_ADVERBS.contains(lower.as_str()) {
            return "RB";
        }

        // Proper-noun shape beats suffix rules for anything capitalized.
        if token.chars().next().is_some_and(|c| c.is_uppercase()) {
            return "NNP";
        }

        if lower.ends_with("ly") && lower.len() > 3 {
            return "RB";
        }
        if lower.ends_with("ing") && lower.len() > 4 {
            return "VBG";
        }
        if lower.ends_with("ed") && lower.len() > 3 {
            return "VBD";
        }
        if ["ful", "ous", "ive", "less", "ish", "able", "ible"]
            .iter()
            .any(|suffix| lower.ends_with(suffix) && lower.len() > suffix.len() + 1)
        {
            return "JJ";
        }
        if lower.ends_with('s')
            && !lower.ends_with("ss")
            && !lower.ends_with("us")
            && !lower.ends_with("is")
            && lower.len() > 3
        {
            return "NNS";
        }

        "NN"
    }
}

impl Toolkit for LexiconToolkit {
    fn tokenize_and_tag(&self, text: &str) -> ToolkitResult<Vec<TaggedToken>> {
        Self::check_input(text)?;

        let tagged: Vec<TaggedToken> = text
            .split_whitespace()
            .map(Self::strip_token)
            .filter(|token| !token.is_empty())
            .map(|token| TaggedToken::new(token, Self::tag_token(token)))
            .collect();

        debug!(tokens = tagged.len(), "Tokenized and tagged text");
        Ok(tagged)
    }

    fn estimate_sentiment(&self, text: &str) -> ToolkitResult<SentimentEstimate> {
        Self::check_input(text)?;

        let words: Vec<&str> = text
            .split_whitespace()
            .map(Self::strip_token)
            .filter(|token| !token.is_empty())
            .collect();

        if words.is_empty() {
            return Ok(SentimentEstimate {
                polarity: 0.0,
                subjectivity: 0.0,
            });
        }

        let lowered: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();

        let mut positive = 0.0;
        let mut negative = 0.0;
        let mut opinion_hits = 0usize;

        for (i, word) in lowered.iter().enumerate() {
            let word = word.as_str();

            let boosted = i > 0 && INTENSIFIERS.contains(lowered[i - 1].as_str());
            let weight = if boosted { INTENSIFIER_BOOST } else { 1.0 };

            let negated = (1..=NEGATION_WINDOW)
                .filter_map(|back| i.checked_sub(back))
                .any(|j| NEGATIONS.contains(lowered[j].as_str()));

            if POSITIVE_WORDS.contains(word) {
                if negated {
                    negative += weight;
                } else {
                    positive += weight;
                }
            } else if NEGATIVE_WORDS.contains(word) {
                if negated {
                    positive += weight;
                } else {
                    negative += weight;
                }
            }

            if POSITIVE_WORDS.contains(word)
                || NEGATIVE_WORDS.contains(word)
                || SUBJECTIVE_MARKERS.contains(word)
                || INTENSIFIERS.contains(word)
            {
                opinion_hits += 1;
            }
        }

        let total = positive + negative;
        let polarity = if total == 0.0 {
            0.0
        } else {
            ((positive - negative) / total).clamp(-1.0, 1.0)
        };

        let density = opinion_hits as f64 / words.len() as f64;
        let subjectivity = (density * SUBJECTIVITY_SCALE).clamp(0.0, 1.0);

        debug!(
            words = words.len(),
            polarity, subjectivity, "Estimated sentiment"
        );

        Ok(SentimentEstimate {
            polarity,
            subjectivity,
        })
    }
}
