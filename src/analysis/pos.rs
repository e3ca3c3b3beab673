//! Part-of-speech distribution building.

use std::collections::BTreeMap;

use tracing::warn;

use crate::toolkit::Toolkit;

/// Legend for the tags the built-in toolkit emits, in display order.
const TAG_LEGEND: &[(&str, &str)] = &[
    ("NN", "Noun"),
    ("NNS", "Plural noun"),
    ("NNP", "Proper noun"),
    ("VB", "Verb"),
    ("VBD", "Past-tense verb"),
    ("VBG", "Gerund or present participle"),
    ("JJ", "Adjective"),
    ("RB", "Adverb"),
    ("DT", "Determiner"),
    ("IN", "Preposition"),
    ("CC", "Conjunction"),
    ("PRP", "Personal pronoun"),
    ("PRP$", "Possessive pronoun"),
    ("MD", "Modal"),
    ("CD", "Cardinal number"),
];

/// Build a tag-frequency histogram for the text.
///
/// Delegates tagging to the toolkit on the original (non-normalized) text,
/// since tagging relies on capitalization and punctuation cues. The
/// distribution is best-effort: on any toolkit error the failure is logged
/// and an empty map is returned so the rest of the pipeline proceeds.
/// Whitespace-only input returns an empty map without invoking the toolkit.
pub fn build_distribution<T: Toolkit + ?Sized>(toolkit: &T, text: &str) -> BTreeMap<String, u32> {
    if text.trim().is_empty() {
        return BTreeMap::new();
    }

    match toolkit.tokenize_and_tag(text) {
        Ok(tagged) => {
            let mut counts = BTreeMap::new();
            for token in tagged {
                *counts.entry(token.tag).or_insert(0) += 1;
            }
            counts
        }
        Err(e) => {
            warn!(error = %e, "POS tagging failed, returning empty distribution");
            BTreeMap::new()
        }
    }
}

/// Human-readable description of a part-of-speech tag, if known.
pub fn describe_tag(tag: &str) -> Option<&'static str> {
    TAG_LEGEND
        .iter()
        .find(|(name, _)| *name == tag)
        .map(|(_, description)| *description)
}

/// The known tags with their descriptions, in display order.
pub fn tag_legend() -> &'static [(&'static str, &'static str)] {
    TAG_LEGEND
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ToolkitError;
    use crate::toolkit::{LexiconToolkit, MockToolkit, TaggedToken};

    #[test]
    fn test_distribution_counts_tags() {
        let mut toolkit = MockToolkit::new();
        toolkit.expect_tokenize_and_tag().returning(|_| {
            Ok(vec![
                TaggedToken::new("the", "DT"),
                TaggedToken::new("quick", "JJ"),
                TaggedToken::new("brown", "JJ"),
                TaggedToken::new("fox", "NN"),
            ])
        });

        let counts = build_distribution(&toolkit, "The quick brown fox");
        assert_eq!(counts.get("JJ"), Some(&2));
        assert_eq!(counts.get("DT"), Some(&1));
        assert_eq!(counts.get("NN"), Some(&1));
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn test_empty_input_skips_toolkit() {
        let mut toolkit = MockToolkit::new();
        toolkit.expect_tokenize_and_tag().times(0);

        assert!(build_distribution(&toolkit, "   \n ").is_empty());
    }

    #[test]
    fn test_toolkit_failure_degrades_to_empty() {
        let mut toolkit = MockToolkit::new();
        toolkit.expect_tokenize_and_tag().returning(|_| {
            Err(ToolkitError::Internal {
                message: "model data missing".to_string(),
            })
        });

        assert!(build_distribution(&toolkit, "some text").is_empty());
    }

    #[test]
    fn test_distribution_with_lexicon_toolkit() {
        let toolkit = LexiconToolkit::new();
        let counts = build_distribution(&toolkit, "The sun shines brightly.");

        assert_eq!(counts.get("DT"), Some(&1));
        assert_eq!(counts.get("RB"), Some(&1));
        assert_eq!(counts.values().sum::<u32>(), 4);
    }

    #[test]
    fn test_describe_tag() {
        assert_eq!(describe_tag("NN"), Some("Noun"));
        assert_eq!(describe_tag("PRP$"), Some("Possessive pronoun"));
        assert_eq!(describe_tag("XYZ"), None);
    }

    #[test]
    fn test_legend_is_nonempty_and_unique() {
        let legend = tag_legend();
        assert!(!legend.is_empty());

        let mut names: Vec<&str> = legend.iter().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), legend.len());
    }
}
