//! Rendering of analysis results, the history table, and the tag legend.

use std::io::{self, Write};

use crate::analysis::{pos, AnalysisResult};
use crate::config::OutputFormat;
use crate::history::SessionHistory;

/// Widest bar drawn in the POS histogram.
const MAX_BAR_WIDTH: usize = 30;

/// Render one analysis result.
pub fn render_result<W: Write>(
    out: &mut W,
    result: &AnalysisResult,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string(result).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
            writeln!(out, "{}", json)
        }
        OutputFormat::Text => {
            writeln!(out, "Sentiment:    {}", result.sentiment)?;
            writeln!(out, "Polarity:     {:.2}", result.polarity)?;
            writeln!(out, "Subjectivity: {:.2}", result.subjectivity)?;
            writeln!(
                out,
                "Words: {}   Sentences: {}",
                result.word_count, result.sentence_count
            )?;

            if !result.pos_counts.is_empty() {
                writeln!(out, "Parts of speech:")?;
                let max = result.pos_counts.values().copied().max().unwrap_or(1);
                for (tag, count) in &result.pos_counts {
                    let width = (*count as usize * MAX_BAR_WIDTH / max as usize).max(1);
                    writeln!(out, "  {:<5} {:>3} {}", tag, count, "#".repeat(width))?;
                }
            }
            Ok(())
        }
    }
}

/// Render the session history as a table (or JSON array).
pub fn render_history<W: Write>(
    out: &mut W,
    history: &SessionHistory,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string(history.snapshot()).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
            writeln!(out, "{}", json)
        }
        OutputFormat::Text => {
            if history.is_empty() {
                return writeln!(out, "No analyses recorded yet.");
            }

            writeln!(out, "Previous analyses:")?;
            writeln!(out, "{:>3}  {:<53}  {:<9}  {:>8}", "#", "Text", "Sentiment", "Polarity")?;
            for (index, entry) in history.snapshot().iter().enumerate() {
                writeln!(
                    out,
                    "{:>3}  {:<53}  {:<9}  {:>8.2}",
                    index + 1,
                    entry.text_preview,
                    entry.sentiment.to_string(),
                    entry.polarity
                )?;
            }
            Ok(())
        }
    }
}

/// Render the part-of-speech tag legend.
pub fn render_legend<W: Write>(out: &mut W, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            let entries: Vec<_> = pos::tag_legend()
                .iter()
                .map(|(tag, description)| {
                    serde_json::json!({ "tag": tag, "description": description })
                })
                .collect();
            let json = serde_json::to_string(&entries).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
            writeln!(out, "{}", json)
        }
        OutputFormat::Text => {
            writeln!(out, "Common POS tags:")?;
            for (tag, description) in pos::tag_legend() {
                writeln!(out, "  {:<5} {}", tag, description)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Analyzer;
    use crate::toolkit::LexiconToolkit;

    fn render_to_string<F>(render: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buffer = Vec::new();
        render(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_render_result_text() {
        let result = Analyzer::new(LexiconToolkit::new()).analyze("I love sunny days!");
        let output =
            render_to_string(|out| render_result(out, &result, OutputFormat::Text));

        assert!(output.contains("Sentiment:    Positive"));
        assert!(output.contains("Words: 4   Sentences: 1"));
        assert!(output.contains("Parts of speech:"));
        assert!(output.contains('#'));
    }

    #[test]
    fn test_render_result_json_is_parseable() {
        let result = Analyzer::new(LexiconToolkit::new()).analyze("Fine.");
        let output =
            render_to_string(|out| render_result(out, &result, OutputFormat::Json));

        let value: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
        assert_eq!(value["word_count"], 1);
    }

    #[test]
    fn test_render_empty_history() {
        let history = SessionHistory::new();
        let output =
            render_to_string(|out| render_history(out, &history, OutputFormat::Text));

        assert!(output.contains("No analyses recorded yet."));
    }

    #[test]
    fn test_render_history_rows() {
        let analyzer = Analyzer::new(LexiconToolkit::new());
        let mut history = SessionHistory::new();
        history.append(analyzer.analyze("I love this").to_history_entry());
        history.append(analyzer.analyze("I hate this").to_history_entry());

        let output =
            render_to_string(|out| render_history(out, &history, OutputFormat::Text));

        assert!(output.contains("Previous analyses:"));
        assert!(output.contains("I love this"));
        assert!(output.contains("Positive"));
        assert!(output.contains("Negative"));
    }

    #[test]
    fn test_render_legend_lists_tags() {
        let output = render_to_string(|out| render_legend(out, OutputFormat::Text));
        assert!(output.contains("NN"));
        assert!(output.contains("Noun"));
        assert!(output.contains("Adverb"));
    }
}
