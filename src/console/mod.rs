//! Interactive console front-end.
//!
//! A line-oriented loop over stdin/stdout: each non-empty line is either a
//! command (`:history`, `:tags`, `:quit`) or a text to analyze. Results are
//! rendered immediately and recorded in the session history.

/// Rendering of results, the history table, and the tag legend.
pub mod render;

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::analysis::Analyzer;
use crate::config::OutputFormat;
use crate::error::AppResult;
use crate::history::SessionHistory;
use crate::toolkit::Toolkit;

/// Console session driving the analyzer from line input.
pub struct Console<T: Toolkit> {
    analyzer: Analyzer<T>,
    history: SessionHistory,
    format: OutputFormat,
}

impl<T: Toolkit> Console<T> {
    /// Create a console over an analyzer and a fresh session history.
    ///
    /// The history is created by the caller at session start and dropped with
    /// the console when the session ends.
    pub fn new(analyzer: Analyzer<T>, history: SessionHistory, format: OutputFormat) -> Self {
        Self {
            analyzer,
            history,
            format,
        }
    }

    /// The session history accumulated so far.
    pub fn history(&self) -> &SessionHistory {
        &self.history
    }

    /// Run the console loop until EOF or `:quit`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> AppResult<()> {
        info!(session_id = %self.history.id(), "Console session started");

        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();

            if trimmed.is_empty() {
                continue;
            }

            match trimmed {
                ":quit" | ":exit" => {
                    info!(session_id = %self.history.id(), "Console session closed");
                    break;
                }
                ":history" => {
                    render::render_history(&mut output, &self.history, self.format)?;
                }
                ":tags" => {
                    render::render_legend(&mut output, self.format)?;
                }
                text => {
                    debug!(chars = text.len(), "Analyzing input line");
                    let result = self.analyzer.analyze(text);
                    render::render_result(&mut output, &result, self.format)?;
                    self.history.append(result.to_history_entry());
                }
            }

            output.flush()?;
        }

        info!(
            session_id = %self.history.id(),
            analyses = self.history.len(),
            "Console session finished"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolkit::LexiconToolkit;

    fn console() -> Console<LexiconToolkit> {
        Console::new(
            Analyzer::new(LexiconToolkit::new()),
            SessionHistory::new(),
            OutputFormat::Text,
        )
    }

    fn run_lines(console: &mut Console<LexiconToolkit>, input: &str) -> String {
        let mut output = Vec::new();
        console.run(input.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_analyzes_each_line() {
        let mut console = console();
        let output = run_lines(&mut console, "I love this\nI hate this\n");

        assert!(output.contains("Positive"));
        assert!(output.contains("Negative"));
        assert_eq!(console.history().len(), 2);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let mut console = console();
        run_lines(&mut console, "\n   \n\n");
        assert!(console.history().is_empty());
    }

    #[test]
    fn test_quit_stops_before_later_lines() {
        let mut console = console();
        run_lines(&mut console, ":quit\nI love this\n");
        assert!(console.history().is_empty());
    }

    #[test]
    fn test_history_command_renders_table() {
        let mut console = console();
        let output = run_lines(&mut console, "I love this\n:history\n");

        assert!(output.contains("Previous analyses:"));
        assert!(output.contains("I love this"));
        // The command itself is not recorded as an analysis.
        assert_eq!(console.history().len(), 1);
    }

    #[test]
    fn test_tags_command_renders_legend() {
        let mut console = console();
        let output = run_lines(&mut console, ":tags\n");
        assert!(output.contains("Common POS tags:"));
    }

    #[test]
    fn test_repeated_line_deduplicated_in_history() {
        let mut console = console();
        run_lines(&mut console, "same line\nsame line\n");
        assert_eq!(console.history().len(), 1);
    }
}
