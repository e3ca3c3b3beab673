//! # Text Sentiment Analyzer
//!
//! On-demand analysis of free-form text: normalization, lexical statistics,
//! part-of-speech distribution, and sentiment scoring, with a per-session
//! running history of analyses.
//!
//! ## Features
//!
//! - **Text Normalization**: ASCII-letter filtering and case folding
//! - **Lexical Statistics**: word and sentence counts from the raw text
//! - **POS Distribution**: part-of-speech tag histogram via a pluggable toolkit
//! - **Sentiment Scoring**: polarity/subjectivity estimation with a 3-way category
//! - **Session History**: append-only, deduplicating log of analysis results
//!
//! ## Architecture
//!
//! ```text
//! Console (stdin/stdout) → Analyzer → Toolkit (lexicon-backed)
//!                             ↓
//!                      SessionHistory (in-memory)
//! ```
//!
//! Toolkit failures never fail an analysis: POS tagging degrades to an empty
//! histogram and sentiment degrades to a neutral fallback, both logged.
//!
//! ## Example
//!
//! ```
//! use text_sentiment::analysis::Analyzer;
//! use text_sentiment::history::SessionHistory;
//! use text_sentiment::toolkit::LexiconToolkit;
//!
//! let analyzer = Analyzer::new(LexiconToolkit::new());
//! let mut history = SessionHistory::new();
//!
//! let result = analyzer.analyze("I love sunny days!");
//! assert!(result.polarity > 0.0);
//!
//! history.append(result.to_history_entry());
//! assert_eq!(history.len(), 1);
//! ```

#![warn(missing_docs)]

/// Text analytics pipeline (normalizer, lexical stats, POS, sentiment, orchestrator).
pub mod analysis;
/// Configuration management for the analyzer.
pub mod config;
/// Interactive console front-end over stdin/stdout.
pub mod console;
/// Error types and result aliases for the application.
pub mod error;
/// Session-scoped history of analysis results.
pub mod history;
/// Natural-language toolkit boundary and the built-in lexicon implementation.
pub mod toolkit;

pub use analysis::{AnalysisResult, Analyzer, SentimentCategory};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use history::{HistoryEntry, SessionHistory};
pub use toolkit::{LexiconToolkit, Toolkit};
