use std::env;

use crate::error::AppError;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub logging: LoggingConfig,
    pub analysis: AnalysisConfig,
    pub console: ConsoleConfig,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Analysis pipeline configuration
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Maximum number of characters kept in the history preview of a text.
    pub preview_max_chars: usize,
}

/// Console front-end configuration
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub format: OutputFormat,
}

/// Console output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let logging = LoggingConfig {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .to_lowercase()
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        };

        let analysis = AnalysisConfig {
            preview_max_chars: match env::var("PREVIEW_MAX_CHARS") {
                Ok(s) => s.parse().map_err(|_| AppError::Config {
                    message: format!("PREVIEW_MAX_CHARS must be a positive integer, got '{}'", s),
                })?,
                Err(_) => AnalysisConfig::default().preview_max_chars,
            },
        };

        let console = ConsoleConfig {
            format: match env::var("OUTPUT_FORMAT")
                .unwrap_or_else(|_| "text".to_string())
                .to_lowercase()
                .as_str()
            {
                "json" => OutputFormat::Json,
                _ => OutputFormat::Text,
            },
        };

        Ok(Config {
            logging,
            analysis,
            console,
        })
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            preview_max_chars: 50,
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
        }
    }
}
