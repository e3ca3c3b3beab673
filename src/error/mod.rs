use thiserror::Error;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Toolkit error: {0}")]
    Toolkit(#[from] ToolkitError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Natural-language toolkit errors
#[derive(Debug, Error)]
pub enum ToolkitError {
    #[error("Unsupported input: {message}")]
    UnsupportedInput { message: String },

    #[error("Toolkit internal error: {message}")]
    Internal { message: String },
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for toolkit operations
pub type ToolkitResult<T> = Result<T, ToolkitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::Config {
            message: "missing key".to_string(),
        };
        assert_eq!(err.to_string(), "Configuration error: missing key");

        let err = AppError::Internal {
            message: "unexpected".to_string(),
        };
        assert_eq!(err.to_string(), "Internal error: unexpected");
    }

    #[test]
    fn test_toolkit_error_display() {
        let err = ToolkitError::UnsupportedInput {
            message: "control characters in input".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unsupported input: control characters in input"
        );

        let err = ToolkitError::Internal {
            message: "lexicon lookup failed".to_string(),
        };
        assert_eq!(err.to_string(), "Toolkit internal error: lexicon lookup failed");
    }

    #[test]
    fn test_toolkit_error_conversion_to_app_error() {
        let toolkit_err = ToolkitError::UnsupportedInput {
            message: "bad input".to_string(),
        };
        let app_err: AppError = toolkit_err.into();
        assert!(matches!(app_err, AppError::Toolkit(_)));
        assert!(app_err.to_string().contains("Unsupported input"));
    }

    #[test]
    fn test_io_error_conversion_to_app_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
    }
}
