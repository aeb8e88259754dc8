use thiserror::Error;

/// Application-wide error types for Hermes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or malformed configuration. Fatal at startup, never produced
    /// while serving a request.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Input rejected before any network call. Carries the human-readable
    /// reason verbatim.
    #[error("{0}")]
    ValidationError(String),

    /// Non-success HTTP status or other HTTP-level failure.
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Network/connection error.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Request timed out. Treated as an ordinary failure, never retried.
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// LLM API call failed.
    #[error("LLM error (HTTP {status_code}): {message}")]
    LlmError { message: String, status_code: u16 },

    /// Provider reply could not be interpreted as the expected structure.
    /// Reported distinctly from transport failures.
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl AppError {
    /// True if the outbound call itself failed, as opposed to the input
    /// being rejected or the reply being uninterpretable.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            AppError::HttpError(_)
                | AppError::NetworkError(_)
                | AppError::Timeout(_)
                | AppError::LlmError { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_reason_surfaces_verbatim() {
        let err = AppError::ValidationError("Question text must be at least 10 characters long".into());
        assert_eq!(
            err.to_string(),
            "Question text must be at least 10 characters long"
        );
    }

    #[test]
    fn llm_error_reports_status() {
        let err = AppError::LlmError {
            message: "overloaded".into(),
            status_code: 503,
        };
        assert_eq!(err.to_string(), "LLM error (HTTP 503): overloaded");
        assert!(err.is_transport());
    }

    #[test]
    fn parse_error_is_not_transport() {
        assert!(!AppError::ParseError("bad json".into()).is_transport());
        assert!(!AppError::ValidationError("empty".into()).is_transport());
        assert!(AppError::Timeout(30).is_transport());
    }
}
