//! Domain error types
//!
//! All errors are domain-specific and don't expose third-party types. The
//! external generator has its own error enum because its failures are
//! recovered locally (fallback to the rule path) rather than surfaced to
//! the caller.

use thiserror::Error;

/// Main Datalex error type
///
/// This is the primary error type used throughout the application.
#[derive(Debug, Error)]
pub enum DatalexError {
    /// Missing or empty required input field; surfaced immediately,
    /// never recovered silently
    #[error("Input validation error: {0}")]
    InputValidation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Term dictionary or PII pattern library failed to load; fatal at
    /// startup, the process cannot serve generation requests without it
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// External generator errors (recovered by falling back to rules)
    #[error("External generator error: {0}")]
    ExternalGenerator(#[from] ExternalGeneratorError),

    /// Review/dictionary store errors
    #[error("Store error: {0}")]
    Store(String),

    /// Batch processing errors (malformed CSV, missing headers)
    #[error("Batch error: {0}")]
    Batch(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// External generator errors
///
/// Timeouts, transport failures, and malformed responses all resolve to
/// the rule-based fallback; none of these abort a generation request.
#[derive(Debug, Error)]
pub enum ExternalGeneratorError {
    /// The remote call exceeded its deadline
    #[error("Request timed out after {0}s")]
    Timeout(u64),

    /// Transport-level failure (DNS, TLS, connection reset)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Provider returned a non-success status
    #[error("Provider returned status {status}: {message}")]
    Provider { status: u16, message: String },

    /// Response body did not match the expected contract
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// No endpoint or credentials configured
    #[error("External generation is not configured")]
    NotConfigured,
}

// Conversion from std::io::Error
impl From<std::io::Error> for DatalexError {
    fn from(err: std::io::Error) -> Self {
        DatalexError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for DatalexError {
    fn from(err: serde_json::Error) -> Self {
        DatalexError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for DatalexError {
    fn from(err: toml::de::Error) -> Self {
        DatalexError::Configuration(format!("TOML parse error: {err}"))
    }
}

// Conversion from csv errors
impl From<csv::Error> for DatalexError {
    fn from(err: csv::Error) -> Self {
        DatalexError::Batch(err.to_string())
    }
}

impl From<reqwest::Error> for ExternalGeneratorError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            // reqwest doesn't expose the configured deadline on the error
            ExternalGeneratorError::Timeout(0)
        } else {
            ExternalGeneratorError::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datalex_error_display() {
        let err = DatalexError::InputValidation("column_name must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "Input validation error: column_name must not be empty"
        );
    }

    #[test]
    fn test_external_error_conversion() {
        let ext_err = ExternalGeneratorError::MalformedResponse("not JSON".to_string());
        let err: DatalexError = ext_err.into();
        assert!(matches!(err, DatalexError::ExternalGenerator(_)));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DatalexError = io_err.into();
        assert!(matches!(err, DatalexError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: DatalexError = json_err.into();
        assert!(matches!(err, DatalexError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: DatalexError = toml_err.into();
        assert!(matches!(err, DatalexError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_provider_error_display() {
        let err = ExternalGeneratorError::Provider {
            status: 429,
            message: "rate limited".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Provider returned status 429: rate limited"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        let err = DatalexError::Dictionary("bad pattern".to_string());
        let _: &dyn std::error::Error = &err;

        let err = ExternalGeneratorError::NotConfigured;
        let _: &dyn std::error::Error = &err;
    }
}
