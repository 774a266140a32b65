// Error types for embedder configuration

use thiserror::Error;

/// Failures while building a loader from configuration.
///
/// The render path itself never fails: unknown or malformed references
/// degrade to a best-effort embed instead of surfacing an error.
#[derive(Debug, Error)]
pub enum EmbedError {
    /// Configuration is structurally valid JSON but semantically unusable
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Failed to parse the JSON configuration
    #[error("Parse error: {0}")]
    ParseError(String),

    /// A custom provider pattern is not a valid regex
    #[error("Invalid pattern for provider '{provider}': {source}")]
    InvalidPattern {
        provider: String,
        #[source]
        source: regex::Error,
    },

    /// Config file could not be read
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<serde_json::Error> for EmbedError {
    fn from(e: serde_json::Error) -> Self {
        Self::ParseError(e.to_string())
    }
}

impl From<std::io::Error> for EmbedError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_errors_become_parse_errors() {
        let err: EmbedError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, EmbedError::ParseError(_)));
        assert!(err.to_string().starts_with("Parse error:"));
    }

    #[test]
    fn invalid_pattern_names_the_provider() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = EmbedError::InvalidPattern {
            provider: "peertube".to_string(),
            source,
        };
        assert!(err.to_string().contains("'peertube'"));
    }
}
