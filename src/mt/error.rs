/// Error types for the Machine Translation module
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MtError {
    /// Missing or unusable configuration, or a request the provider rejected (4xx)
    ConfigError(String),
    /// Transport failure: connection refused, DNS, TLS, timeout
    NetworkError(String),
    /// Error during language identification
    LanguageDetectionError(String),
    /// Error during translation phase
    TranslationError(String),
    /// Provider answered with a body that could not be read
    InvalidResponse(String),
    /// General error with context
    Other(String),
}

impl std::fmt::Display for MtError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MtError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            MtError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            MtError::LanguageDetectionError(msg) => {
                write!(f, "Language detection error: {}", msg)
            }
            MtError::TranslationError(msg) => write!(f, "Translation error: {}", msg),
            MtError::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
            MtError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for MtError {}

impl From<reqwest::Error> for MtError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            MtError::InvalidResponse(err.to_string())
        } else {
            MtError::NetworkError(err.to_string())
        }
    }
}

/// Result type for MT operations
pub type MtResult<T> = Result<T, MtError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        assert_eq!(
            MtError::ConfigError("SARVAM_API_KEY not set".to_string()).to_string(),
            "Configuration error: SARVAM_API_KEY not set"
        );
        assert_eq!(
            MtError::TranslationError("bad code".to_string()).to_string(),
            "Translation error: bad code"
        );
        assert_eq!(MtError::Other("plain".to_string()).to_string(), "plain");
    }
}
