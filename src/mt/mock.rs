//! Mock Machine Translator for testing
//!
//! This module provides a deterministic, API-free translator for testing the
//! interactive session without an API key or network access. The binary
//! exposes it through `--mock`.
//!
//! # Example
//!
//! ```ignore
//! use indic_translate::mt::{MachineTranslator, MockMode, MockTranslator, TranslationRequest};
//!
//! #[tokio::test]
//! async fn test_translation() {
//!     let mock = MockTranslator::new(MockMode::Suffix);
//!     let request = TranslationRequest::new("hello", "en-IN", "hi-IN", "formal", "Male");
//!     assert_eq!(mock.translate(&request).await.unwrap(), "hello_hi-IN");
//! }
//! ```

use crate::mt::error::{MtError, MtResult};
use crate::mt::translator::{LanguageIdentification, MachineTranslator, TranslationRequest};
use async_trait::async_trait;
use std::collections::HashMap;

/// Mock translation modes for testing different scenarios
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Append target code: "hello" → "hello_hi-IN"
    Suffix,

    /// Use predefined mappings for realistic translations
    /// (text, target_language_code) → translation
    Mappings(HashMap<(String, String), String>),

    /// Simulate API errors for both identification and translation
    Error(String),

    /// No-op: return input unchanged
    NoOp,
}

/// Mock translator that simulates various translation scenarios
#[derive(Debug, Clone)]
pub struct MockTranslator {
    mode: MockMode,
    /// What `identify_language` reports
    detected: LanguageIdentification,
}

impl MockTranslator {
    /// Create a new MockTranslator that cannot identify any language
    pub fn new(mode: MockMode) -> Self {
        Self {
            mode,
            detected: LanguageIdentification::default(),
        }
    }

    /// Report `language_code` from `identify_language`
    pub fn with_detected_language(mut self, language_code: &str) -> Self {
        self.detected = LanguageIdentification {
            language_code: Some(language_code.to_string()),
            script_code: None,
        };
        self
    }

    /// Apply translation logic based on the mode
    fn apply_translation(&self, request: &TranslationRequest) -> MtResult<String> {
        let text = &request.text;
        let target = &request.target_language_code;

        match &self.mode {
            MockMode::Suffix => Ok(format!("{}_{}", text, target)),
            MockMode::Mappings(map) => {
                let key = (text.to_string(), target.to_string());
                Ok(map
                    .get(&key)
                    .cloned()
                    .unwrap_or_else(|| format!("{}_{}", text, target)))
            }
            MockMode::Error(msg) => Err(MtError::TranslationError(msg.clone())),
            MockMode::NoOp => Ok(text.to_string()),
        }
    }
}

#[async_trait]
impl MachineTranslator for MockTranslator {
    async fn identify_language(&self, _text: &str) -> MtResult<LanguageIdentification> {
        match &self.mode {
            MockMode::Error(msg) => Err(MtError::LanguageDetectionError(msg.clone())),
            _ => Ok(self.detected.clone()),
        }
    }

    async fn translate(&self, request: &TranslationRequest) -> MtResult<String> {
        self.apply_translation(request)
    }

    fn provider_name(&self) -> &str {
        "Mock Translator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(text: &str, target: &str) -> TranslationRequest {
        TranslationRequest::new(text, "en-IN", target, "formal", "Male")
    }

    // ========== Suffix Mode Tests ==========

    #[tokio::test]
    async fn test_suffix_translation() {
        let mock = MockTranslator::new(MockMode::Suffix);
        let result = mock.translate(&request("hello", "hi-IN")).await.unwrap();
        assert_eq!(result, "hello_hi-IN");
    }

    #[tokio::test]
    async fn test_suffix_different_targets() {
        let mock = MockTranslator::new(MockMode::Suffix);
        assert_eq!(mock.translate(&request("hi", "ta-IN")).await.unwrap(), "hi_ta-IN");
        assert_eq!(mock.translate(&request("hi", "bn-IN")).await.unwrap(), "hi_bn-IN");
    }

    // ========== Mapping Mode Tests ==========

    #[tokio::test]
    async fn test_mapping_translation() {
        let mut map = HashMap::new();
        map.insert(
            ("hello".to_string(), "hi-IN".to_string()),
            "नमस्ते".to_string(),
        );

        let mock = MockTranslator::new(MockMode::Mappings(map));
        let result = mock.translate(&request("hello", "hi-IN")).await.unwrap();
        assert_eq!(result, "नमस्ते");
    }

    #[tokio::test]
    async fn test_mapping_fallback_to_suffix() {
        let mock = MockTranslator::new(MockMode::Mappings(HashMap::new()));
        let result = mock.translate(&request("unknown", "hi-IN")).await.unwrap();
        assert_eq!(result, "unknown_hi-IN");
    }

    // ========== Error Mode Tests ==========

    #[tokio::test]
    async fn test_error_mode_returns_error() {
        let mock = MockTranslator::new(MockMode::Error("API unavailable".to_string()));
        match mock.translate(&request("hello", "hi-IN")).await {
            Err(MtError::TranslationError(msg)) => assert_eq!(msg, "API unavailable"),
            _ => panic!("Expected TranslationError"),
        }
    }

    #[tokio::test]
    async fn test_error_mode_fails_identification() {
        let mock = MockTranslator::new(MockMode::Error("down".to_string()))
            .with_detected_language("hi-IN");
        assert!(matches!(
            mock.identify_language("नमस्ते").await,
            Err(MtError::LanguageDetectionError(_))
        ));
    }

    // ========== NoOp Mode Tests ==========

    #[tokio::test]
    async fn test_noop_returns_unchanged() {
        let mock = MockTranslator::new(MockMode::NoOp);
        let result = mock.translate(&request("Hello world", "hi-IN")).await.unwrap();
        assert_eq!(result, "Hello world");
    }

    // ========== Identification Tests ==========

    #[tokio::test]
    async fn test_identification_default_is_empty() {
        let mock = MockTranslator::new(MockMode::Suffix);
        let detected = mock.identify_language("anything").await.unwrap();
        assert_eq!(detected.language_code(), None);
    }

    #[tokio::test]
    async fn test_identification_configured() {
        let mock = MockTranslator::new(MockMode::Suffix).with_detected_language("ta-IN");
        let detected = mock.identify_language("வணக்கம்").await.unwrap();
        assert_eq!(detected.language_code(), Some("ta-IN"));
    }

    #[test]
    fn test_provider_name() {
        let mock = MockTranslator::new(MockMode::Suffix);
        assert_eq!(mock.provider_name(), "Mock Translator");
    }
}
