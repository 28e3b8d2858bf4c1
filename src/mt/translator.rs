//! Machine Translation trait and request types
//!
//! This module defines the `MachineTranslator` trait for provider abstraction,
//! so the interactive session can run against Sarvam AI or an offline mock
//! without knowing which one it has.
//!
//! # Example
//!
//! ```ignore
//! use indic_translate::mt::{MachineTranslator, SarvamProvider, TranslationRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = SarvamProvider::from_env()?;
//!
//!     let detected = provider.identify_language("नमस्ते, आप कैसे हैं?").await?;
//!     println!("{:?}", detected.language_code); // Some("hi-IN")
//!
//!     let request = TranslationRequest::new("नमस्ते", "hi-IN", "ta-IN", "formal", "Male");
//!     println!("{}", provider.translate(&request).await?);
//!     Ok(())
//! }
//! ```

use crate::mt::error::MtResult;
use async_trait::async_trait;
use serde::Deserialize;

/// One translation call. Every field is forwarded verbatim; the provider
/// decides whether codes, mode and gender are acceptable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    /// Source language code (e.g. "hi-IN")
    pub source_language_code: String,
    /// Target language code (e.g. "ta-IN")
    pub target_language_code: String,
    /// Register, usually "formal" or "informal"
    pub mode: String,
    /// "Male" or "Female"
    pub speaker_gender: String,
}

impl TranslationRequest {
    pub fn new(
        text: &str,
        source_language_code: &str,
        target_language_code: &str,
        mode: &str,
        speaker_gender: &str,
    ) -> Self {
        Self {
            text: text.to_string(),
            source_language_code: source_language_code.to_string(),
            target_language_code: target_language_code.to_string(),
            mode: mode.to_string(),
            speaker_gender: speaker_gender.to_string(),
        }
    }
}

/// Result of language identification
///
/// Either field may be absent when the provider cannot decide.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LanguageIdentification {
    #[serde(default)]
    pub language_code: Option<String>,
    #[serde(default)]
    pub script_code: Option<String>,
}

impl LanguageIdentification {
    /// The detected language code, if the provider returned a non-empty one
    pub fn language_code(&self) -> Option<&str> {
        self.language_code.as_deref().filter(|code| !code.is_empty())
    }
}

/// Generic trait for machine translation providers
///
/// Implementations handle the actual work, whether through an API (Sarvam)
/// or deterministic logic (Mock). Methods are async so network-backed
/// providers can await their requests.
#[async_trait]
pub trait MachineTranslator: Send + Sync {
    /// Identify the language and script of `text`
    async fn identify_language(&self, text: &str) -> MtResult<LanguageIdentification>;

    /// Translate according to `request`
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The translated text
    /// * `Err(MtError)` - If the provider could not be reached or refused the request
    async fn translate(&self, request: &TranslationRequest) -> MtResult<String>;

    /// Get the name of this translation provider
    ///
    /// Used for logging to identify which provider handled a request.
    fn provider_name(&self) -> &str;
}
