//! Fail-soft front end over a [`MachineTranslator`]
//!
//! Provider errors never escape this type. Translation failures come back as
//! [`TranslationOutcome::Failed`] with a message starting with
//! `Translation error:`, and identification failures as `None`, so the
//! interactive loop can print them and carry on.

use crate::mt::error::MtError;
use crate::mt::translator::{LanguageIdentification, MachineTranslator, TranslationRequest};
use std::fmt;
use tracing::{debug, warn};

/// Prefix of every failure message
pub const TRANSLATION_ERROR_PREFIX: &str = "Translation error:";

/// What a translation call produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationOutcome {
    Translated(String),
    /// Human readable, starts with [`TRANSLATION_ERROR_PREFIX`]
    Failed(String),
}

impl TranslationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, TranslationOutcome::Translated(_))
    }

    /// The translated text or the error message
    pub fn as_str(&self) -> &str {
        match self {
            TranslationOutcome::Translated(text) | TranslationOutcome::Failed(text) => text,
        }
    }
}

impl fmt::Display for TranslationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render a provider error as a `Translation error: ...` message
pub fn failure_message(err: &MtError) -> String {
    match err {
        // Already carries the prefix through Display
        MtError::TranslationError(_) => err.to_string(),
        other => format!("{} {}", TRANSLATION_ERROR_PREFIX, other),
    }
}

pub struct TranslationClient {
    translator: Box<dyn MachineTranslator>,
}

impl TranslationClient {
    pub fn new<T>(translator: T) -> Self
    where
        T: MachineTranslator + 'static,
    {
        Self {
            translator: Box::new(translator),
        }
    }

    pub fn provider_name(&self) -> &str {
        self.translator.provider_name()
    }

    /// Identify the language of `text`, or `None` if the provider failed
    pub async fn detect_language(&self, text: &str) -> Option<LanguageIdentification> {
        match self.translator.identify_language(text).await {
            Ok(detected) => {
                debug!(?detected, "language identified");
                Some(detected)
            }
            Err(err) => {
                warn!(provider = self.provider_name(), "language detection failed: {}", err);
                None
            }
        }
    }

    /// Translate `text`; all arguments are forwarded unchanged
    pub async fn translate(
        &self,
        text: &str,
        source_language_code: &str,
        target_language_code: &str,
        mode: &str,
        speaker_gender: &str,
    ) -> TranslationOutcome {
        let request = TranslationRequest::new(
            text,
            source_language_code,
            target_language_code,
            mode,
            speaker_gender,
        );

        match self.translator.translate(&request).await {
            Ok(translated) => TranslationOutcome::Translated(translated),
            Err(err) => {
                warn!(provider = self.provider_name(), "translation failed: {}", err);
                TranslationOutcome::Failed(failure_message(&err))
            }
        }
    }
}

impl fmt::Debug for TranslationClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslationClient")
            .field("provider", &self.provider_name())
            .finish()
    }
}
