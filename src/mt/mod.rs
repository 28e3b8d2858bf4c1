/// Machine Translation Module
///
/// Language identification and translation through remote providers.
///
/// # Overview
///
/// 1. **MT Trait & Providers** - `MachineTranslator` with the Sarvam AI implementation
///    and a deterministic mock
/// 2. **Translation Client** - Fail-soft wrapper returning explicit outcome values
///    instead of errors
///
/// # Example
///
/// ```ignore
/// use indic_translate::mt::{SarvamProvider, TranslationClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = TranslationClient::new(SarvamProvider::from_env()?);
///     let outcome = client.translate("hello", "en-IN", "hi-IN", "formal", "Male").await;
///     println!("{}", outcome);
///     Ok(())
/// }
/// ```
pub mod client;
pub mod error;
pub mod mock;
pub mod sarvam;
pub mod translator;


pub use client::{TRANSLATION_ERROR_PREFIX, TranslationClient, TranslationOutcome};
pub use error::{MtError, MtResult};
pub use mock::{MockMode, MockTranslator};
pub use sarvam::SarvamProvider;
pub use translator::{LanguageIdentification, MachineTranslator, TranslationRequest};
