//! Translation between Indian languages with Sarvam AI
//!
//! Local heuristics guess the speaker's grammatical gender and the register
//! of a text before it is sent for translation, so the provider can pick the
//! right verb agreement and tone.
//!
//! # Workflow Example
//!
//! ```ignore
//! use indic_translate::classifier::classify;
//! use indic_translate::mt::{SarvamProvider, TranslationClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let text = "क्या आप ठीक हैं?";
//!
//!     // 1. Guess gender and formality locally
//!     let guess = classify(text);
//!
//!     // 2. Identify the source language remotely
//!     let client = TranslationClient::new(SarvamProvider::from_env()?);
//!     let detected = client.detect_language(text).await;
//!
//!     // 3. Translate with the detected values
//!     let source = detected.as_ref().and_then(|d| d.language_code()).unwrap_or("hi-IN");
//!     let mode = guess.formality.map_or("formal", |f| f.as_str());
//!     let gender = guess.gender.map_or("Male", |g| g.as_str());
//!     let outcome = client.translate(text, source, "ta-IN", mode, gender).await;
//!
//!     println!("{}", outcome);
//!     Ok(())
//! }
//! ```

pub mod classifier;
pub mod config;
pub mod languages;
pub mod mt;
pub mod session;

// Re-export main types for convenient access
pub use classifier::{Classification, Formality, Gender, classify, detect_formality, detect_gender};
pub use config::Config;
pub use languages::get_supported_languages;
pub use mt::{MachineTranslator, TranslationClient, TranslationOutcome};
pub use session::Session;
