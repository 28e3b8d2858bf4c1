//! Languages accepted by the Sarvam translation and language-identification APIs
//!
//! English plus the 22 scheduled languages of India, keyed by their
//! English name. Codes carry the `-IN` region suffix the provider expects.

/// Language name and provider code, in display order
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("Assamese", "as-IN"),
    ("Bengali", "bn-IN"),
    ("Bodo", "brx-IN"),
    ("Dogri", "doi-IN"),
    ("English", "en-IN"),
    ("Gujarati", "gu-IN"),
    ("Hindi", "hi-IN"),
    ("Kannada", "kn-IN"),
    ("Kashmiri", "ks-IN"),
    ("Konkani", "kok-IN"),
    ("Maithili", "mai-IN"),
    ("Malayalam", "ml-IN"),
    ("Manipuri", "mni-IN"),
    ("Marathi", "mr-IN"),
    ("Nepali", "ne-IN"),
    ("Odia", "od-IN"),
    ("Punjabi", "pa-IN"),
    ("Sanskrit", "sa-IN"),
    ("Santali", "sat-IN"),
    ("Sindhi", "sd-IN"),
    ("Tamil", "ta-IN"),
    ("Telugu", "te-IN"),
    ("Urdu", "ur-IN"),
];

pub fn get_supported_languages() -> &'static [(&'static str, &'static str)] {
    SUPPORTED_LANGUAGES
}

/// Look up the language name for a provider code
pub fn name_for_code(code: &str) -> Option<&'static str> {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(_, c)| *c == code)
        .map(|(name, _)| *name)
}
