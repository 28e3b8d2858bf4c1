//! Provider configuration read from the process environment
//!
//! `SARVAM_API_KEY` is required. `SARVAM_API_URL`, `SARVAM_TRANSLATE_MODEL`
//! and `SARVAM_NUMERALS_FORMAT` override the defaults below. The binary loads
//! a `.env` file before reading these, so they can live there too.

use crate::mt::error::{MtError, MtResult};

pub const API_KEY_VAR: &str = "SARVAM_API_KEY";
pub const API_URL_VAR: &str = "SARVAM_API_URL";
pub const MODEL_VAR: &str = "SARVAM_TRANSLATE_MODEL";
pub const NUMERALS_FORMAT_VAR: &str = "SARVAM_NUMERALS_FORMAT";

pub const DEFAULT_BASE_URL: &str = "https://api.sarvam.ai";
pub const DEFAULT_MODEL: &str = "sarvam-translate:v1";
pub const DEFAULT_NUMERALS_FORMAT: &str = "native";

#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Subscription key sent with every request
    pub api_key: String,
    /// API root without trailing slash
    pub base_url: String,
    /// Translation model identifier
    pub model: String,
    /// "native" or "international" digits in the output
    pub numerals_format: String,
    /// Let the provider normalise input before translating
    pub enable_preprocessing: bool,
}

impl Config {
    /// Configuration with default provider settings and the given key
    pub fn new(api_key: &str) -> MtResult<Self> {
        if api_key.trim().is_empty() {
            return Err(MtError::ConfigError("API key cannot be empty".to_string()));
        }

        Ok(Self {
            api_key: api_key.trim().to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            numerals_format: DEFAULT_NUMERALS_FORMAT.to_string(),
            enable_preprocessing: false,
        })
    }

    pub fn from_env() -> MtResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup
    ///
    /// Blank optional values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> MtResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR).ok_or_else(|| {
            MtError::ConfigError(format!("{} not found in environment variables", API_KEY_VAR))
        })?;
        let mut config = Self::new(&api_key)?;

        let optional = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        if let Some(url) = optional(API_URL_VAR) {
            config = config.with_base_url(&url);
        }
        if let Some(model) = optional(MODEL_VAR) {
            config.model = model.trim().to_string();
        }
        if let Some(format) = optional(NUMERALS_FORMAT_VAR) {
            config.numerals_format = format.trim().to_string();
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim().trim_end_matches('/').to_string();
        self
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("numerals_format", &self.numerals_format)
            .field("enable_preprocessing", &self.enable_preprocessing)
            .finish()
    }
}
