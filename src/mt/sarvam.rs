//! Sarvam AI provider for language identification and translation
//!
//! This module talks to the Sarvam REST API (`/text-lid` and `/translate`).
//!
//! # Authentication
//!
//! Every request carries the subscription key in the `api-subscription-key`
//! header. The key is read from the `SARVAM_API_KEY` environment variable by
//! [`SarvamProvider::from_env`], see [`crate::config`].
//!
//! # Example
//!
//! ```ignore
//! use indic_translate::mt::{MachineTranslator, SarvamProvider, TranslationRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = SarvamProvider::from_env()?;
//!     let request = TranslationRequest::new("How are you?", "en-IN", "hi-IN", "formal", "Female");
//!     println!("{}", provider.translate(&request).await?);
//!     Ok(())
//! }
//! ```

use crate::config::Config;
use crate::mt::error::{MtError, MtResult};
use crate::mt::translator::{LanguageIdentification, MachineTranslator, TranslationRequest};
use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::debug;

/// Header carrying the subscription key
const AUTH_HEADER: &str = "api-subscription-key";

/// Sarvam AI API provider
///
/// Holds one HTTP client for the lifetime of the provider. No retries and no
/// timeout beyond the HTTP client's defaults.
#[derive(Clone)]
pub struct SarvamProvider {
    config: Config,
    client: reqwest::Client,
}

impl SarvamProvider {
    pub fn new(config: Config) -> MtResult<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| MtError::NetworkError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Create a provider from `SARVAM_API_KEY` and friends
    pub fn from_env() -> MtResult<Self> {
        Self::new(Config::from_env()?)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url, path.trim_start_matches('/'))
    }

    /// Request body for `/translate`
    fn translate_body(&self, request: &TranslationRequest) -> Value {
        json!({
            "input": request.text,
            "source_language_code": request.source_language_code,
            "target_language_code": request.target_language_code,
            "speaker_gender": request.speaker_gender,
            "mode": request.mode,
            "model": self.config.model,
            "numerals_format": self.config.numerals_format,
            "enable_preprocessing": self.config.enable_preprocessing,
        })
    }

    /// POST `body` and return the raw response text
    ///
    /// 4xx responses become `ConfigError`; anything else unsuccessful is
    /// built with `server_error`.
    async fn post(
        &self,
        path: &str,
        body: &Value,
        server_error: fn(String) -> MtError,
    ) -> MtResult<String> {
        let url = self.endpoint(path);
        debug!(%url, "sending request to {}", self.provider_name());

        let response = self
            .client
            .post(&url)
            .header(AUTH_HEADER, self.config.api_key.as_str())
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(if status.is_client_error() {
                MtError::ConfigError(format!("API client error ({}): {}", status, error_text))
            } else {
                server_error(format!("API server error ({}): {}", status, error_text))
            });
        }

        debug!(%status, "response received");
        Ok(response.text().await?)
    }
}

/// Pull `translated_text` out of a translate response body
///
/// Bodies of any other shape are returned as they were rendered, so an
/// unexpected answer still reaches the user instead of failing the call.
pub fn extract_translated_text(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(json) => match json.get("translated_text").and_then(Value::as_str) {
            Some(text) => text.to_string(),
            None => json.to_string(),
        },
        Err(_) => body.to_string(),
    }
}

impl std::fmt::Debug for SarvamProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SarvamProvider")
            .field("api_key", &"***")
            .field("base_url", &self.config.base_url)
            .field("model", &self.config.model)
            .finish()
    }
}

#[async_trait]
impl MachineTranslator for SarvamProvider {
    async fn identify_language(&self, text: &str) -> MtResult<LanguageIdentification> {
        let body = self
            .post(
                "text-lid",
                &json!({ "input": text }),
                MtError::LanguageDetectionError,
            )
            .await?;

        serde_json::from_str(&body).map_err(|e| {
            MtError::InvalidResponse(format!("Failed to parse language identification: {}", e))
        })
    }

    async fn translate(&self, request: &TranslationRequest) -> MtResult<String> {
        let body = self
            .post(
                "translate",
                &self.translate_body(request),
                MtError::TranslationError,
            )
            .await?;

        Ok(extract_translated_text(&body))
    }

    fn provider_name(&self) -> &str {
        "Sarvam AI"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mt::client::{TranslationClient, TranslationOutcome};

    fn provider(base_url: &str) -> SarvamProvider {
        let config = Config::new("test-key").unwrap().with_base_url(base_url);
        SarvamProvider::new(config).unwrap()
    }

    // ========== Initialization Tests ==========

    #[test]
    fn test_new_with_valid_key() {
        let provider = provider("https://api.sarvam.ai");
        assert_eq!(provider.provider_name(), "Sarvam AI");
        assert_eq!(provider.config().model, "sarvam-translate:v1");
    }

    #[test]
    fn test_endpoint_joining() {
        let provider = provider("http://localhost:9000/");
        assert_eq!(provider.endpoint("translate"), "http://localhost:9000/translate");
        assert_eq!(provider.endpoint("/text-lid"), "http://localhost:9000/text-lid");
    }

    #[test]
    fn test_debug_output() {
        let provider = provider("https://api.sarvam.ai");
        let debug_str = format!("{:?}", provider);
        assert!(debug_str.contains("***"));
        assert!(!debug_str.contains("test-key"));
    }

    // ========== Request Body Tests ==========

    #[test]
    fn test_translate_body_fields() {
        let provider = provider("https://api.sarvam.ai");
        let request = TranslationRequest::new("hello", "en-IN", "hi-IN", "informal", "Female");
        let body = provider.translate_body(&request);

        assert_eq!(body["input"], "hello");
        assert_eq!(body["source_language_code"], "en-IN");
        assert_eq!(body["target_language_code"], "hi-IN");
        assert_eq!(body["mode"], "informal");
        assert_eq!(body["speaker_gender"], "Female");
        assert_eq!(body["model"], "sarvam-translate:v1");
        assert_eq!(body["numerals_format"], "native");
        assert_eq!(body["enable_preprocessing"], false);
    }

    #[test]
    fn test_translate_body_passes_codes_verbatim() {
        let provider = provider("https://api.sarvam.ai");
        let request = TranslationRequest::new("x", "not-a-code", "", "whatever", "?");
        let body = provider.translate_body(&request);
        assert_eq!(body["source_language_code"], "not-a-code");
        assert_eq!(body["target_language_code"], "");
    }

    // ========== Response Parsing Tests ==========

    #[test]
    fn test_extract_translated_text() {
        let body = r#"{"request_id": "r1", "translated_text": "नमस्ते", "source_language_code": "en-IN"}"#;
        assert_eq!(extract_translated_text(body), "नमस्ते");
    }

    #[test]
    fn test_extract_unexpected_json_shape() {
        let body = r#"{"output": "hola"}"#;
        assert_eq!(extract_translated_text(body), r#"{"output":"hola"}"#);
    }

    #[test]
    fn test_extract_non_json_body() {
        assert_eq!(extract_translated_text("plain text"), "plain text");
    }

    // ========== Failure Tests ==========

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let provider = provider("http://127.0.0.1:1");
        let request = TranslationRequest::new("hello", "en-IN", "hi-IN", "formal", "Male");
        match provider.translate(&request).await {
            Err(MtError::NetworkError(_)) => {}
            other => panic!("Expected NetworkError, got {:?}", other),
        }
        assert!(provider.identify_language("hello").await.is_err());
    }

    // ========== HTTP Status and Body Tests ==========

    /// Answer the next `connections` requests on a local port with a fixed response
    fn serve(status: &str, body: &str, connections: usize) -> String {
        use std::io::{BufRead, BufReader, Read, Write};
        use std::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );

        std::thread::spawn(move || {
            for stream in listener.incoming().take(connections) {
                let mut stream = stream.unwrap();

                // Consume the whole request before answering
                let mut reader = BufReader::new(stream.try_clone().unwrap());
                let mut content_length = 0;
                loop {
                    let mut line = String::new();
                    if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                        break;
                    }
                    let lower = line.to_ascii_lowercase();
                    if let Some(value) = lower.strip_prefix("content-length:") {
                        content_length = value.trim().parse().unwrap();
                    }
                }
                let mut request_body = vec![0; content_length];
                reader.read_exact(&mut request_body).unwrap();

                stream.write_all(response.as_bytes()).unwrap();
            }
        });

        format!("http://{}", addr)
    }

    fn hello() -> TranslationRequest {
        TranslationRequest::new("hello", "en-IN", "hi-IN", "formal", "Male")
    }

    #[tokio::test]
    async fn test_client_error_status() {
        let provider = provider(&serve("400 Bad Request", r#"{"error":"bad code"}"#, 3));

        match provider.translate(&hello()).await {
            Err(MtError::ConfigError(msg)) => {
                assert!(msg.contains("400"), "{msg}");
                assert!(msg.contains("bad code"), "{msg}");
            }
            other => panic!("Expected ConfigError, got {:?}", other),
        }

        let client = TranslationClient::new(provider);
        let outcome = client.translate("hello", "en-IN", "hi-IN", "formal", "Male").await;
        match outcome {
            TranslationOutcome::Failed(msg) => assert!(msg.starts_with("Translation error:")),
            other => panic!("Expected failure, got {:?}", other),
        }
        assert_eq!(client.detect_language("hello").await, None);
    }

    #[tokio::test]
    async fn test_server_error_status() {
        let provider = provider(&serve("500 Internal Server Error", "oops", 4));

        match provider.translate(&hello()).await {
            Err(MtError::TranslationError(msg)) => {
                assert!(msg.contains("500"), "{msg}");
                assert!(msg.contains("oops"), "{msg}");
            }
            other => panic!("Expected TranslationError, got {:?}", other),
        }
        assert!(matches!(
            provider.identify_language("hello").await,
            Err(MtError::LanguageDetectionError(_))
        ));

        let client = TranslationClient::new(provider);
        let outcome = client.translate("hello", "en-IN", "hi-IN", "formal", "Male").await;
        assert_eq!(
            outcome,
            TranslationOutcome::Failed(
                "Translation error: API server error (500 Internal Server Error): oops".to_string()
            )
        );
        assert_eq!(client.detect_language("hello").await, None);
    }

    #[tokio::test]
    async fn test_success_body_with_translated_text() {
        let body = r#"{"request_id":"r1","translated_text":"namaste","source_language_code":"en-IN"}"#;
        let client = TranslationClient::new(provider(&serve("200 OK", body, 1)));

        let outcome = client.translate("hello", "en-IN", "hi-IN", "formal", "Male").await;
        assert_eq!(outcome, TranslationOutcome::Translated("namaste".to_string()));
    }

    #[tokio::test]
    async fn test_success_body_without_translated_text() {
        let provider = provider(&serve("200 OK", r#"{"output":"hola"}"#, 1));
        assert_eq!(
            provider.translate(&hello()).await.unwrap(),
            r#"{"output":"hola"}"#
        );
    }

    #[tokio::test]
    async fn test_success_body_not_json() {
        let provider = provider(&serve("200 OK", "not json", 2));

        assert_eq!(provider.translate(&hello()).await.unwrap(), "not json");
        assert!(matches!(
            provider.identify_language("hello").await,
            Err(MtError::InvalidResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_identification_through_http() {
        let body = r#"{"request_id":"r2","language_code":"hi-IN","script_code":"Deva"}"#;
        let client = TranslationClient::new(provider(&serve("200 OK", body, 1)));

        let detected = client.detect_language("मैं गया था").await.unwrap();
        assert_eq!(detected.language_code(), Some("hi-IN"));
        assert_eq!(detected.script_code.as_deref(), Some("Deva"));
    }

    // ========== Integration Tests (require real API key) ==========

    #[tokio::test]
    #[ignore] // Run with: cargo test --ignored
    async fn test_real_api_identify_language() {
        if std::env::var("SARVAM_API_KEY").is_err() {
            eprintln!("Skipping: SARVAM_API_KEY not set");
            return;
        }

        let provider = SarvamProvider::from_env().unwrap();
        let detected = provider
            .identify_language("मैं आज बाज़ार गया था")
            .await
            .unwrap();
        assert_eq!(detected.language_code(), Some("hi-IN"));
    }

    #[tokio::test]
    #[ignore] // Run with: cargo test --ignored
    async fn test_real_api_translation() {
        if std::env::var("SARVAM_API_KEY").is_err() {
            eprintln!("Skipping: SARVAM_API_KEY not set");
            return;
        }

        let provider = SarvamProvider::from_env().unwrap();
        let request = TranslationRequest::new("Hello", "en-IN", "hi-IN", "formal", "Male");
        let result = provider.translate(&request).await.unwrap();
        println!("Translation: Hello → {}", result);
        assert!(!result.is_empty());
    }

    #[tokio::test]
    #[ignore] // Run with: cargo test --ignored
    async fn test_real_api_invalid_key() {
        let provider = SarvamProvider::new(Config::new("invalid-key-xyz").unwrap()).unwrap();
        let request = TranslationRequest::new("hello", "en-IN", "hi-IN", "formal", "Male");
        match provider.translate(&request).await {
            Err(MtError::ConfigError(_)) | Err(MtError::TranslationError(_)) => {}
            other => panic!("Expected error from invalid API key, got {:?}", other),
        }
    }
}
