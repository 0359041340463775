//! Runtime configuration for the pipeline.
//!
//! Defaults match the production deployment; everything here can be
//! overridden through `DOCUSUM_*` environment variables, which is mainly
//! useful for pointing the provider adapters at a local test server.

use std::time::Duration;

/// Maximum accepted document size.
pub const MAX_DOCUMENT_BYTES: u64 = 10 * 1024 * 1024;

/// Minimum extracted-text length worth summarizing.
pub const MIN_TEXT_LENGTH: usize = 50;

#[derive(Debug, Clone)]
pub struct Config {
    /// Size ceiling for uploaded documents, in bytes.
    pub max_document_bytes: u64,

    /// Extracted text shorter than this is an extraction failure.
    pub min_text_len: usize,

    /// Base URL for the OpenAI-style chat completions API.
    pub openai_base_url: String,

    /// Chat model for the OpenAI provider.
    pub openai_model: String,

    /// Base URL for the Gemini generateContent API.
    pub gemini_base_url: String,

    /// Model for the Gemini provider.
    pub gemini_model: String,

    /// Sampling temperature for both providers.
    pub temperature: f32,

    /// Timeout for one provider round-trip.
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_document_bytes: MAX_DOCUMENT_BYTES,
            min_text_len: MIN_TEXT_LENGTH,
            openai_base_url: "https://api.openai.com".to_string(),
            openai_model: "gpt-3.5-turbo".to_string(),
            gemini_base_url: "https://generativelanguage.googleapis.com".to_string(),
            gemini_model: "gemini-2.0-flash".to_string(),
            temperature: 0.3,
            request_timeout: Duration::from_secs(120),
        }
    }
}

impl Config {
    /// Build a config from defaults plus environment overrides.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("DOCUSUM_OPENAI_BASE_URL") {
            config.openai_base_url = url;
        }
        if let Ok(model) = std::env::var("DOCUSUM_OPENAI_MODEL") {
            config.openai_model = model;
        }
        if let Ok(url) = std::env::var("DOCUSUM_GEMINI_BASE_URL") {
            config.gemini_base_url = url;
        }
        if let Ok(model) = std::env::var("DOCUSUM_GEMINI_MODEL") {
            config.gemini_model = model;
        }

        config
    }
}
