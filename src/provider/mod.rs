//! Provider adapters for the summarization request.
//!
//! Two interchangeable implementations behind one single-method contract;
//! the provider is selected once from [`ProviderKind`], and nothing
//! downstream branches on provider identity.

mod gemini;
mod openai;
pub(crate) mod prompts;

pub use gemini::GeminiProvider;
pub use openai::OpenAiProvider;

use std::str::FromStr;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::config::Config;
use crate::error::{Error, Result};

/// Requested summary length. Maps to instruction phrasing in the prompt
/// and to a response token budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetLength {
    Short,
    Medium,
    Long,
    #[default]
    Detailed,
}

impl TargetLength {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
            Self::Detailed => "detailed",
        }
    }

    /// Response token budget for this length.
    pub fn max_tokens(&self) -> u32 {
        match self {
            Self::Short => 150,
            Self::Medium => 300,
            Self::Long => 600,
            Self::Detailed => 3000,
        }
    }
}

impl FromStr for TargetLength {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "short" => Ok(Self::Short),
            "medium" => Ok(Self::Medium),
            "long" => Ok(Self::Long),
            "detailed" => Ok(Self::Detailed),
            other => Err(format!(
                "unknown length '{}' (expected short, medium, long or detailed)",
                other
            )),
        }
    }
}

/// Which provider handles the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
    #[default]
    OpenAi,
    Gemini,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Gemini => "gemini",
        }
    }

    /// Environment variable the API key is read from when not supplied
    /// explicitly.
    pub fn key_env_var(&self) -> &'static str {
        match self {
            Self::OpenAi => "OPENAI_API_KEY",
            Self::Gemini => "GEMINI_API_KEY",
        }
    }

    /// Build the adapter for this provider.
    pub fn client(&self, config: &Config) -> Result<Box<dyn SummaryProvider>> {
        match self {
            Self::OpenAi => Ok(Box::new(OpenAiProvider::new(config)?)),
            Self::Gemini => Ok(Box::new(GeminiProvider::new(config)?)),
        }
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(Self::OpenAi),
            "gemini" => Ok(Self::Gemini),
            other => Err(format!(
                "unknown provider '{}' (expected openai or gemini)",
                other
            )),
        }
    }
}

/// Options for one summarization request. Immutable per request.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryRequestOptions {
    pub length: TargetLength,
    pub provider: ProviderKind,
}

/// The provider capability: one request in, one raw textual reply out.
///
/// Implementations must be interchangeable; swapping providers must not
/// change any downstream component.
#[async_trait]
pub trait SummaryProvider: Send + Sync {
    /// Ask the provider for a marked-up summary of `text`.
    async fn summarize(
        &self,
        text: &str,
        api_key: &str,
        options: &SummaryRequestOptions,
    ) -> Result<String>;
}

/// Shared error-body shape of both provider APIs.
#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Pull the provider's own error message out of a non-success response,
/// falling back to the raw body.
pub(crate) async fn error_message(response: reqwest::Response) -> (StatusCode, String) {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiErrorBody>(&text)
        .map(|body| body.error.message)
        .unwrap_or(text);
    (status, message)
}

/// Map a non-success HTTP status onto the pipeline error taxonomy.
pub(crate) fn status_error(status: StatusCode, message: String) -> Error {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        Error::Authentication(message)
    } else {
        Error::Provider {
            status: status.as_u16(),
            message,
        }
    }
}
