//! Gemini generateContent adapter.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{Error, Result};

use super::prompts::build_summary_prompt;
use super::{error_message, status_error, SummaryProvider, SummaryRequestOptions};

pub struct GeminiProvider {
    client: Client,
    base_url: String,
    model: String,
    temperature: f32,
}

impl GeminiProvider {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.gemini_base_url.clone(),
            model: config.gemini_model.clone(),
            temperature: config.temperature,
        })
    }
}

#[async_trait]
impl SummaryProvider for GeminiProvider {
    async fn summarize(
        &self,
        text: &str,
        api_key: &str,
        options: &SummaryRequestOptions,
    ) -> Result<String> {
        let prompt = build_summary_prompt(text, options.length);
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: &prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
                max_output_tokens: options.length.max_tokens(),
            },
        };

        tracing::debug!(
            "[Gemini] sending request: model={}, max_output_tokens={}",
            self.model,
            request.generation_config.max_output_tokens
        );

        // The credential rides the query string on this API.
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, api_key
        );

        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let (status, message) = error_message(response).await;
            tracing::warn!("[Gemini] request failed ({}): {}", status, message);
            return Err(status_error(status, message));
        }

        let reply: GenerateResponse = response.json().await?;
        reply_text(reply).ok_or(Error::EmptyResponse)
    }
}

/// Extract the reply text, if the response carries any.
fn reply_text(reply: GenerateResponse) -> Option<String> {
    reply
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content.parts.into_iter().next())
        .and_then(|part| part.text)
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}
