//! OpenAI-style chat completions adapter.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{Error, Result};

use super::prompts::build_summary_prompt;
use super::{error_message, status_error, SummaryProvider, SummaryRequestOptions};

pub struct OpenAiProvider {
    client: Client,
    base_url: String,
    model: String,
    temperature: f32,
}

impl OpenAiProvider {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.openai_base_url.clone(),
            model: config.openai_model.clone(),
            temperature: config.temperature,
        })
    }
}

#[async_trait]
impl SummaryProvider for OpenAiProvider {
    async fn summarize(
        &self,
        text: &str,
        api_key: &str,
        options: &SummaryRequestOptions,
    ) -> Result<String> {
        let prompt = build_summary_prompt(text, options.length);
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &prompt,
            }],
            max_tokens: options.length.max_tokens(),
            temperature: self.temperature,
        };

        tracing::debug!(
            "[OpenAI] sending request: model={}, max_tokens={}",
            self.model,
            request.max_tokens
        );

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let (status, message) = error_message(response).await;
            tracing::warn!("[OpenAI] request failed ({}): {}", status, message);
            return Err(status_error(status, message));
        }

        let reply: ChatResponse = response.json().await?;
        reply_text(reply).ok_or(Error::EmptyResponse)
    }
}

/// Extract the reply text, if the response carries any.
fn reply_text(reply: ChatResponse) -> Option<String> {
    reply
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_matches_the_wire_contract() {
        let request = ChatRequest {
            model: "gpt-3.5-turbo",
            messages: vec![ChatMessage {
                role: "user",
                content: "analyze this",
            }],
            max_tokens: 300,
            temperature: 0.3,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-3.5-turbo");
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], "analyze this");
        assert_eq!(value["max_tokens"], 300);
    }

    #[test]
    fn reply_text_reads_the_first_choice() {
        let reply: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"  SUMMARY:\nText.  "}}]}"#,
        )
        .unwrap();

        assert_eq!(reply_text(reply).as_deref(), Some("SUMMARY:\nText."));
    }

    #[test]
    fn missing_or_blank_content_is_empty() {
        let no_choices: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert_eq!(reply_text(no_choices), None);

        let blank: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":"   "}}]}"#).unwrap();
        assert_eq!(reply_text(blank), None);
    }
}
