use hermes_core::AppError;
use hermes_core::models::{QuestionContent, SearchSummary};
use hermes_core::traits::Provider;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{build_client, map_send_error};

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const DEFAULT_MODEL: &str = "claude-3-sonnet-20240229";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 1000;

/// Anthropic messages-API provider.
///
/// The direct-prompt variant: both operations send a single instructive
/// prompt and return the model's text content as-is, with no sources and
/// no scraping fallback.
#[derive(Clone, Debug)]
pub struct AnthropicProvider {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl AnthropicProvider {
    pub fn new(api_key: &str) -> Result<Self, AppError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self, AppError> {
        if api_key.is_empty() {
            return Err(AppError::ConfigError(
                "Anthropic API key is required".into(),
            ));
        }

        Ok(Self {
            client: build_client()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: DEFAULT_MODEL.to_string(),
        })
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    async fn complete(&self, prompt: &str) -> Result<String, AppError> {
        let url = format!("{}/v1/messages", self.base_url);

        let request = MessagesRequest {
            model: self.model.clone(),
            max_tokens: MAX_TOKENS,
            messages: vec![Message {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let status_code = status.as_u16();
            let body = response.text().await.unwrap_or_default();

            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| format!("HTTP {status_code}: {body}"));

            return Err(AppError::LlmError {
                message,
                status_code,
            });
        }

        let reply: MessagesResponse = response
            .json()
            .await
            .map_err(|e| AppError::HttpError(format!("Failed to decode LLM response: {e}")))?;

        reply
            .content
            .first()
            .map(|block| block.text.clone())
            .ok_or_else(|| AppError::LlmError {
                message: "Empty response from LLM".into(),
                status_code: 200,
            })
    }
}

// ---- Anthropic API types ----

#[derive(Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<Message>,
}

#[derive(Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl Provider for AnthropicProvider {
    async fn search_and_summarize(&self, query: &str) -> Result<SearchSummary, AppError> {
        let prompt = format!(
            "Search for information about: {query}. Provide a comprehensive summary with key points and code examples if relevant."
        );
        let content = self.complete(&prompt).await?;

        Ok(SearchSummary {
            content,
            sources: Vec::new(),
        })
    }

    async fn extract_content(&self, url: &str) -> Result<QuestionContent, AppError> {
        let body = self.complete(&analysis_prompt(url)).await?;

        Ok(QuestionContent {
            title: "StackOverflow Question Analysis".to_string(),
            body,
            tags: Vec::new(),
            source_url: url.to_string(),
        })
    }
}

/// Prompt asking the model to analyze a question page by URL.
fn analysis_prompt(url: &str) -> String {
    format!(
        r#"Please analyze this StackOverflow question URL and provide a comprehensive summary:
{url}

Include:
1. The main question/problem
2. Key solutions and answers
3. Important code examples
4. Technical insights and best practices

Format your response as a detailed technical summary that can be used for further processing."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_prompt_names_the_url() {
        let prompt = analysis_prompt("https://stackoverflow.com/questions/123456/x");
        assert!(prompt.contains("https://stackoverflow.com/questions/123456/x"));
        assert!(prompt.contains("Key solutions and answers"));
    }

    #[test]
    fn empty_api_key_is_a_config_error() {
        let err = AnthropicProvider::new("").unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }
}
