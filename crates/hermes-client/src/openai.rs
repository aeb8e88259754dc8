use hermes_core::AppError;
use hermes_core::traits::Summarizer;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{build_client, map_send_error};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4-turbo-preview";
const SYSTEM_PROMPT: &str = "You are a helpful technical assistant.";
const MAX_TOKENS: u32 = 1000;
const TEMPERATURE: f32 = 0.3;

/// OpenAI-compatible chat-completions summarizer.
///
/// The structured-prompt variant: builds a strict JSON-instructing prompt
/// over the fixed summary field set, and a separate free-form prompt for
/// follow-up chat. Returns the raw reply text; parsing happens downstream.
#[derive(Clone, Debug)]
pub struct OpenAiSummarizer {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiSummarizer {
    pub fn new(api_key: &str) -> Result<Self, AppError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self, AppError> {
        if api_key.is_empty() {
            return Err(AppError::ConfigError("OpenAI API key is required".into()));
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
        let url = format!("{}/chat/completions", self.base_url);

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                Message {
                    role: "user".to_string(),
                    content: prompt.to_string(),
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
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

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| AppError::HttpError(format!("Failed to decode LLM response: {e}")))?;

        chat.choices
            .first()
            .and_then(|c| c.message.content.clone())
            .ok_or_else(|| AppError::LlmError {
                message: "Empty response from LLM".into(),
                status_code: 200,
            })
    }
}

// ---- OpenAI API types ----

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct Message {
    role: String,
    content: String,
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

#[derive(Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl Summarizer for OpenAiSummarizer {
    async fn summarize(
        &self,
        title: &str,
        content: &str,
        tags: &[String],
    ) -> Result<String, AppError> {
        self.complete(&summarization_prompt(title, content, tags))
            .await
    }

    async fn chat(&self, message: &str, context: Option<&str>) -> Result<String, AppError> {
        let reply = self.complete(&chat_prompt(message, context)).await?;
        Ok(reply.trim().to_string())
    }
}

/// Prompt instructing the model to reply with the fixed summary JSON shape.
fn summarization_prompt(title: &str, content: &str, tags: &[String]) -> String {
    let tag_info = if tags.is_empty() {
        "Not specified".to_string()
    } else {
        tags.join(", ")
    };

    format!(
        r#"You are an expert technical summarizer. Analyze the following StackOverflow question and provide a comprehensive summary.

Question Title: {title}
Tags: {tag_info}

Content:
{content}

Please provide a JSON response with the following structure:
{{
    "title": "The question title",
    "summary": "A clear, concise summary of the main problem and solution (2-3 sentences)",
    "key_points": [
        "Key point 1 about the solution",
        "Key point 2 about important considerations",
        "Key point 3 about best practices"
    ],
    "code_samples": [
        "Relevant code snippet 1",
        "Relevant code snippet 2"
    ],
    "tags": ["tag1", "tag2", "tag3"]
}}

Focus on:
1. The core problem being solved
2. The most effective solution(s)
3. Important technical details
4. Code examples that demonstrate the solution
5. Best practices and considerations

Return only valid JSON without any additional text."#
    )
}

/// Prompt for free-form follow-up replies, interpolating prior context
/// when given.
fn chat_prompt(message: &str, context: Option<&str>) -> String {
    let context_info = match context {
        Some(context) => format!("\nPrevious context: {context}\n"),
        None => String::new(),
    };

    format!(
        r#"You are a helpful technical assistant. Answer the following follow-up question based on the previous conversation about a StackOverflow question.
{context_info}
User question: {message}

Provide a clear, helpful response that:
1. Directly addresses the user's question
2. Builds on the previous context if available
3. Includes relevant technical details
4. Is concise but informative"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarization_prompt_carries_all_fields() {
        let tags = vec!["rust".to_string(), "axum".to_string()];
        let prompt = summarization_prompt("How to use extractors", "Question: ...", &tags);

        assert!(prompt.contains("Question Title: How to use extractors"));
        assert!(prompt.contains("Tags: rust, axum"));
        assert!(prompt.contains("Question: ..."));
        assert!(prompt.contains("\"key_points\""));
        assert!(prompt.contains("\"code_samples\""));
        assert!(prompt.contains("Return only valid JSON"));
    }

    #[test]
    fn summarization_prompt_marks_missing_tags() {
        let prompt = summarization_prompt("t", "c", &[]);
        assert!(prompt.contains("Tags: Not specified"));
    }

    #[test]
    fn chat_prompt_includes_message_and_context() {
        let prompt = chat_prompt("explain again", Some("prior topic"));
        assert!(prompt.contains("User question: explain again"));
        assert!(prompt.contains("Previous context: prior topic"));
    }

    #[test]
    fn chat_prompt_omits_absent_context() {
        let prompt = chat_prompt("explain again", None);
        assert!(!prompt.contains("Previous context"));
    }

    #[test]
    fn empty_api_key_is_a_config_error() {
        let err = OpenAiSummarizer::new("").unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }
}
