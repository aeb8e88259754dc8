use hermes_core::AppError;
use hermes_core::input::extract_question_id;
use hermes_core::models::{QuestionContent, SearchSummary};
use hermes_core::traits::Provider;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::scrape;
use crate::{build_client, map_send_error};

const DEFAULT_BASE_URL: &str = "https://api.perplexity.ai";
const DEFAULT_MODEL: &str = "sonar";
const SYSTEM_PROMPT: &str =
    "You are a helpful technical assistant. Provide concise, accurate information about technical topics.";
const MAX_TOKENS: u32 = 1000;
const TEMPERATURE: f32 = 0.3;

/// Perplexity search-augmented provider.
///
/// Posts to the search-capable chat endpoint; when the primary call fails
/// for any reason, `extract_content` falls back to fetching the question
/// page directly and extracting it from the DOM.
#[derive(Clone, Debug)]
pub struct PerplexityProvider {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl PerplexityProvider {
    pub fn new(api_key: &str) -> Result<Self, AppError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self, AppError> {
        if api_key.is_empty() {
            return Err(AppError::ConfigError(
                "Perplexity API key is required".into(),
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
}

// ---- Perplexity API types (OpenAI-compatible chat shape) ----

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
    /// Source URLs, when the search backend reports them.
    #[serde(default)]
    sources: Vec<String>,
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

impl Provider for PerplexityProvider {
    async fn search_and_summarize(&self, query: &str) -> Result<SearchSummary, AppError> {
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
                    content: format!(
                        "Search for information about: {query}. Provide a comprehensive summary with key points and code examples if relevant."
                    ),
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

        let content = chat
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .ok_or_else(|| AppError::LlmError {
                message: "Empty response from LLM".into(),
                status_code: 200,
            })?;

        Ok(SearchSummary {
            content,
            sources: chat.sources,
        })
    }

    /// Primary path asks the search backend to summarize the question page;
    /// any failure there falls back to a direct scrape. Only when both
    /// paths fail does the call error, with both causes in the message.
    async fn extract_content(&self, url: &str) -> Result<QuestionContent, AppError> {
        let query = format!("Summarize this StackOverflow question: {url}");

        match self.search_and_summarize(&query).await {
            Ok(found) => Ok(QuestionContent {
                title: title_from_url(url),
                body: found.content,
                tags: Vec::new(),
                source_url: url.to_string(),
            }),
            Err(primary) => {
                tracing::warn!("Search API failed ({primary}); falling back to direct scrape");
                scrape::fetch_question(&self.client, url)
                    .await
                    .map_err(|fallback| {
                        AppError::HttpError(format!(
                            "search failed ({primary}) and scrape fallback failed ({fallback})"
                        ))
                    })
            }
        }
    }
}

/// Derive a working title from the question id when the URL carries one.
fn title_from_url(url: &str) -> String {
    match extract_question_id(url) {
        Some(id) => format!("StackOverflow Question #{id}"),
        None => "StackOverflow Question".to_string(),
    }
}
