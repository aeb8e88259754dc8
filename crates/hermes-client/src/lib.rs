//! Provider adapters for Hermes: the OpenAI-compatible summarizer, the
//! Anthropic direct-prompt provider, and the Perplexity search-augmented
//! provider with its StackOverflow scraping fallback.

use std::time::Duration;

use hermes_core::AppError;
use hermes_core::models::{QuestionContent, SearchSummary};
use hermes_core::traits::Provider;

pub mod anthropic;
pub mod openai;
pub mod perplexity;
pub mod scrape;

pub use anthropic::AnthropicProvider;
pub use openai::OpenAiSummarizer;
pub use perplexity::PerplexityProvider;

/// Fixed timeout for every outbound call. Expiry is an ordinary failure,
/// never retried.
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Map a reqwest send error into the transport taxonomy.
pub(crate) fn map_send_error(e: reqwest::Error) -> AppError {
    if e.is_timeout() {
        AppError::Timeout(REQUEST_TIMEOUT.as_secs())
    } else if e.is_connect() {
        AppError::NetworkError(format!("Connection failed: {e}"))
    } else {
        AppError::HttpError(e.to_string())
    }
}

/// Build the shared reqwest client with the fixed per-call timeout.
pub(crate) fn build_client() -> Result<reqwest::Client, AppError> {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| AppError::HttpError(e.to_string()))
}

/// Which provider backend answers summarize requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Perplexity,
    Anthropic,
}

impl std::str::FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "perplexity" => Ok(Self::Perplexity),
            "anthropic" => Ok(Self::Anthropic),
            other => Err(format!(
                "unknown provider '{other}' (expected 'perplexity' or 'anthropic')"
            )),
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Perplexity => write!(f, "perplexity"),
            Self::Anthropic => write!(f, "anthropic"),
        }
    }
}

/// Concrete provider selected by configuration, never by runtime type
/// inspection.
///
/// Enum dispatch instead of trait objects: the [`Provider`] trait uses
/// RPIT async methods and is not object-safe.
#[derive(Clone)]
pub enum ContentProvider {
    Perplexity(PerplexityProvider),
    Anthropic(AnthropicProvider),
}

impl Provider for ContentProvider {
    async fn search_and_summarize(&self, query: &str) -> Result<SearchSummary, AppError> {
        match self {
            Self::Perplexity(p) => p.search_and_summarize(query).await,
            Self::Anthropic(p) => p.search_and_summarize(query).await,
        }
    }

    async fn extract_content(&self, url: &str) -> Result<QuestionContent, AppError> {
        match self {
            Self::Perplexity(p) => p.extract_content(url).await,
            Self::Anthropic(p) => p.extract_content(url).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_kind_parses_case_insensitively() {
        assert_eq!("perplexity".parse(), Ok(ProviderKind::Perplexity));
        assert_eq!("Anthropic".parse(), Ok(ProviderKind::Anthropic));
        assert!("openai".parse::<ProviderKind>().is_err());
    }

    #[test]
    fn provider_kind_display_round_trips() {
        assert_eq!(ProviderKind::Perplexity.to_string(), "perplexity");
        assert_eq!(ProviderKind::Anthropic.to_string(), "anthropic");
    }
}
