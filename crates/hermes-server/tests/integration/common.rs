use std::sync::Arc;

use axum::Router;

use hermes_client::{ContentProvider, OpenAiSummarizer, PerplexityProvider};
use hermes_core::SummarizeService;
use hermes_server::routes;
use hermes_server::state::AppState;

/// Build the app router with dummy credentials.
///
/// Suitable for every path that resolves before reaching a provider
/// (validation failures, health, docs); nothing here performs network I/O.
pub fn test_app() -> Router {
    let provider = ContentProvider::Perplexity(
        PerplexityProvider::new("test-perplexity-key").expect("provider construction"),
    );
    let summarizer = OpenAiSummarizer::new("test-openai-key").expect("summarizer construction");

    let state = Arc::new(AppState {
        service: SummarizeService::new(provider, summarizer),
        provider_name: "perplexity".to_string(),
    });

    routes::router(state)
}
