use hermes_client::{ContentProvider, OpenAiSummarizer};
use hermes_core::SummarizeService;

/// Shared application state, available to all route handlers via `State<Arc<AppState>>`.
pub struct AppState {
    pub service: SummarizeService<ContentProvider, OpenAiSummarizer>,
    /// Name of the configured provider backend, reported by `/health`.
    pub provider_name: String,
}
