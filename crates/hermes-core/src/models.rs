use serde::{Deserialize, Serialize};

/// Canonical structured output of a summarization request.
///
/// Sequence fields are always present after parsing — possibly empty,
/// never null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub title: String,
    pub summary: String,
    pub key_points: Vec<String>,
    pub code_samples: Vec<String>,
    pub tags: Vec<String>,
    /// Page the summary was built from; `None` for free-text questions.
    pub source_url: Option<String>,
}

/// Question content obtained from a provider, by API or by scraping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestionContent {
    pub title: String,
    /// Combined question/answer text.
    pub body: String,
    pub tags: Vec<String>,
    pub source_url: String,
}

/// Result of answering a free-form query through a provider.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchSummary {
    pub content: String,
    /// Source references, when the provider reports them.
    pub sources: Vec<String>,
}

/// One chat turn: the assistant reply plus the carried-forward context.
///
/// Context is opaque text — concatenated and echoed, never structurally
/// validated.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatExchange {
    pub message: String,
    pub context: String,
}
