use serde::{Deserialize, Serialize};

use hermes_core::models::{ChatExchange, SummaryRecord};

// ---------------------------------------------------------------------------
// Summarize
// ---------------------------------------------------------------------------

/// Input for the summarize operation. Exactly one of the two fields should
/// be meaningfully populated; validation happens before any provider call.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct SummarizeRequest {
    /// StackOverflow question URL
    pub url: Option<String>,
    /// Free-form question text (at least 10 characters)
    pub question: Option<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct SummaryData {
    pub title: String,
    pub summary: String,
    pub key_points: Vec<String>,
    pub code_samples: Vec<String>,
    pub tags: Vec<String>,
    pub source_url: Option<String>,
}

impl From<SummaryRecord> for SummaryData {
    fn from(record: SummaryRecord) -> Self {
        Self {
            title: record.title,
            summary: record.summary,
            key_points: record.key_points,
            code_samples: record.code_samples,
            tags: record.tags,
            source_url: record.source_url,
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct SummarizeResponse {
    pub success: bool,
    pub data: Option<SummaryData>,
    pub message: Option<String>,
    pub error: Option<String>,
}

// ---------------------------------------------------------------------------
// Chat
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct ChatRequest {
    pub message: String,
    /// Opaque context carried over from an earlier summary or chat turn
    pub context: Option<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ChatData {
    pub message: String,
    pub context: String,
}

impl From<ChatExchange> for ChatData {
    fn from(exchange: ChatExchange) -> Self {
        Self {
            message: exchange.message,
            context: exchange.context,
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ChatResponse {
    pub success: bool,
    pub data: Option<ChatData>,
    pub message: Option<String>,
    pub error: Option<String>,
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub provider: String,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}
