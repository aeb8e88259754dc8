use std::future::Future;

use crate::error::AppError;
use crate::models::{QuestionContent, SearchSummary};

/// An external LLM or search API used to answer a question.
///
/// Implementations must capture every transport failure and return it as an
/// [`AppError`]; a raw client error never escapes the adapter boundary.
pub trait Provider: Send + Sync + Clone {
    /// Answer a free-form query, returning explanatory text plus any source
    /// references the backend reports.
    fn search_and_summarize(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<SearchSummary, AppError>> + Send;

    /// Obtain the content of a question page — through the provider's API,
    /// or by whatever fallback the variant defines.
    fn extract_content(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<QuestionContent, AppError>> + Send;
}

/// Produces the raw reply the parser consumes, and answers follow-up chat.
pub trait Summarizer: Send + Sync + Clone {
    /// Ask for a structured summary of the given content. Returns the raw
    /// model reply; parsing happens downstream in [`crate::parser`].
    fn summarize(
        &self,
        title: &str,
        content: &str,
        tags: &[String],
    ) -> impl Future<Output = Result<String, AppError>> + Send;

    /// Answer a follow-up message, threading prior context into the prompt
    /// when given.
    fn chat(
        &self,
        message: &str,
        context: Option<&str>,
    ) -> impl Future<Output = Result<String, AppError>> + Send;
}
