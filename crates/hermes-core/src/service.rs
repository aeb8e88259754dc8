use crate::error::AppError;
use crate::input::normalize_url;
use crate::models::{ChatExchange, SummaryRecord};
use crate::parser::parse_summary;
use crate::traits::{Provider, Summarizer};

/// Orchestrates a summarization request: obtain content → summarize → parse.
///
/// Generic over the provider and summarizer seams, enabling dependency
/// injection and testability without real network calls. Each request
/// performs at most one outbound call sequence (a primary call plus at most
/// one fallback inside the provider); there is no caching, no retry, and no
/// state shared across requests.
pub struct SummarizeService<P, S>
where
    P: Provider,
    S: Summarizer,
{
    provider: P,
    summarizer: S,
}

impl<P, S> SummarizeService<P, S>
where
    P: Provider,
    S: Summarizer,
{
    pub fn new(provider: P, summarizer: S) -> Self {
        Self {
            provider,
            summarizer,
        }
    }

    /// Summarize a question page by URL.
    ///
    /// Normalizes the URL, pulls the page content through the provider,
    /// asks the summarizer for a structured reply, and parses it into the
    /// canonical record with `source_url` stamped.
    pub async fn summarize_url(&self, url: &str) -> Result<SummaryRecord, AppError> {
        let url = normalize_url(url);
        tracing::info!("Extracting content for {url}");
        let content = self.provider.extract_content(&url).await?;
        tracing::info!(
            "Got {} chars of content, requesting summary",
            content.body.len()
        );

        let reply = self
            .summarizer
            .summarize(&content.title, &content.body, &content.tags)
            .await?;

        let mut record = parse_summary(&reply)?;
        record.source_url = Some(content.source_url);
        Ok(record)
    }

    /// Summarize a free-form question.
    ///
    /// Searches through the provider, then summarizes what came back. The
    /// question text doubles as the working title; `source_url` stays
    /// `None` since there is no canonical page.
    pub async fn summarize_question(&self, question: &str) -> Result<SummaryRecord, AppError> {
        tracing::info!("Searching for an answer to a free-form question");
        let found = self.provider.search_and_summarize(question).await?;

        let reply = self
            .summarizer
            .summarize(question, &found.content, &[])
            .await?;

        parse_summary(&reply)
    }

    /// Answer a follow-up chat message, carrying prior context forward.
    pub async fn chat(
        &self,
        message: &str,
        context: Option<&str>,
    ) -> Result<ChatExchange, AppError> {
        let reply = self.summarizer.chat(message, context).await?;
        let context = extend_context(context, message, &reply);
        Ok(ChatExchange {
            message: reply,
            context,
        })
    }
}

/// Append the new turn to the opaque context string so a later call can
/// carry the whole exchange forward.
fn extend_context(prior: Option<&str>, message: &str, reply: &str) -> String {
    match prior {
        Some(prior) => format!("{prior}\nUser: {message}\nAssistant: {reply}"),
        None => format!("User: {message}\nAssistant: {reply}"),
    }
}
