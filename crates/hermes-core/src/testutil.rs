//! Test utilities: mock implementations of the provider seams.
//!
//! Handwritten mocks for dependency injection in unit tests. All mocks use
//! `Arc<Mutex<_>>` for interior mutability, allowing test assertions on
//! recorded calls.

use std::sync::{Arc, Mutex};

use crate::error::AppError;
use crate::models::{QuestionContent, SearchSummary};
use crate::traits::{Provider, Summarizer};

// ---------------------------------------------------------------------------
// MockProvider
// ---------------------------------------------------------------------------

/// Mock provider with independent response queues per operation.
/// An empty queue yields a default value.
#[derive(Clone, Default)]
pub struct MockProvider {
    search_responses: Arc<Mutex<Vec<Result<SearchSummary, AppError>>>>,
    extract_responses: Arc<Mutex<Vec<Result<QuestionContent, AppError>>>>,
}

impl MockProvider {
    pub fn with_content(content: QuestionContent) -> Self {
        let mock = Self::default();
        mock.extract_responses.lock().unwrap().push(Ok(content));
        mock
    }

    pub fn with_search_result(found: SearchSummary) -> Self {
        let mock = Self::default();
        mock.search_responses.lock().unwrap().push(Ok(found));
        mock
    }

    pub fn with_extract_error(error: AppError) -> Self {
        let mock = Self::default();
        mock.extract_responses.lock().unwrap().push(Err(error));
        mock
    }

    pub fn with_search_error(error: AppError) -> Self {
        let mock = Self::default();
        mock.search_responses.lock().unwrap().push(Err(error));
        mock
    }
}

impl Provider for MockProvider {
    async fn search_and_summarize(&self, _query: &str) -> Result<SearchSummary, AppError> {
        let mut responses = self.search_responses.lock().unwrap();
        if responses.is_empty() {
            Ok(SearchSummary::default())
        } else {
            responses.remove(0)
        }
    }

    async fn extract_content(&self, _url: &str) -> Result<QuestionContent, AppError> {
        let mut responses = self.extract_responses.lock().unwrap();
        if responses.is_empty() {
            Ok(QuestionContent::default())
        } else {
            responses.remove(0)
        }
    }
}

// ---------------------------------------------------------------------------
// MockSummarizer
// ---------------------------------------------------------------------------

/// Mock summarizer returning queued raw replies (shared between `summarize`
/// and `chat`) and recording every call for assertions.
#[derive(Clone)]
pub struct MockSummarizer {
    replies: Arc<Mutex<Vec<Result<String, AppError>>>>,
    /// Recorded `(title, content, tags)` arguments.
    pub summarize_calls: Arc<Mutex<Vec<(String, String, Vec<String>)>>>,
    /// Recorded `(message, context)` arguments.
    pub chat_calls: Arc<Mutex<Vec<(String, Option<String>)>>>,
}

impl MockSummarizer {
    pub fn with_reply(reply: &str) -> Self {
        Self::with_replies(vec![Ok(reply.to_string())])
    }

    pub fn with_error(error: AppError) -> Self {
        Self::with_replies(vec![Err(error)])
    }

    pub fn with_replies(replies: Vec<Result<String, AppError>>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(replies)),
            summarize_calls: Arc::new(Mutex::new(Vec::new())),
            chat_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn next_reply(&self) -> Result<String, AppError> {
        let mut replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            Ok("{}".to_string())
        } else {
            replies.remove(0)
        }
    }
}

impl Summarizer for MockSummarizer {
    async fn summarize(
        &self,
        title: &str,
        content: &str,
        tags: &[String],
    ) -> Result<String, AppError> {
        self.summarize_calls.lock().unwrap().push((
            title.to_string(),
            content.to_string(),
            tags.to_vec(),
        ));
        self.next_reply()
    }

    async fn chat(&self, message: &str, context: Option<&str>) -> Result<String, AppError> {
        self.chat_calls
            .lock()
            .unwrap()
            .push((message.to_string(), context.map(str::to_string)));
        self.next_reply()
    }
}
