//! Direct HTML retrieval fallback for question pages.
//!
//! Used when the search-augmented provider's primary call fails. Locates
//! the question title, the question body, up to the first three answer
//! bodies, and the tag elements, and folds them into a single labeled text
//! blob. Selectors track the classic StackOverflow markup and carry no
//! versioning against redesigns; absent elements degrade to empty strings
//! rather than errors.

use std::sync::LazyLock;

use hermes_core::AppError;
use hermes_core::models::QuestionContent;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};

use crate::map_send_error;

/// Answers beyond the first three are ignored.
const MAX_ANSWERS: usize = 3;

static QUESTION_TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1.question-hyperlink").expect("valid selector"));
static QUESTION_BLOCK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.question").expect("valid selector"));
static POST_BODY: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.post-text").expect("valid selector"));
static ANSWER_BLOCK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.answer").expect("valid selector"));
static TAG_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a.post-tag").expect("valid selector"));

/// Fetch a question page and extract its content from the DOM.
pub async fn fetch_question(client: &Client, url: &str) -> Result<QuestionContent, AppError> {
    let response = client.get(url).send().await.map_err(map_send_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(AppError::HttpError(format!(
            "HTTP {} for {url}",
            status.as_u16()
        )));
    }

    let html = response
        .text()
        .await
        .map_err(|e| AppError::HttpError(format!("Failed to read response body: {e}")))?;

    Ok(parse_question_page(&html, url))
}

/// Extract question content from a question page's HTML.
pub fn parse_question_page(html: &str, url: &str) -> QuestionContent {
    let document = Html::parse_document(html);

    let title = document
        .select(&QUESTION_TITLE)
        .next()
        .map(element_text)
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| "StackOverflow Question".to_string());

    let question = document
        .select(&QUESTION_BLOCK)
        .next()
        .and_then(|q| q.select(&POST_BODY).next())
        .map(element_text)
        .unwrap_or_default();

    let answers: Vec<String> = document
        .select(&ANSWER_BLOCK)
        .take(MAX_ANSWERS)
        .filter_map(|a| a.select(&POST_BODY).next())
        .map(element_text)
        .collect();

    let tags: Vec<String> = document.select(&TAG_LINK).map(element_text).collect();

    let mut body = format!("Question: {question}\n\n");
    for (i, answer) in answers.iter().enumerate() {
        body.push_str(&format!("Answer {}: {answer}\n\n", i + 1));
    }

    QuestionContent {
        title,
        body,
        tags,
        source_url: url.to_string(),
    }
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
