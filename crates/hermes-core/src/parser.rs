//! Turns a model reply into a [`SummaryRecord`].

use serde::Deserialize;

use crate::error::AppError;
use crate::models::SummaryRecord;

/// Reply fields as the summarizer prompt asks for them. Missing keys fall
/// back to empty values so the output record never carries nulls.
#[derive(Debug, Default, Deserialize)]
struct RawSummary {
    #[serde(default)]
    title: String,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    key_points: Vec<String>,
    #[serde(default)]
    code_samples: Vec<String>,
    #[serde(default)]
    tags: Vec<String>,
}

/// Strip a surrounding Markdown code fence, if present.
///
/// Models frequently wrap JSON replies in ```` ```json ```` fences despite
/// being told not to. This runs as its own normalization step before
/// structured parsing.
pub fn strip_code_fence(reply: &str) -> &str {
    let mut text = reply.trim();
    if let Some(rest) = text.strip_prefix("```json") {
        text = rest;
    } else if let Some(rest) = text.strip_prefix("```") {
        text = rest;
    }
    if let Some(rest) = text.trim_end().strip_suffix("```") {
        text = rest;
    }
    text.trim()
}

/// Parse a model reply into the canonical summary record.
///
/// A reply that does not parse as JSON is an [`AppError::ParseError`]
/// surfaced to the caller; no record is fabricated from unparseable output.
pub fn parse_summary(reply: &str) -> Result<SummaryRecord, AppError> {
    let cleaned = strip_code_fence(reply);
    let raw: RawSummary = serde_json::from_str(cleaned)
        .map_err(|e| AppError::ParseError(format!("reply is not valid summary JSON: {e}")))?;

    Ok(SummaryRecord {
        title: raw.title,
        summary: raw.summary,
        key_points: raw.key_points,
        code_samples: raw.code_samples,
        tags: raw.tags,
        source_url: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPLY: &str = r#"{
        "title": "How to use axum extractors",
        "summary": "Use the FromRequest trait.",
        "key_points": ["Extractors run in order", "Body extractors go last"],
        "code_samples": ["async fn handler(Json(body): Json<Payload>) {}"],
        "tags": ["rust", "axum"]
    }"#;

    #[test]
    fn parses_plain_json_reply() {
        let record = parse_summary(REPLY).unwrap();
        assert_eq!(record.title, "How to use axum extractors");
        assert_eq!(record.summary, "Use the FromRequest trait.");
        assert_eq!(record.key_points.len(), 2);
        assert_eq!(
            record.code_samples,
            vec!["async fn handler(Json(body): Json<Payload>) {}"]
        );
        assert_eq!(record.tags, vec!["rust", "axum"]);
        assert_eq!(record.source_url, None);
    }

    #[test]
    fn parses_fenced_reply() {
        let fenced = format!("```json\n{REPLY}\n```");
        let record = parse_summary(&fenced).unwrap();
        assert_eq!(record.title, "How to use axum extractors");
    }

    #[test]
    fn parses_fence_without_language_tag() {
        let fenced = format!("```\n{REPLY}\n```");
        assert!(parse_summary(&fenced).is_ok());
    }

    #[test]
    fn missing_keys_default_to_empty() {
        let record = parse_summary(r#"{"title": "only a title"}"#).unwrap();
        assert_eq!(record.title, "only a title");
        assert_eq!(record.summary, "");
        assert!(record.key_points.is_empty());
        assert!(record.code_samples.is_empty());
        assert!(record.tags.is_empty());
    }

    #[test]
    fn malformed_reply_is_a_parse_error() {
        let err = parse_summary("Sorry, I cannot produce JSON today.").unwrap_err();
        assert!(matches!(err, AppError::ParseError(_)));

        let err = parse_summary("```json\n{\"title\": \n```").unwrap_err();
        assert!(matches!(err, AppError::ParseError(_)));
    }

    #[test]
    fn strip_code_fence_leaves_plain_text_alone() {
        assert_eq!(strip_code_fence("  {\"a\": 1}  "), "{\"a\": 1}");
        assert_eq!(strip_code_fence("```json\n{}\n```"), "{}");
        assert_eq!(strip_code_fence("```\n{}\n```"), "{}");
    }
}
