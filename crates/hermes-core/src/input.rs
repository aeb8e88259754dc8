//! Input validation and URL normalization.
//!
//! Pure functions over candidate input strings. Malformed input is reported
//! through the returned value, never by panicking.

use url::Url;

use crate::error::AppError;

/// Hosts recognized as the question-hosting domain.
const QUESTION_HOSTS: [&str; 2] = ["stackoverflow.com", "www.stackoverflow.com"];

/// Minimum length for free-form question text to be considered meaningful.
pub const MIN_QUESTION_LEN: usize = 10;

/// True iff `raw` parses as a URL targeting the question-hosting domain
/// with a `/questions/` path.
pub fn is_question_url(raw: &str) -> bool {
    match Url::parse(raw) {
        Ok(parsed) => {
            parsed
                .host_str()
                .is_some_and(|host| QUESTION_HOSTS.contains(&host))
                && parsed.path().contains("/questions/")
        }
        Err(_) => false,
    }
}

/// Extract the numeric question id from a question URL, when present.
pub fn extract_question_id(raw: &str) -> Option<String> {
    let parsed = Url::parse(raw).ok()?;
    let segments: Vec<&str> = parsed.path_segments()?.collect();

    segments.windows(2).find_map(|pair| {
        let is_id = pair[0] == "questions"
            && !pair[1].is_empty()
            && pair[1].chars().all(|c| c.is_ascii_digit());
        is_id.then(|| pair[1].to_string())
    })
}

/// Shape a raw string into a canonical absolute URL: trims whitespace,
/// strips trailing slashes, prepends `https://` when no scheme is present.
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// Validate combined summarize input before any network call.
///
/// At least one field must be non-empty; a present URL must be a question
/// URL; present question text must reach [`MIN_QUESTION_LEN`] characters.
/// Whitespace-only values count as empty.
pub fn validate_input(url: Option<&str>, question: Option<&str>) -> Result<(), AppError> {
    let url = url.map(str::trim).filter(|u| !u.is_empty());
    let question = question.map(str::trim).filter(|q| !q.is_empty());

    if url.is_none() && question.is_none() {
        return Err(AppError::ValidationError(
            "Either URL or question text must be provided".into(),
        ));
    }

    if let Some(url) = url {
        if !is_question_url(url) {
            return Err(AppError::ValidationError(
                "Please provide a valid StackOverflow question URL".into(),
            ));
        }
    }

    if let Some(question) = question {
        if question.chars().count() < MIN_QUESTION_LEN {
            return Err(AppError::ValidationError(format!(
                "Question text must be at least {MIN_QUESTION_LEN} characters long"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_question_urls() {
        assert!(is_question_url(
            "https://stackoverflow.com/questions/123456/how-to-use-axum"
        ));
        assert!(is_question_url(
            "https://www.stackoverflow.com/questions/1/x"
        ));
        assert!(!is_question_url("https://stackoverflow.com/tags"));
        assert!(!is_question_url("https://example.com/questions/123456/x"));
        assert!(!is_question_url("not a url"));
        // No scheme means no host to check.
        assert!(!is_question_url("stackoverflow.com/questions/123456/x"));
    }

    #[test]
    fn extracts_numeric_question_id() {
        assert_eq!(
            extract_question_id("https://stackoverflow.com/questions/123456/x"),
            Some("123456".to_string())
        );
        assert_eq!(
            extract_question_id("https://stackoverflow.com/questions/7890"),
            Some("7890".to_string())
        );
        assert_eq!(
            extract_question_id("https://stackoverflow.com/questions/not-a-number/x"),
            None
        );
        assert_eq!(extract_question_id("https://stackoverflow.com/tags"), None);
        assert_eq!(extract_question_id("garbage"), None);
    }

    #[test]
    fn normalizes_urls() {
        assert_eq!(
            normalize_url("stackoverflow.com/questions/1/x"),
            "https://stackoverflow.com/questions/1/x"
        );
        assert_eq!(
            normalize_url("https://stackoverflow.com/questions/1/x///"),
            "https://stackoverflow.com/questions/1/x"
        );
        assert_eq!(
            normalize_url("  http://stackoverflow.com/questions/1 "),
            "http://stackoverflow.com/questions/1"
        );
    }

    #[test]
    fn rejects_empty_input_with_reason() {
        let err = validate_input(None, None).unwrap_err();
        let reason = err.to_string();
        assert!(!reason.is_empty());
        assert!(reason.contains("must be provided"));

        // Whitespace-only counts as empty.
        assert!(validate_input(Some("   "), Some("")).is_err());
    }

    #[test]
    fn rejects_non_question_urls() {
        let err = validate_input(Some("https://example.com/questions/1/x"), None).unwrap_err();
        assert!(err.to_string().contains("StackOverflow"));
    }

    #[test]
    fn enforces_minimum_question_length() {
        let err = validate_input(None, Some("hi")).unwrap_err();
        assert!(err.to_string().contains("at least 10 characters"));

        assert!(validate_input(None, Some("how do I use axum extractors?")).is_ok());
        // Exactly at the boundary.
        assert!(validate_input(None, Some("1234567890")).is_ok());
        assert!(validate_input(None, Some("123456789")).is_err());
    }

    #[test]
    fn accepts_valid_question_url() {
        assert!(validate_input(Some("https://stackoverflow.com/questions/123456/x"), None).is_ok());
    }
}
