//! Recovering JSON from model text.
//!
//! Drivers without schema support, and models that ignore it, tend to wrap
//! the object in a markdown fence or surround it with prose.

use lore_error::{GenerationError, GenerationErrorKind, LoreResult};

/// Extract a JSON object from a response that may contain markdown or extra text.
///
/// Strategies, in order:
/// 1. A fenced code block (```` ```json ```` or bare ```` ``` ````)
/// 2. The first balanced `{ ... }` that parses as JSON
///
/// # Errors
///
/// Returns [`GenerationErrorKind::MalformedOutput`] when no object is found.
///
/// # Examples
///
/// ```
/// use lore_flows::extract_json;
///
/// let response = "Here is your story:\n```json\n{\"title\": \"Ash\", \"story\": \"...\"}\n```";
/// let json = extract_json(response).unwrap();
/// assert!(json.starts_with('{'));
/// ```
pub fn extract_json(response: &str) -> LoreResult<String> {
    if let Some(block) = extract_from_code_block(response)
        && let Some(object) = extract_object(&block)
    {
        return Ok(object);
    }

    if let Some(object) = extract_object(response) {
        return Ok(object);
    }

    tracing::warn!(
        response_length = response.len(),
        "No JSON object found in model response"
    );

    Err(GenerationError::new(GenerationErrorKind::MalformedOutput(format!(
        "No JSON object found in response (length: {})",
        response.len()
    )))
    .into())
}

/// Content of the first markdown code block.
///
/// A block missing its closing fence (truncated output) runs to the end of
/// the response.
fn extract_from_code_block(response: &str) -> Option<String> {
    let start = response.find("```")?;
    let content_start = start + 3;
    // Skip the language tag, if any
    let skip_to = response[content_start..]
        .find('\n')
        .map(|n| content_start + n + 1)
        .unwrap_or(content_start);

    let content = match response[skip_to..].find("```") {
        Some(end) => &response[skip_to..skip_to + end],
        None => &response[skip_to..],
    };
    Some(content.trim().to_string())
}

/// The first balanced object that is valid JSON.
///
/// Braces in surrounding prose (`{as requested}`) are skipped. When no
/// candidate parses, the first balanced one is returned so the caller
/// reports the parse error.
fn extract_object(text: &str) -> Option<String> {
    let mut first = None;
    for (start, _) in text.match_indices('{') {
        let Some(candidate) = extract_balanced(&text[start..], '{', '}') else {
            continue;
        };
        if serde_json::from_str::<serde_json::Value>(&candidate).is_ok() {
            return Some(candidate);
        }
        first.get_or_insert(candidate);
    }
    first
}

/// Content between the first `open` and its matching `close`.
///
/// Delimiters inside string literals are ignored.
fn extract_balanced(response: &str, open: char, close: char) -> Option<String> {
    let start = response.find(open)?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in response[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match ch {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            c if c == open && !in_string => depth += 1,
            c if c == close && !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(response[start..start + i + ch.len_utf8()].to_string());
                }
            }
            _ => {}
        }
    }

    None
}
