//! Utilities for extracting JSON payloads from model responses.
//!
//! Model responses often wrap JSON in markdown code fences or surround it
//! with explanatory text. This module pulls the payload out so validation
//! sees only the JSON itself.

use reelsmith_error::{JsonError, ReelsmithResult};

/// Extract JSON from a response that may contain markdown or extra text.
///
/// This function tries multiple extraction strategies:
/// 1. Markdown code blocks: ```json ... ```
/// 2. Balanced brackets: [ ... ]
/// 3. Balanced braces: { ... }
///
/// # Errors
///
/// Returns an error if no JSON is found in the response.
///
/// # Examples
///
/// ```
/// use reelsmith_pipeline::extract_json;
///
/// let response = "Here are your captions:\n\
///     \n\
///     ```json\n\
///     [{\"tiktok\": {}}]\n\
///     ```\n";
///
/// let json = extract_json(response).unwrap();
/// assert!(json.starts_with('['));
/// ```
pub fn extract_json(response: &str) -> ReelsmithResult<String> {
    // Strategy 1: Extract from markdown code blocks
    if let Some(json) = extract_from_code_block(response, "json") {
        return Ok(json);
    }

    // Strategy 2: Balanced delimiters, whichever opens first
    let bracket_pos = response.find('[');
    let brace_pos = response.find('{');

    match (bracket_pos, brace_pos) {
        (Some(b_pos), Some(c_pos)) if b_pos < c_pos => {
            if let Some(json) = extract_balanced(response, '[', ']') {
                return Ok(json);
            }
            if let Some(json) = extract_balanced(response, '{', '}') {
                return Ok(json);
            }
        }
        (Some(_), None) => {
            if let Some(json) = extract_balanced(response, '[', ']') {
                return Ok(json);
            }
        }
        _ => {
            if let Some(json) = extract_balanced(response, '{', '}') {
                return Ok(json);
            }
            if let Some(json) = extract_balanced(response, '[', ']') {
                return Ok(json);
            }
        }
    }

    tracing::error!(
        response_length = response.len(),
        "No JSON found in model response"
    );

    Err(JsonError::new(format!(
        "No JSON found in response (length: {})",
        response.len()
    ))
    .into())
}

/// Extract content from markdown code blocks.
///
/// Looks for patterns like:
/// - ```language\n...\n```
/// - ``` ... ``` (no language specified)
fn extract_from_code_block(response: &str, language: &str) -> Option<String> {
    // Pattern: ```language\n...\n```
    let pattern = format!("```{}", language);

    if let Some(start) = response.find(&pattern) {
        let content_start = start + pattern.len();
        if let Some(end) = response[content_start..].find("```") {
            let content = &response[content_start..content_start + end];
            return Some(content.trim().to_string());
        }
        // No closing fence found - likely truncated response
        return Some(response[content_start..].trim().to_string());
    }

    // Try without language specifier
    if let Some(start) = response.find("```") {
        let content_start = start + 3;
        // Skip to next newline (in case there's a language specifier)
        let skip_to = response[content_start..]
            .find('\n')
            .map(|n| content_start + n + 1)
            .unwrap_or(content_start);

        if let Some(end) = response[skip_to..].find("```") {
            let content = &response[skip_to..skip_to + end];
            return Some(content.trim().to_string());
        }
        // No closing fence found - likely truncated response
        return Some(response[skip_to..].trim().to_string());
    }

    None
}

/// Extract content between balanced delimiters.
///
/// Finds the first occurrence of `open` and extracts content up to
/// the matching `close`, handling nesting correctly. String literals
/// and escapes are respected so delimiters inside captions don't
/// unbalance the scan.
fn extract_balanced(response: &str, open: char, close: char) -> Option<String> {
    let start = response.find(open)?;
    let mut depth = 0;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in response[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match ch {
            '\\' => escape_next = true,
            '"' => in_string = !in_string,
            c if c == open && !in_string => depth += 1,
            c if c == close && !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(response[start..start + i + 1].to_string());
                }
            }
            _ => {}
        }
    }

    None
}
