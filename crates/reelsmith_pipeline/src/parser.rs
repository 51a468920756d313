//! Parsing validated payloads into caption content.

use regex::Regex;
use reelsmith_core::{CaptionBundle, Platform, PlatformContent};
use reelsmith_error::{CaptionError, CaptionErrorKind, ReelsmithResult};
use serde::Deserialize;
use std::sync::OnceLock;

/// One platform section as it appears in the payload.
#[derive(Debug, Deserialize)]
struct PlatformSection {
    caption: String,
    virality: Vec<String>,
    relevance: Vec<String>,
}

fn hashtag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"#\w+").expect("hashtag pattern is valid"))
}

/// Remove inline `#word` hashtags from caption text.
///
/// Only the tags themselves are removed; surrounding whitespace is left
/// as the model wrote it. A bare `#` with no word characters after it is
/// not a hashtag and stays.
///
/// # Examples
///
/// ```
/// use reelsmith_pipeline::strip_hashtags;
///
/// assert_eq!(strip_hashtags("Great day! #fun"), "Great day! ");
/// assert_eq!(strip_hashtags("no tags here"), "no tags here");
/// ```
pub fn strip_hashtags(caption: &str) -> String {
    hashtag_pattern().replace_all(caption, "").into_owned()
}

/// Extract content for one platform from a validated payload.
///
/// The caption comes back with inline hashtags stripped; the hashtag
/// lists are returned as the model wrote them.
///
/// # Errors
///
/// Returns an error if the payload does not decode or the platform
/// section is absent. Run [`validate`](crate::validate) first to turn
/// shape problems into retries instead.
pub fn extract_platform(payload: &str, platform: Platform) -> ReelsmithResult<PlatformContent> {
    let entries: Vec<serde_json::Map<String, serde_json::Value>> = serde_json::from_str(payload)
        .map_err(|e| CaptionError::new(CaptionErrorKind::Decode(e.to_string())))?;
    let entry = entries.first().ok_or_else(|| {
        CaptionError::new(CaptionErrorKind::Decode("payload array is empty".to_string()))
    })?;

    let section = entry.get(platform.key()).ok_or_else(|| {
        CaptionError::new(CaptionErrorKind::MissingPlatform(platform.key().to_string()))
    })?;
    let section: PlatformSection = serde_json::from_value(section.clone())
        .map_err(|e| CaptionError::new(CaptionErrorKind::Decode(e.to_string())))?;

    Ok(PlatformContent::new(
        strip_hashtags(&section.caption),
        section.virality,
        section.relevance,
    ))
}

/// Extract content for every platform into a bundle.
pub fn extract_bundle(payload: &str) -> ReelsmithResult<CaptionBundle> {
    Ok(CaptionBundle::new(
        extract_platform(payload, Platform::TikTok)?,
        extract_platform(payload, Platform::Instagram)?,
    ))
}
