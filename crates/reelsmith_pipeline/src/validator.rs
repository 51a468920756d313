//! Structural validation of caption payloads.
//!
//! The prompt asks for a JSON array holding exactly one object with a
//! `tiktok` and an `instagram` section. Models usually comply, but not
//! always; this module checks the shape directly and reports every
//! violation it finds, so retry logs say what was wrong instead of just
//! that something was.

use reelsmith_core::Platform;
use serde_json::Value;
use strum::IntoEnumIterator;

/// Check a JSON payload against the expected caption shape.
///
/// Returns one message per violation; an empty list means the payload is
/// well-formed. A payload that is not valid JSON at all yields a single
/// decode message.
///
/// The expected shape:
/// - top-level array with exactly one object
/// - a section per platform (`tiktok`, `instagram`)
/// - each section has a string `caption` and string arrays `virality`
///   and `relevance`
///
/// Array lengths are not checked. The prompt asks for five hashtags per
/// list, but a usable response with four is better than another model
/// round-trip.
///
/// # Examples
///
/// ```
/// use reelsmith_pipeline::validate;
///
/// let payload = r#"[{
///     "tiktok": {"caption": "A", "virality": [], "relevance": []},
///     "instagram": {"caption": "B", "virality": [], "relevance": []}
/// }]"#;
/// assert!(validate(payload).is_empty());
///
/// let issues = validate(r#"[{"tiktok": {}}]"#);
/// assert!(!issues.is_empty());
/// ```
pub fn validate(payload: &str) -> Vec<String> {
    let mut issues = Vec::new();

    let value: Value = match serde_json::from_str(payload) {
        Ok(value) => value,
        Err(e) => {
            issues.push(format!("payload is not valid JSON: {}", e));
            return issues;
        }
    };

    let Some(entries) = value.as_array() else {
        issues.push("top-level value is not an array".to_string());
        return issues;
    };
    if entries.len() != 1 {
        issues.push(format!(
            "expected an array with exactly one entry, found {}",
            entries.len()
        ));
        return issues;
    }
    let Some(entry) = entries[0].as_object() else {
        issues.push("array entry is not an object".to_string());
        return issues;
    };

    for platform in Platform::iter() {
        let key = platform.key();
        let Some(section) = entry.get(key) else {
            issues.push(format!("{} section is missing", key));
            continue;
        };
        let Some(section) = section.as_object() else {
            issues.push(format!("{} section is not an object", key));
            continue;
        };

        match section.get("caption") {
            Some(Value::String(_)) => {}
            Some(_) => issues.push(format!("{} caption is not a string", key)),
            None => issues.push(format!("{} caption is missing", key)),
        }

        for field in ["virality", "relevance"] {
            match section.get(field) {
                Some(Value::Array(tags)) => {
                    if !tags.iter().all(Value::is_string) {
                        issues.push(format!("{} {} contains non-string entries", key, field));
                    }
                }
                Some(_) => issues.push(format!("{} {} is not a list", key, field)),
                None => issues.push(format!("{} {} is missing", key, field)),
            }
        }
    }

    issues
}

/// True when [`validate`] finds no violations.
pub fn is_well_formed(payload: &str) -> bool {
    validate(payload).is_empty()
}
