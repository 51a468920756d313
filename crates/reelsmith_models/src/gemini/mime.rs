//! Video MIME type detection from file extensions.

use std::path::Path;

/// MIME type for a video path, from its extension.
///
/// Uses the MIME names the Gemini Files API documents for video input.
/// Returns `None` for unrecognized extensions; the Files API will then
/// sniff the content itself.
pub(crate) fn video_mime_for_path(path: &Path) -> Option<String> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match extension.as_str() {
        "mp4" => "video/mp4",
        "mpeg" => "video/mpeg",
        "mpg" => "video/mpg",
        "mov" => "video/mov",
        "avi" => "video/avi",
        "webm" => "video/webm",
        "wmv" => "video/wmv",
        _ => return None,
    };
    Some(mime.to_string())
}
