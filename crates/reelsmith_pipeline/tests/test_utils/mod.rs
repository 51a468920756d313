//! Shared fixtures for pipeline integration tests.

pub mod mock_client;

#[allow(unused_imports)]
pub use mock_client::{MockBehavior, MockClient, MockResponse};

use reelsmith_core::{MediaHandle, MediaState};
use std::path::PathBuf;
use tempfile::TempDir;

/// A response payload that passes structural validation.
#[allow(dead_code)]
pub const WELL_FORMED: &str = r##"[
  {
    "tiktok": {
      "caption": "Great day! #fun",
      "virality": ["#a", "#b", "#c", "#d", "#e"],
      "relevance": ["#f", "#g", "#h", "#i", "#j"]
    },
    "instagram": {
      "caption": "Sunsets #chill and chill",
      "virality": ["#k", "#l", "#m", "#n", "#o"],
      "relevance": ["#p", "#q", "#r", "#s", "#t"]
    }
  }
]"##;

/// A payload that parses as JSON but fails structural validation.
#[allow(dead_code)]
pub const MALFORMED: &str = r#"[{"tiktok": {"caption": 42}}]"#;

/// Wraps a payload in a fenced code block the way models often answer.
#[allow(dead_code)]
pub fn fenced(payload: &str) -> String {
    format!("Here you go:\n```json\n{payload}\n```\nEnjoy!")
}

/// A handle in the ready state, as the uploader hands over to generation.
#[allow(dead_code)]
pub fn ready_handle() -> MediaHandle {
    MediaHandle::new(
        "files/mock-video".to_string(),
        "https://example.com/files/mock-video".to_string(),
        MediaState::Ready,
        Some("video/mp4".to_string()),
    )
}

/// Creates a throwaway video file and returns the directory guard with it.
///
/// The guard must stay alive for the duration of the test or the file
/// disappears from under the pipeline.
#[allow(dead_code)]
pub fn temp_video() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("clip.mp4");
    std::fs::write(&path, b"not really a video").expect("failed to write temp video");
    (dir, path)
}
