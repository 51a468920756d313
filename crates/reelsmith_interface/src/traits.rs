//! Trait definitions for media stores and caption models.

use async_trait::async_trait;
use reelsmith_core::MediaHandle;
use reelsmith_error::ReelsmithResult;
use std::path::Path;

/// Remote file storage for media referenced by generation requests.
///
/// Implementations upload local files, report processing state, and delete
/// remote files once the caller is done with them.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Upload a local file and return its remote handle.
    ///
    /// The returned handle may still be in the pending state; callers poll
    /// [`status`](MediaStore::status) until the state is terminal.
    async fn upload(&self, path: &Path) -> ReelsmithResult<MediaHandle>;

    /// Fetch the current state of a previously uploaded file.
    async fn status(&self, id: &str) -> ReelsmithResult<MediaHandle>;

    /// Delete a remote file.
    async fn delete(&self, handle: &MediaHandle) -> ReelsmithResult<()>;
}

/// Core trait that all caption model backends must implement.
///
/// This provides the minimal interface for producing raw model text from a
/// prompt and an uploaded media file.
#[async_trait]
pub trait CaptionModel: Send + Sync {
    /// Generate raw model text for the prompt and the referenced media.
    async fn generate(&self, prompt: &str, media: &MediaHandle) -> ReelsmithResult<String>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gemini-2.5-flash").
    fn model_name(&self) -> &str;
}

/// Trait for media stores that accept video uploads.
pub trait VideoCapabilities: MediaStore {
    /// Supported video file extensions.
    fn supported_video_extensions(&self) -> &[&'static str] {
        &["mp4", "mpeg", "mov", "avi", "mpg", "webm", "wmv"]
    }

    /// Maximum video file size in bytes.
    fn max_video_size_bytes(&self) -> u64 {
        2 * 1024 * 1024 * 1024 // 2GB default
    }
}
