//! Remote media handle types.

use serde::{Deserialize, Serialize};

/// Processing state of an uploaded media file.
///
/// # Examples
///
/// ```
/// use reelsmith_core::MediaState;
///
/// let state = MediaState::Pending;
/// assert!(!state.is_terminal());
/// assert!(MediaState::Ready.is_terminal());
/// assert_eq!(format!("{}", MediaState::Failed), "failed");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum MediaState {
    /// The provider is still processing the upload.
    #[display("pending")]
    Pending,
    /// The file is ready for use in generation requests.
    #[display("ready")]
    Ready,
    /// Processing ended in failure; the file is unusable.
    #[display("failed")]
    Failed,
}

impl MediaState {
    /// Returns true once the provider will no longer change the state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, MediaState::Ready | MediaState::Failed)
    }
}

/// Reference to a file uploaded to a remote media store.
///
/// The `id` is the provider-assigned resource name used for status polls
/// and deletion. The `uri` is what generation requests reference.
///
/// # Examples
///
/// ```
/// use reelsmith_core::{MediaHandle, MediaState};
///
/// let handle = MediaHandle::new(
///     "files/abc123".to_string(),
///     "https://example.com/files/abc123".to_string(),
///     MediaState::Ready,
///     Some("video/mp4".to_string()),
/// );
///
/// assert_eq!(handle.id(), "files/abc123");
/// assert_eq!(*handle.state(), MediaState::Ready);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_new::new,
    derive_getters::Getters,
    derive_builder::Builder,
)]
pub struct MediaHandle {
    /// Provider-assigned resource name, e.g. `files/abc123`.
    id: String,
    /// URI referenced by generation requests.
    uri: String,
    /// Last observed processing state.
    state: MediaState,
    /// MIME type reported by the provider.
    #[serde(default)]
    #[builder(default)]
    mime_type: Option<String>,
}

impl MediaHandle {
    /// Returns a copy of this handle with the state replaced.
    pub fn with_state(&self, state: MediaState) -> Self {
        Self {
            state,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_states() {
        assert!(!MediaState::Pending.is_terminal());
        assert!(MediaState::Ready.is_terminal());
        assert!(MediaState::Failed.is_terminal());
    }

    #[test]
    fn handle_state_replacement() {
        let handle = MediaHandle::new(
            "files/xyz".to_string(),
            "https://example.com/files/xyz".to_string(),
            MediaState::Pending,
            None,
        );
        let ready = handle.with_state(MediaState::Ready);
        assert_eq!(ready.id(), handle.id());
        assert_eq!(*ready.state(), MediaState::Ready);
        assert_eq!(*handle.state(), MediaState::Pending);
    }

    #[test]
    fn handle_builder() {
        let handle = MediaHandleBuilder::default()
            .id("files/b1".to_string())
            .uri("https://example.com/files/b1".to_string())
            .state(MediaState::Ready)
            .build()
            .unwrap();
        assert!(handle.mime_type().is_none());
    }
}
