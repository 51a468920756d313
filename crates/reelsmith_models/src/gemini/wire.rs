//! Request and response types for the Gemini REST API.
//!
//! These models match the JSON schemas of the Files API and the
//! `generateContent` endpoint. They are private to the gemini module;
//! callers see [`MediaHandle`](reelsmith_core::MediaHandle) and plain
//! strings instead.

use reelsmith_core::{MediaHandle, MediaState};
use serde::{Deserialize, Serialize};

/// Body of the resumable upload start request.
#[derive(Debug, Serialize)]
pub(crate) struct StartUploadRequest {
    pub file: FileMetadata,
}

/// Metadata sent when registering an upload.
#[derive(Debug, Serialize)]
pub(crate) struct FileMetadata {
    pub display_name: String,
}

/// File resource returned by the Files API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FileInfo {
    pub name: String,
    pub uri: String,
    pub state: String,
    #[serde(default)]
    pub mime_type: Option<String>,
}

/// Wrapper around the file resource in upload finalize responses.
#[derive(Debug, Deserialize)]
pub(crate) struct UploadFileResponse {
    pub file: FileInfo,
}

impl FileInfo {
    /// Convert the wire resource into a provider-neutral handle.
    ///
    /// `PROCESSING` maps to pending and `ACTIVE` to ready. `FAILED` and
    /// any state this client does not recognize map to failed, so callers
    /// never wait on a state that will not progress.
    pub fn into_handle(self) -> MediaHandle {
        let state = match self.state.as_str() {
            "PROCESSING" => MediaState::Pending,
            "ACTIVE" => MediaState::Ready,
            _ => MediaState::Failed,
        };
        MediaHandle::new(self.name, self.uri, state, self.mime_type)
    }
}

/// Body of a `generateContent` request.
#[derive(Debug, Serialize)]
pub(crate) struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

/// A single conversation turn.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// One part of a turn: text or a reference to an uploaded file.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_data: Option<FileData>,
}

impl Part {
    /// Text part.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            text: Some(value.into()),
            file_data: None,
        }
    }

    /// File reference part.
    pub fn file_data(mime_type: Option<String>, file_uri: String) -> Self {
        Self {
            text: None,
            file_data: Some(FileData {
                mime_type,
                file_uri,
            }),
        }
    }
}

/// Reference to a file previously uploaded through the Files API.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FileData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    pub file_uri: String,
}

/// Response body of `generateContent`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Option<Vec<Candidate>>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

/// One generation candidate.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    #[allow(dead_code)]
    pub finish_reason: Option<String>,
}

/// Safety feedback on the prompt itself.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if any text came back.
    pub fn text(&self) -> Option<String> {
        let candidate = self.candidates.as_ref()?.first()?;
        let content = candidate.content.as_ref()?;
        let pieces: Vec<&str> = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        if pieces.is_empty() {
            None
        } else {
            Some(pieces.concat())
        }
    }
}

/// Error envelope returned on non-2xx responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiError {
    pub error: ApiErrorDetail,
}

/// Error payload inside the envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorDetail {
    pub message: String,
    #[serde(default)]
    #[allow(dead_code)]
    pub code: Option<i32>,
    #[serde(default)]
    #[allow(dead_code)]
    pub status: Option<String>,
}
