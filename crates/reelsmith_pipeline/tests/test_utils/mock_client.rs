//! Mock provider client for pipeline tests.

use async_trait::async_trait;
use reelsmith_core::{MediaHandle, MediaState};
use reelsmith_error::{GeminiError, GeminiErrorKind, ReelsmithResult};
use reelsmith_interface::{CaptionModel, MediaStore};
use std::collections::VecDeque;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Behavior configuration for mock generation responses.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always return success with the given text
    Success(String),
    /// Always return the specified error
    Error(GeminiErrorKind),
    /// Return responses in order; error once the sequence is exhausted
    Sequence(Vec<MockResponse>),
}

/// A single mock response (success or error).
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(String),
    Error(GeminiErrorKind),
}

#[derive(Debug, Default)]
struct CallCounts {
    upload: usize,
    status: usize,
    generate: usize,
    delete: usize,
}

/// Mock client implementing both pipeline seams.
///
/// Upload behavior is configured through the initial state and a queue of
/// poll states; generation behavior through [`MockBehavior`]. Call counts
/// let tests verify exactly which remote operations ran; clones share the
/// counters, so a clone kept outside the pipeline can still read them.
#[derive(Clone)]
pub struct MockClient {
    behavior: MockBehavior,
    upload_state: MediaState,
    poll_states: Arc<Mutex<VecDeque<MediaState>>>,
    counts: Arc<Mutex<CallCounts>>,
    fail_delete: bool,
}

impl MockClient {
    /// Mock whose generation always succeeds with the given text.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::new_with_behavior(MockBehavior::Success(text.into()))
    }

    /// Mock whose generation always fails with the given error.
    #[allow(dead_code)]
    pub fn new_error(error: GeminiErrorKind) -> Self {
        Self::new_with_behavior(MockBehavior::Error(error))
    }

    /// Mock that generates a sequence of responses.
    #[allow(dead_code)]
    pub fn new_sequence(responses: Vec<MockResponse>) -> Self {
        Self::new_with_behavior(MockBehavior::Sequence(responses))
    }

    /// Mock with custom generation behavior and a ready upload.
    pub fn new_with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            upload_state: MediaState::Ready,
            poll_states: Arc::new(Mutex::new(VecDeque::new())),
            counts: Arc::new(Mutex::new(CallCounts::default())),
            fail_delete: false,
        }
    }

    /// State reported by the initial upload response.
    #[allow(dead_code)]
    pub fn with_upload_state(mut self, state: MediaState) -> Self {
        self.upload_state = state;
        self
    }

    /// States reported by successive status polls; the last one repeats
    /// forever, so a single `Pending` simulates a file that never settles.
    #[allow(dead_code)]
    pub fn with_poll_states(self, states: Vec<MediaState>) -> Self {
        *self.poll_states.lock().unwrap() = states.into();
        self
    }

    /// Make delete calls fail.
    #[allow(dead_code)]
    pub fn with_failing_delete(mut self) -> Self {
        self.fail_delete = true;
        self
    }

    /// Number of upload calls so far.
    #[allow(dead_code)]
    pub fn upload_count(&self) -> usize {
        self.counts.lock().unwrap().upload
    }

    /// Number of status polls so far.
    #[allow(dead_code)]
    pub fn status_count(&self) -> usize {
        self.counts.lock().unwrap().status
    }

    /// Number of generation calls so far.
    #[allow(dead_code)]
    pub fn generate_count(&self) -> usize {
        self.counts.lock().unwrap().generate
    }

    /// Number of delete calls so far.
    #[allow(dead_code)]
    pub fn delete_count(&self) -> usize {
        self.counts.lock().unwrap().delete
    }

    fn handle(&self, state: MediaState) -> MediaHandle {
        MediaHandle::new(
            "files/mock-video".to_string(),
            "https://example.com/files/mock-video".to_string(),
            state,
            Some("video/mp4".to_string()),
        )
    }

    fn next_poll_state(&self) -> MediaState {
        let mut states = self.poll_states.lock().unwrap();
        if states.len() > 1 {
            states.pop_front().unwrap_or(MediaState::Ready)
        } else {
            states.front().copied().unwrap_or(MediaState::Ready)
        }
    }

    fn next_generation(&self) -> ReelsmithResult<String> {
        let current = {
            let mut counts = self.counts.lock().unwrap();
            let current = counts.generate;
            counts.generate += 1;
            current
        };

        match &self.behavior {
            MockBehavior::Success(text) => Ok(text.clone()),
            MockBehavior::Error(kind) => Err(GeminiError::new(kind.clone()).into()),
            MockBehavior::Sequence(responses) => match responses.get(current) {
                Some(MockResponse::Success(text)) => Ok(text.clone()),
                Some(MockResponse::Error(kind)) => Err(GeminiError::new(kind.clone()).into()),
                None => Err(GeminiError::new(GeminiErrorKind::ApiRequest(format!(
                    "Mock sequence exhausted (call {} beyond {} responses)",
                    current + 1,
                    responses.len()
                )))
                .into()),
            },
        }
    }
}

#[async_trait]
impl MediaStore for MockClient {
    async fn upload(&self, _path: &Path) -> ReelsmithResult<MediaHandle> {
        // Tiny delay to keep the async paths honest
        tokio::time::sleep(tokio::time::Duration::from_millis(1)).await;
        self.counts.lock().unwrap().upload += 1;
        Ok(self.handle(self.upload_state))
    }

    async fn status(&self, _id: &str) -> ReelsmithResult<MediaHandle> {
        self.counts.lock().unwrap().status += 1;
        Ok(self.handle(self.next_poll_state()))
    }

    async fn delete(&self, _handle: &MediaHandle) -> ReelsmithResult<()> {
        self.counts.lock().unwrap().delete += 1;
        if self.fail_delete {
            Err(GeminiError::new(GeminiErrorKind::ApiRequest(
                "mock delete failure".to_string(),
            ))
            .into())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CaptionModel for MockClient {
    async fn generate(&self, _prompt: &str, _media: &MediaHandle) -> ReelsmithResult<String> {
        tokio::time::sleep(tokio::time::Duration::from_millis(1)).await;
        self.next_generation()
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-caption-model"
    }
}
