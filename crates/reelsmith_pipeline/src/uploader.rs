//! Upload workflow: precondition checks and bounded readiness polling.

use reelsmith_core::{MediaHandle, MediaState, UploadConfig};
use reelsmith_error::{MediaError, MediaErrorKind, ReelsmithResult};
use reelsmith_interface::MediaStore;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Bounds on the upload wait loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadPolicy {
    /// Delay between processing-state polls.
    pub poll_interval: Duration,
    /// Total time to wait for a terminal state.
    pub max_wait: Duration,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self::from(&UploadConfig::default())
    }
}

impl From<&UploadConfig> for UploadPolicy {
    fn from(config: &UploadConfig) -> Self {
        Self {
            poll_interval: config.poll_interval(),
            max_wait: config.max_wait(),
        }
    }
}

/// Upload a local video and wait until the store reports it ready.
///
/// The local path is checked before any remote call: a missing path or a
/// path that is not a regular file fails without touching the store. Once
/// uploaded, the file's state is polled until ready, failed, or the wait
/// budget runs out. On failure or timeout the remote file is deleted
/// best-effort before the error returns, so no orphan survives this
/// function.
///
/// # Errors
///
/// - [`MediaErrorKind::NotFound`] when nothing exists at `path`
/// - [`MediaErrorKind::InvalidInput`] when `path` is not a regular file
/// - [`MediaErrorKind::UploadFailed`] when processing ends in the failed state
/// - [`MediaErrorKind::UploadTimeout`] when the wait budget elapses first
#[instrument(skip(store), fields(path = %path.display()))]
pub async fn upload_media<S: MediaStore>(
    store: &S,
    path: &Path,
    policy: UploadPolicy,
) -> ReelsmithResult<MediaHandle> {
    if !path.exists() {
        return Err(MediaError::new(MediaErrorKind::NotFound(path.display().to_string())).into());
    }
    if !path.is_file() {
        return Err(
            MediaError::new(MediaErrorKind::InvalidInput(path.display().to_string())).into(),
        );
    }

    let handle = store.upload(path).await?;
    debug!(id = %handle.id(), "Upload registered, awaiting ready state");

    let outcome =
        match tokio::time::timeout(policy.max_wait, await_ready(store, &handle, policy)).await {
            Ok(result) => result,
            Err(_) => Err(MediaError::new(MediaErrorKind::UploadTimeout {
                waited_secs: policy.max_wait.as_secs(),
            })
            .into()),
        };

    match outcome {
        Ok(ready) => Ok(ready),
        Err(e) => {
            // The file exists remotely but will never be used
            release_after_failure(store, &handle).await;
            Err(e)
        }
    }
}

/// Poll until the store reports a terminal state.
async fn await_ready<S: MediaStore>(
    store: &S,
    handle: &MediaHandle,
    policy: UploadPolicy,
) -> ReelsmithResult<MediaHandle> {
    let mut current = handle.clone();
    loop {
        match current.state() {
            MediaState::Ready => return Ok(current),
            MediaState::Failed => {
                return Err(MediaError::new(MediaErrorKind::UploadFailed(
                    current.state().to_string(),
                ))
                .into());
            }
            MediaState::Pending => {
                tokio::time::sleep(policy.poll_interval).await;
                current = store.status(current.id()).await?;
            }
        }
    }
}

/// Best-effort delete of a file that failed to become usable.
async fn release_after_failure<S: MediaStore>(store: &S, handle: &MediaHandle) {
    if let Err(e) = store.delete(handle).await {
        warn!(id = %handle.id(), error = %e, "Failed to delete remote file after upload failure");
    }
}
