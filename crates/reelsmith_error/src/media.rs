//! Media upload error types.

/// Kinds of media errors.
///
/// `NotFound` and `InvalidInput` reject a bad local path before any remote
/// call is made. `UploadFailed` and `UploadTimeout` report how a remote
/// upload ended.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum MediaErrorKind {
    /// Local path does not exist
    #[display("No file found at {}", _0)]
    NotFound(String),
    /// Local path is not a regular file
    #[display("Not a regular file: {}", _0)]
    InvalidInput(String),
    /// Remote store reported a terminal failure state
    #[display("Upload ended in state {}", _0)]
    UploadFailed(String),
    /// Upload did not become ready within the bounded wait
    #[display("Upload not ready after {} seconds", waited_secs)]
    UploadTimeout {
        /// Seconds waited before giving up
        waited_secs: u64,
    },
}

/// Media error with source location tracking.
///
/// # Examples
///
/// ```
/// use reelsmith_error::{MediaError, MediaErrorKind};
///
/// let err = MediaError::new(MediaErrorKind::NotFound("clip.mp4".to_string()));
/// assert!(format!("{}", err).contains("clip.mp4"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Media Error: {} at line {} in {}", kind, line, file)]
pub struct MediaError {
    /// The kind of error that occurred
    pub kind: MediaErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl MediaError {
    /// Create a new MediaError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: MediaErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
