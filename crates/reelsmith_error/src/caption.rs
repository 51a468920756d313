//! Caption response error types and retry discrimination.

/// Kinds of caption response errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum CaptionErrorKind {
    /// Response failed structural validation.
    ///
    /// Consumed inside the retry loop; callers observe `ExhaustedRetries`
    /// once the attempt cap is hit, never this variant.
    #[display("Malformed model response: {}", issues.join("; "))]
    Malformed {
        /// One entry per structural check that failed
        issues: Vec<String>,
    },
    /// No well-formed response within the attempt cap
    #[display("No well-formed response after {} attempts", attempts)]
    ExhaustedRetries {
        /// Inference calls made before giving up
        attempts: usize,
    },
    /// Validated text failed to decode into the expected shape
    #[display("Failed to decode response: {}", _0)]
    Decode(String),
    /// Platform key missing from a response handed to the parser
    #[display("Platform {} missing from response", _0)]
    MissingPlatform(String),
}

impl CaptionErrorKind {
    /// Check if this error type should be retried.
    ///
    /// Only `Malformed` is retryable: the model may produce a conforming
    /// response on re-query. Everything else is a contract violation or a
    /// terminal outcome.
    pub fn is_retryable(&self) -> bool {
        matches!(self, CaptionErrorKind::Malformed { .. })
    }
}

/// Caption error with source location tracking.
///
/// # Examples
///
/// ```
/// use reelsmith_error::{CaptionError, CaptionErrorKind};
///
/// let err = CaptionError::new(CaptionErrorKind::ExhaustedRetries { attempts: 4 });
/// assert!(format!("{}", err).contains("4 attempts"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Caption Error: {} at line {} in {}", kind, line, file)]
pub struct CaptionError {
    /// The kind of error that occurred
    pub kind: CaptionErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl CaptionError {
    /// Create a new CaptionError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CaptionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Trait for errors that support retry logic.
///
/// Malformed model output is the one retriable condition in the pipeline;
/// transport, path, and upload failures are permanent.
///
/// # Examples
///
/// ```
/// use reelsmith_error::{CaptionError, CaptionErrorKind, RetryableError};
///
/// let err = CaptionError::new(CaptionErrorKind::Malformed {
///     issues: vec!["tiktok: caption is not a string".to_string()],
/// });
/// assert!(err.is_retryable());
/// ```
pub trait RetryableError {
    /// Returns true if this error should trigger a retry.
    fn is_retryable(&self) -> bool;
}

impl RetryableError for CaptionError {
    fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}
