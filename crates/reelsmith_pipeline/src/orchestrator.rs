//! Bounded retry loop for malformed model responses.

use crate::{extract_json, validator};
use reelsmith_core::{MediaHandle, RetryConfig};
use reelsmith_error::{
    CaptionError, CaptionErrorKind, ReelsmithResult, RetryableError,
};
use reelsmith_interface::CaptionModel;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio_retry2::{Retry, RetryError, strategy::ExponentialBackoff, strategy::jitter};
use tracing::{debug, instrument, warn};

/// Bounds on the generation retry loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total generation attempts, counting the first.
    pub max_attempts: usize,
    /// Backoff seed before the first re-attempt.
    pub initial_backoff: Duration,
    /// Ceiling on backoff growth.
    pub max_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from(&RetryConfig::default())
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self {
            // Zero attempts would never call the model
            max_attempts: config.max_attempts.max(1),
            initial_backoff: config.initial_backoff(),
            max_backoff: config.max_backoff(),
        }
    }
}

/// Generate until the model returns a well-formed caption payload.
///
/// Each attempt calls the model, extracts the JSON payload from the raw
/// response, and validates its shape. A malformed response triggers
/// another attempt with exponential backoff and jitter; transport and
/// safety errors fail immediately. Returns the extracted payload of the
/// first well-formed response.
///
/// # Errors
///
/// Returns [`CaptionErrorKind::ExhaustedRetries`] with the attempt count
/// once the budget is spent, or the underlying error for non-retryable
/// failures.
#[instrument(skip(model, prompt, media), fields(model = model.model_name(), id = %media.id()))]
pub async fn obtain_valid_response<M: CaptionModel>(
    model: &M,
    prompt: &str,
    media: &MediaHandle,
    policy: RetryPolicy,
) -> ReelsmithResult<String> {
    let strategy = ExponentialBackoff::from_millis(policy.initial_backoff.as_millis() as u64)
        .factor(2)
        .max_delay(policy.max_backoff)
        .map(jitter)
        .take(policy.max_attempts.saturating_sub(1));

    let attempts = AtomicUsize::new(0);

    let result = Retry::spawn(strategy, || {
        attempts.fetch_add(1, Ordering::SeqCst);
        async move {
            match attempt(model, prompt, media).await {
                Ok(payload) => Ok(payload),
                Err(e) if e.is_retryable() => {
                    warn!(error = %e, "Malformed model response, will retry");
                    Err(RetryError::Transient {
                        err: e,
                        retry_after: None,
                    })
                }
                Err(e) => Err(RetryError::Permanent(e)),
            }
        }
    })
    .await;

    match result {
        Ok(payload) => Ok(payload),
        Err(e) if e.is_retryable() => {
            let attempts = attempts.load(Ordering::SeqCst);
            warn!(attempts, "Retry budget exhausted without a well-formed response");
            Err(CaptionError::new(CaptionErrorKind::ExhaustedRetries { attempts }).into())
        }
        Err(e) => Err(e),
    }
}

/// One generation attempt: call the model, extract, validate.
async fn attempt<M: CaptionModel>(
    model: &M,
    prompt: &str,
    media: &MediaHandle,
) -> ReelsmithResult<String> {
    let raw = model.generate(prompt, media).await?;

    let Ok(payload) = extract_json(&raw) else {
        return Err(CaptionError::new(CaptionErrorKind::Malformed {
            issues: vec!["no JSON payload in response".to_string()],
        })
        .into());
    };

    let issues = validator::validate(&payload);
    if issues.is_empty() {
        Ok(payload)
    } else {
        debug!(?issues, "Response failed validation");
        Err(CaptionError::new(CaptionErrorKind::Malformed { issues }).into())
    }
}
