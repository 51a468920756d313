//! End-to-end caption pipeline.

use crate::{
    CAPTION_PROMPT, RetryPolicy, UploadPolicy, extract_bundle, obtain_valid_response, upload_media,
};
use reelsmith_core::{CaptionBundle, MediaHandle, ReelsmithConfig};
use reelsmith_error::ReelsmithResult;
use reelsmith_interface::{CaptionModel, MediaStore};
use std::path::Path;
use tracing::{info, instrument, warn};

/// Video in, per-platform captions out.
///
/// Uploads the video, waits for processing, generates captions with
/// bounded retry on malformed output, and parses the result. The remote
/// file is deleted once captioning ends, whether it succeeded or not.
///
/// # Example
///
/// ```no_run
/// use reelsmith_core::ReelsmithConfig;
/// use reelsmith_models::GeminiClient;
/// use reelsmith_pipeline::CaptionPipeline;
/// use std::path::Path;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ReelsmithConfig::load()?;
/// let client = GeminiClient::with_config(&config.gemini)?;
/// let pipeline = CaptionPipeline::new(client, &config);
///
/// let bundle = pipeline.run(Path::new("clip.mp4")).await?;
/// println!("{}", bundle.tiktok().caption());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct CaptionPipeline<C> {
    client: C,
    upload: UploadPolicy,
    retry: RetryPolicy,
}

impl<C> CaptionPipeline<C>
where
    C: MediaStore + CaptionModel,
{
    /// Create a pipeline with policies taken from configuration.
    pub fn new(client: C, config: &ReelsmithConfig) -> Self {
        Self {
            client,
            upload: UploadPolicy::from(&config.upload),
            retry: RetryPolicy::from(&config.retry),
        }
    }

    /// Create a pipeline with explicit policies.
    pub fn with_policies(client: C, upload: UploadPolicy, retry: RetryPolicy) -> Self {
        Self {
            client,
            upload,
            retry,
        }
    }

    /// Produce captions for the video at `path`.
    #[instrument(skip(self), fields(path = %path.display()))]
    pub async fn run(&self, path: &Path) -> ReelsmithResult<CaptionBundle> {
        let handle = upload_media(&self.client, path, self.upload).await?;
        info!(id = %handle.id(), "Video ready, generating captions");

        let outcome = self.caption(&handle).await;
        self.release(&handle).await;
        outcome
    }

    /// Generate and parse captions for a ready upload.
    async fn caption(&self, handle: &MediaHandle) -> ReelsmithResult<CaptionBundle> {
        let payload =
            obtain_valid_response(&self.client, CAPTION_PROMPT, handle, self.retry).await?;
        extract_bundle(&payload)
    }

    /// Best-effort deletion of the remote file.
    ///
    /// A deletion failure is logged, not returned: by this point the
    /// caption outcome is decided and an orphaned remote file must not
    /// overwrite it.
    async fn release(&self, handle: &MediaHandle) {
        if let Err(e) = self.client.delete(handle).await {
            warn!(id = %handle.id(), error = %e, "Failed to delete remote file");
        }
    }
}
