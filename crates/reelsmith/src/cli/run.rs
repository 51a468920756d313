//! Caption generation and validation command handlers.

use super::commands::OutputFormat;
use reelsmith::render::render_bundle;
use reelsmith::{
    CaptionError, CaptionErrorKind, CaptionPipeline, GeminiClient, JsonError, MediaError,
    MediaErrorKind, ReelsmithConfig, ReelsmithResult, VideoCapabilities, extract_json, validate,
};
use std::path::Path;
use tracing::{debug, warn};

/// Run the caption pipeline for a local video and present the results.
pub async fn run_caption(video: &Path, format: OutputFormat) -> ReelsmithResult<()> {
    let config = ReelsmithConfig::load()?;
    let client = GeminiClient::with_config(&config.gemini)?;

    warn_on_unknown_extension(video, &client);

    let pipeline = CaptionPipeline::new(client, &config);
    let bundle = pipeline.run(video).await?;

    match format {
        OutputFormat::Stream => {
            render_bundle(&bundle).await;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&bundle)
                .map_err(|e| JsonError::new(e.to_string()))?;
            println!("{}", json);
        }
    }

    Ok(())
}

/// Check a saved model response document against the expected shape.
pub async fn validate_document(document: &Path) -> ReelsmithResult<()> {
    if !document.exists() {
        return Err(
            MediaError::new(MediaErrorKind::NotFound(document.display().to_string())).into(),
        );
    }
    let raw = std::fs::read_to_string(document).map_err(|e| {
        MediaError::new(MediaErrorKind::InvalidInput(format!(
            "{}: {}",
            document.display(),
            e
        )))
    })?;

    let payload = extract_json(&raw)?;

    let issues = validate(&payload);
    if issues.is_empty() {
        println!("Response document is well-formed");
        Ok(())
    } else {
        eprintln!("Response document has {} issue(s):", issues.len());
        for issue in &issues {
            eprintln!("  - {}", issue);
        }
        Err(CaptionError::new(CaptionErrorKind::Malformed { issues }).into())
    }
}

/// The remote surface decides what it accepts; an unexpected extension is
/// worth a warning but not a refusal.
fn warn_on_unknown_extension(video: &Path, client: &GeminiClient) {
    let extension = video
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension {
        Some(ext) if client.supported_video_extensions().iter().any(|c| *c == ext) => {
            debug!(extension = %ext, "Recognized video container");
        }
        Some(ext) => {
            warn!(extension = %ext, "Unrecognized video extension, the upload may be rejected");
        }
        None => {
            warn!("Video path has no extension, the upload may be rejected");
        }
    }
}
