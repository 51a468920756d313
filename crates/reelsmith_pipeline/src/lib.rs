//! Caption generation pipeline for Reelsmith.
//!
//! This crate turns a local video file into per-platform social captions:
//!
//! 1. [`upload_media`] checks the local path, uploads the file, and polls
//!    the store until it is ready, with a bounded wait.
//! 2. [`obtain_valid_response`] prompts the model and retries with backoff
//!    while the response fails structural validation.
//! 3. [`extract_bundle`] parses the validated payload into
//!    [`CaptionBundle`](reelsmith_core::CaptionBundle), stripping inline
//!    hashtags from captions.
//! 4. [`CaptionPipeline`] wires the steps together and guarantees the
//!    remote file is deleted however captioning ends.
//!
//! The pipeline is generic over the [`MediaStore`](reelsmith_interface::MediaStore)
//! and [`CaptionModel`](reelsmith_interface::CaptionModel) traits, so any
//! provider client that implements both can drive it.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod extraction;
mod orchestrator;
mod parser;
mod pipeline;
mod prompt;
mod uploader;
mod validator;

pub use extraction::extract_json;
pub use orchestrator::{RetryPolicy, obtain_valid_response};
pub use parser::{extract_bundle, extract_platform, strip_hashtags};
pub use pipeline::CaptionPipeline;
pub use prompt::CAPTION_PROMPT;
pub use uploader::{UploadPolicy, upload_media};
pub use validator::{is_well_formed, validate};
