//! Reelsmith - Social Media Captions From Video
//!
//! Reelsmith uploads a local video to the Gemini Files API, asks the model
//! for platform-tailored captions and hashtags, validates the response
//! shape with bounded re-querying, and returns parsed per-platform content
//! with the remote file cleaned up on every exit path.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use reelsmith::{CaptionPipeline, GeminiClient, ReelsmithConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ReelsmithConfig::load()?;
//!     let client = GeminiClient::with_config(&config.gemini)?;
//!     let pipeline = CaptionPipeline::new(client, &config);
//!
//!     let bundle = pipeline.run("video.mp4".as_ref()).await?;
//!     println!("TikTok: {}", bundle.tiktok().caption());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Reelsmith is organized as a workspace with focused crates:
//!
//! - `reelsmith_error` - Error types
//! - `reelsmith_core` - Core data types and configuration
//! - `reelsmith_interface` - MediaStore and CaptionModel trait definitions
//! - `reelsmith_models` - Gemini Files API and generateContent client
//! - `reelsmith_pipeline` - Upload, validation, retry, and parsing pipeline
//!
//! This crate (`reelsmith`) re-exports everything for convenience and ships
//! the CLI binary.

pub use reelsmith_core::*;
pub use reelsmith_error::*;
pub use reelsmith_interface::*;
pub use reelsmith_models::*;
pub use reelsmith_pipeline::*;

pub mod render;
