//! Provider integrations for Reelsmith.
//!
//! This crate provides the Gemini backend implementing the
//! [`MediaStore`](reelsmith_interface::MediaStore) and
//! [`CaptionModel`](reelsmith_interface::CaptionModel) traits.
//!
//! # Example
//!
//! ```no_run
//! use reelsmith_models::GeminiClient;
//! use reelsmith_interface::MediaStore;
//! use std::path::Path;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new()?;
//! let handle = client.upload(Path::new("clip.mp4")).await?;
//! println!("uploaded as {}", handle.id());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;

pub use gemini::{GeminiClient, GeminiResult};
