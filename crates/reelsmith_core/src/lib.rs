//! Core data types for the Reelsmith caption pipeline.
//!
//! This crate provides the foundation data types used across all Reelsmith interfaces.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod content;
mod media;
mod platform;

pub use config::{GeminiConfig, ReelsmithConfig, RetryConfig, UploadConfig};
pub use content::{CaptionBundle, PlatformContent, PlatformContentBuilder};
pub use media::{MediaHandle, MediaHandleBuilder, MediaState};
pub use platform::Platform;
