//! Error types for the Reelsmith library.
//!
//! This crate provides the foundation error types used throughout the Reelsmith workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use reelsmith_error::{ReelsmithResult, HttpError};
//!
//! fn fetch_data() -> ReelsmithResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod caption;
mod config;
mod error;
mod gemini;
mod http;
mod json;
mod media;

pub use caption::{CaptionError, CaptionErrorKind, RetryableError};
pub use config::ConfigError;
pub use error::{ReelsmithError, ReelsmithErrorKind, ReelsmithResult};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use http::HttpError;
pub use json::JsonError;
pub use media::{MediaError, MediaErrorKind};
