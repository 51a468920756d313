//! Google Gemini API client implementation.
//!
//! This module talks to two Gemini REST surfaces:
//! - The Files API for resumable video upload, state polls, and deletion
//! - The `generateContent` endpoint for caption generation against an
//!   uploaded file
//!
//! The client authenticates with the `x-goog-api-key` header on every
//! request, so the key never appears in URLs or logs.

mod client;
mod mime;
mod wire;

pub use client::GeminiClient;

/// Result type for Gemini operations.
pub type GeminiResult<T> = Result<T, reelsmith_error::GeminiError>;
