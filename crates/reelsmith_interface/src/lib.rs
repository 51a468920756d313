//! Trait interfaces for the Reelsmith caption pipeline.
//!
//! This crate defines the seams between the pipeline and provider backends.
//! The pipeline is generic over these traits, so tests can substitute mock
//! implementations and new providers can plug in without pipeline changes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{CaptionModel, MediaStore, VideoCapabilities};
