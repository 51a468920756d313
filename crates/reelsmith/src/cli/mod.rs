//! Command-line interface module.
//!
//! Provides the CLI structure and command handlers for the reelsmith binary.

mod commands;
mod run;

pub use commands::{Cli, Commands};
pub use run::{run_caption, validate_document};
