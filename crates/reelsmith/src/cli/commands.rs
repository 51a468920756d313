//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Reelsmith - Social media caption generation for videos
#[derive(Parser, Debug)]
#[command(name = "reelsmith")]
#[command(about = "Generate TikTok and Instagram captions for a video", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upload a video and generate captions for every platform
    Run {
        /// Path to the local video file
        video: PathBuf,

        /// Output format
        #[arg(long, default_value = "stream")]
        format: OutputFormat,
    },

    /// Check a saved model response against the expected shape
    Validate {
        /// Path to the saved response document
        document: PathBuf,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Debug)]
pub enum OutputFormat {
    /// Incremental word-by-word terminal rendering
    Stream,
    /// JSON format
    Json,
}
