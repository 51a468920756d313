//! Reelsmith CLI binary.
//!
//! Command-line access to the caption pipeline:
//! - Generate platform captions for a local video
//! - Validate a saved model response document

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, run_caption, validate_document};

    let _ = dotenvy::dotenv();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    // Execute the requested command
    match cli.command {
        Commands::Run { video, format } => {
            run_caption(&video, format).await?;
        }

        Commands::Validate { document } => {
            validate_document(&document).await?;
        }
    }

    Ok(())
}
