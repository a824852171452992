//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Stream AI meeting summaries out of Zoom
#[derive(Parser, Debug)]
#[command(name = "zoom-stream")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML or JSON); `ZOOM_*` variables override it
    #[arg(short = 'C', long, global = true, env = "ZOOM_STREAM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the account's meeting summaries within a date range
    Summaries {
        /// Start date (yyyy-MM-dd)
        #[arg(long)]
        from: String,

        /// End date (yyyy-MM-dd)
        #[arg(long)]
        to: String,

        /// Maximum summaries to retrieve (defaults to the configured max)
        #[arg(long)]
        max: Option<usize>,
    },

    /// Get the AI summary of one meeting
    Summary {
        /// Meeting ID or meeting UUID
        #[arg(long)]
        meeting_id: String,
    },

    /// List a user's recorded meetings that have a summary
    UserSummaries {
        /// User ID, email address, or `me`
        #[arg(long, default_value = "me")]
        user_id: String,

        /// Start date (yyyy-MM-dd)
        #[arg(long)]
        from: String,

        /// End date (yyyy-MM-dd)
        #[arg(long)]
        to: String,

        /// Maximum meetings to retrieve (defaults to the configured max)
        #[arg(long)]
        max: Option<usize>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One record per line
    Json,
    /// Pretty-printed JSON array
    Pretty,
}
