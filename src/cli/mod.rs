//! CLI module for Hente.

pub mod commands;
mod output;
pub mod preflight;

pub use output::Output;

use clap::{Parser, Subcommand};

/// Hente - Incremental YouTube Transcript Downloader
///
/// A CLI tool for downloading YouTube playlist transcripts into a directory
/// of plain-text files. The name "Hente" comes from the Norwegian word for
/// "fetch."
#[derive(Parser, Debug)]
#[command(name = "hente")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize Hente and write a default configuration file
    Init,

    /// Check configuration and API key
    Doctor,

    /// Fetch new transcripts for a playlist
    Fetch {
        /// YouTube playlist URL or ID
        playlist: String,

        /// Output directory (overrides config)
        #[arg(short, long)]
        output: Option<String>,

        /// YouTube Data API key (overrides config)
        #[arg(long, env = "YOUTUBE_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// Preferred caption language code
        #[arg(short, long)]
        language: Option<String>,

        /// Sweep the whole playlist instead of stopping at the first
        /// already-downloaded video
        #[arg(long)]
        full: bool,
    },

    /// List downloaded transcripts
    List,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "transcripts.language")
        key: String,
        /// Configuration value
        value: String,
    },

    /// Open configuration file in editor
    Edit,

    /// Show configuration file path
    Path,
}
