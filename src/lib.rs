//! Hente - Incremental YouTube Transcript Downloader
//!
//! A CLI tool for downloading YouTube playlist transcripts into a directory of
//! plain-text files, ready to be indexed by a downstream RAG system.
//!
//! The name "Hente" comes from the Norwegian word for "fetch."
//!
//! # Overview
//!
//! Hente allows you to:
//! - Enumerate the videos of a YouTube playlist, newest first
//! - Download each video's transcript as a plain-text file named from the title
//! - Sync incrementally: stop as soon as an already-downloaded video is seen
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration management
//! - `playlist` - Playlist listing (YouTube Data API)
//! - `transcript` - Transcript retrieval (timedtext captions)
//! - `sync` - Incremental fetch-and-save loop
//!
//! # Example
//!
//! ```rust,no_run
//! use hente::config::Settings;
//! use hente::playlist::DataApiClient;
//! use hente::sync::Fetcher;
//! use hente::transcript::TimedtextProvider;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let api_key = settings.youtube.resolved_api_key().unwrap();
//!
//!     let fetcher = Fetcher::new(
//!         Box::new(DataApiClient::new(&api_key)?),
//!         Box::new(TimedtextProvider::new("en")?),
//!         settings.output_dir(),
//!     );
//!     let report = fetcher.run("PLv3TTBr1W_9tppikBxAE_G6qjWdBljBHJ", |_| {}).await?;
//!     println!("Saved {} transcripts", report.written.len());
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod playlist;
pub mod sync;
pub mod transcript;

pub use error::{HenteError, Result};
