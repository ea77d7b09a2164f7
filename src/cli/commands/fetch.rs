//! Fetch command implementation.

use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::Settings;
use crate::playlist::{extract_playlist_id, DataApiClient};
use crate::sync::{FetchOptions, Fetcher, SyncEvent};
use crate::transcript::TimedtextProvider;
use anyhow::Result;

/// Run the fetch command.
pub async fn run_fetch(
    playlist: &str,
    output: Option<String>,
    api_key: Option<String>,
    language: Option<String>,
    full: bool,
    settings: Settings,
) -> Result<()> {
    // The --api-key flag (and its env fallback) takes precedence over config
    let api_key = match api_key.filter(|k| !k.is_empty()) {
        Some(key) => key,
        None => {
            if let Err(e) = preflight::check(Operation::Fetch, &settings) {
                Output::error(&format!("{}", e));
                Output::info("Run 'hente doctor' for detailed diagnostics.");
                return Err(e.into());
            }
            settings.youtube.resolved_api_key().unwrap_or_default()
        }
    };

    let playlist_id = match extract_playlist_id(playlist) {
        Some(id) => id,
        None => {
            Output::error("Input doesn't appear to be a valid YouTube playlist URL or ID");
            return Err(anyhow::anyhow!("Invalid playlist: {}", playlist));
        }
    };

    let output_dir = match output {
        Some(path) => Settings::expand_path(&path),
        None => settings.output_dir(),
    };
    let language = language.unwrap_or_else(|| settings.transcripts.language.clone());

    let fetcher = Fetcher::with_options(
        Box::new(DataApiClient::with_page_size(
            &api_key,
            settings.youtube.page_size,
        )?),
        Box::new(TimedtextProvider::new(&language)?),
        output_dir,
        FetchOptions {
            stop_on_existing: !full,
            use_manifest: settings.transcripts.use_manifest,
        },
    );

    let spinner = Output::spinner("Fetching playlist...");
    let report = fetcher
        .run(&playlist_id, |event| match event {
            SyncEvent::Listed { total } => {
                spinner.finish_and_clear();
                if *total == 0 {
                    Output::warning("No videos found in playlist");
                } else {
                    Output::info(&format!("Found {} videos", total));
                }
            }
            SyncEvent::Saved { file_name } => {
                Output::success(&format!("Transcript saved to {}", file_name));
            }
            SyncEvent::Failed {
                video_id,
                title,
                message,
            } => {
                Output::error(&format!(
                    "Error fetching transcript for video ID {} ({}): {}",
                    video_id, title, message
                ));
            }
            SyncEvent::FoundExisting { file_name } => {
                if full {
                    Output::info(&format!("Already downloaded: {}", file_name));
                }
            }
        })
        .await;
    spinner.finish_and_clear();

    let report = match report {
        Ok(report) => report,
        Err(e) => {
            Output::error(&format!("Fetch failed: {}", e));
            return Err(e.into());
        }
    };

    println!();
    let mut summary = format!(
        "Sync complete: {} saved, {} failed",
        report.written.len(),
        report.failures.len()
    );
    if report.stopped_early {
        summary.push_str(" (stopped at first existing transcript)");
    }
    Output::info(&summary);

    Ok(())
}
