//! Incremental transcript sync.
//!
//! Enumerates a playlist newest-first and materializes one plain-text
//! transcript file per video, stopping at the first video that is already
//! on disk. Per-video retrieval failures are recorded and skipped; only
//! playlist listing failures abort the run.

mod manifest;

pub use manifest::{Manifest, MANIFEST_FILE};

use crate::error::Result;
use crate::playlist::{sort_newest_first, PlaylistSource};
use crate::transcript::TranscriptProvider;
use std::path::PathBuf;

/// Reduce a title to a filesystem-safe key: alphanumeric and whitespace
/// characters only, trailing whitespace trimmed.
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .trim_end()
        .to_string()
}

/// Transcript file name for a video title.
pub fn transcript_file_name(title: &str) -> String {
    format!("{}.txt", sanitize_title(title))
}

/// Options controlling a sync run.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Stop the run at the first already-downloaded video. Videos are
    /// processed newest-first, so the first hit marks the boundary of
    /// previously synced content. Disable for a full sweep.
    pub stop_on_existing: bool,
    /// Key the already-downloaded check on the video-id manifest instead of
    /// the sanitized-title file name.
    pub use_manifest: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            stop_on_existing: true,
            use_manifest: false,
        }
    }
}

/// Progress events emitted during a sync run.
#[derive(Debug, Clone)]
pub enum SyncEvent {
    /// Playlist listing finished; processing begins.
    Listed { total: usize },
    /// A transcript file was written.
    Saved { file_name: String },
    /// Transcript retrieval or writing failed for one video.
    Failed {
        video_id: String,
        title: String,
        message: String,
    },
    /// An already-downloaded video was encountered.
    FoundExisting { file_name: String },
}

/// A transcript file written during a run.
#[derive(Debug, Clone)]
pub struct WrittenTranscript {
    pub video_id: String,
    pub title: String,
    pub file_name: String,
}

/// A per-video failure recorded during a run.
#[derive(Debug, Clone)]
pub struct SyncFailure {
    pub video_id: String,
    pub title: String,
    pub message: String,
}

/// Outcome of one sync run.
#[derive(Debug, Default)]
pub struct SyncReport {
    /// Number of videos enumerated across all playlist pages.
    pub total_listed: usize,
    pub written: Vec<WrittenTranscript>,
    pub failures: Vec<SyncFailure>,
    /// Whether the run stopped at an already-downloaded video.
    pub stopped_early: bool,
}

/// Incremental transcript fetcher.
pub struct Fetcher {
    source: Box<dyn PlaylistSource>,
    provider: Box<dyn TranscriptProvider>,
    output_dir: PathBuf,
    options: FetchOptions,
}

impl Fetcher {
    /// Create a fetcher with default options.
    pub fn new(
        source: Box<dyn PlaylistSource>,
        provider: Box<dyn TranscriptProvider>,
        output_dir: PathBuf,
    ) -> Self {
        Self::with_options(source, provider, output_dir, FetchOptions::default())
    }

    pub fn with_options(
        source: Box<dyn PlaylistSource>,
        provider: Box<dyn TranscriptProvider>,
        output_dir: PathBuf,
        options: FetchOptions,
    ) -> Self {
        Self {
            source,
            provider,
            output_dir,
            options,
        }
    }

    /// Run one sync pass over the playlist.
    ///
    /// Lists every page up front, sorts newest-first, then walks the list
    /// writing transcripts. The observer receives progress events as they
    /// happen; the returned report summarizes the run.
    pub async fn run(
        &self,
        playlist_id: &str,
        mut observe: impl FnMut(&SyncEvent),
    ) -> Result<SyncReport> {
        std::fs::create_dir_all(&self.output_dir)?;

        // Listing failures are fatal: no partial listing is possible.
        let mut videos = self.source.list_videos(playlist_id).await?;
        sort_newest_first(&mut videos);

        observe(&SyncEvent::Listed {
            total: videos.len(),
        });

        let mut manifest = if self.options.use_manifest {
            Some(Manifest::load(&self.output_dir)?)
        } else {
            None
        };

        let mut report = SyncReport {
            total_listed: videos.len(),
            ..SyncReport::default()
        };

        for video in &videos {
            let file_name = transcript_file_name(&video.title);
            let path = self.output_dir.join(&file_name);

            let already_downloaded = match &manifest {
                Some(m) => m.contains(&video.video_id),
                None => path.exists(),
            };

            if already_downloaded {
                tracing::debug!("Found existing transcript {}", file_name);
                observe(&SyncEvent::FoundExisting {
                    file_name: file_name.clone(),
                });
                if self.options.stop_on_existing {
                    report.stopped_early = true;
                    break;
                }
                continue;
            }

            let outcome = match self.provider.fetch_transcript(&video.video_id).await {
                Ok(transcript) => std::fs::write(&path, transcript.plain_text())
                    .map_err(crate::error::HenteError::from),
                Err(e) => Err(e),
            };

            match outcome {
                Ok(()) => {
                    if let Some(m) = manifest.as_mut() {
                        m.record(&video.video_id, &file_name)?;
                    }
                    tracing::info!("Transcript saved to {}", file_name);
                    observe(&SyncEvent::Saved {
                        file_name: file_name.clone(),
                    });
                    report.written.push(WrittenTranscript {
                        video_id: video.video_id.clone(),
                        title: video.title.clone(),
                        file_name,
                    });
                }
                Err(e) => {
                    // Per-video failures never halt the loop. No retry, no
                    // cleanup of a partially written file.
                    let message = e.to_string();
                    tracing::error!(
                        "Error fetching transcript for video ID {} ({}): {}",
                        video.video_id,
                        video.title,
                        message
                    );
                    observe(&SyncEvent::Failed {
                        video_id: video.video_id.clone(),
                        title: video.title.clone(),
                        message: message.clone(),
                    });
                    report.failures.push(SyncFailure {
                        video_id: video.video_id.clone(),
                        title: video.title.clone(),
                        message,
                    });
                }
            }
        }

        Ok(report)
    }
}
