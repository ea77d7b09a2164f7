//! Playlist listing abstraction for Hente.
//!
//! Provides a trait-based interface over the service that enumerates the
//! videos of a playlist, plus the concrete YouTube Data API implementation.

mod data_api;

pub use data_api::DataApiClient;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Metadata for one video in a playlist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoDescriptor {
    /// Opaque platform identifier for the video.
    pub video_id: String,
    /// Video title as reported by the listing service.
    pub title: String,
    /// Publish timestamp, used for newest-first ordering.
    pub published_at: DateTime<Utc>,
}

/// Trait for playlist listing implementations.
#[async_trait]
pub trait PlaylistSource: Send + Sync {
    /// List every video in the playlist, across all pages.
    ///
    /// A playlist that does not exist or has no members yields an empty list.
    /// Credential or transport failures are fatal and surface as errors.
    async fn list_videos(&self, playlist_id: &str) -> Result<Vec<VideoDescriptor>>;
}

/// Sort videos newest-first by publish date. Ties keep their listing order.
pub fn sort_newest_first(videos: &mut [VideoDescriptor]) {
    videos.sort_by(|a, b| b.published_at.cmp(&a.published_at));
}

/// Extract a playlist ID from a YouTube URL or bare ID.
pub fn extract_playlist_id(input: &str) -> Option<String> {
    // Matches playlist URLs (?list=...) and bare playlist IDs
    let re = Regex::new(
        r"(?x)
        (?:
            (?:https?://)?
            (?:www\.)?
            youtube\.com/(?:playlist|watch)\?(?:[^\s]*&)?list=
            ([a-zA-Z0-9_-]+)
        )
        |
        ^((?:PL|UU|LL|FL|OL)[a-zA-Z0-9_-]{10,})$
    ",
    )
    .expect("Invalid regex");

    let caps = re.captures(input.trim())?;
    caps.get(1)
        .or_else(|| caps.get(2))
        .map(|m| m.as_str().to_string())
}
