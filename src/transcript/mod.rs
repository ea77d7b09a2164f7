//! Transcript retrieval abstraction for Hente.
//!
//! Provides a trait-based interface over the service that returns caption
//! text for a video, plus the concrete timedtext implementation.

mod timedtext;

pub use timedtext::TimedtextProvider;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One caption entry of a transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptionEntry {
    /// Caption text fragment.
    pub text: String,
    /// Offset from the start of the video, in seconds.
    pub start_seconds: f64,
    /// Display duration, in seconds.
    pub duration_seconds: f64,
}

/// An ordered transcript for one video.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    pub entries: Vec<CaptionEntry>,
}

impl Transcript {
    /// Concatenate all caption fragments into one space-joined blob.
    ///
    /// This is the storage format: downstream indexers read one text file
    /// per video and do their own chunking.
    pub fn plain_text(&self) -> String {
        self.entries
            .iter()
            .map(|e| e.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Trait for transcript provider implementations.
#[async_trait]
pub trait TranscriptProvider: Send + Sync {
    /// Fetch the transcript for a video.
    ///
    /// Fails per-video when transcripts are disabled, the video is missing,
    /// or no caption track is available; callers treat this as recoverable.
    async fn fetch_transcript(&self, video_id: &str) -> Result<Transcript>;
}
