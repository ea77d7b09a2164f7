//! Timedtext transcript provider.
//!
//! YouTube exposes caption tracks through the player response embedded in the
//! watch page. The provider scrapes the `captionTracks` list from the page,
//! picks a track by language, and fetches it in the json3 event format.

use super::{CaptionEntry, Transcript, TranscriptProvider};
use crate::error::{HenteError, Result};
use async_trait::async_trait;
use regex::Regex;
use serde::Deserialize;
use std::time::Duration;

const WATCH_URL: &str = "https://www.youtube.com/watch";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// A caption track advertised in the player response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CaptionTrack {
    base_url: String,
    #[serde(default)]
    language_code: String,
}

/// json3 caption payload: a flat list of timed events.
#[derive(Debug, Deserialize)]
struct Json3Response {
    #[serde(default)]
    events: Vec<Json3Event>,
}

#[derive(Debug, Deserialize)]
struct Json3Event {
    #[serde(rename = "tStartMs", default)]
    start_ms: u64,
    #[serde(rename = "dDurationMs", default)]
    duration_ms: u64,
    segs: Option<Vec<Json3Seg>>,
}

#[derive(Debug, Deserialize)]
struct Json3Seg {
    #[serde(default)]
    utf8: String,
}

/// Transcript provider that scrapes YouTube's timedtext captions.
pub struct TimedtextProvider {
    http: reqwest::Client,
    language: String,
    tracks_regex: Regex,
}

impl TimedtextProvider {
    pub fn new(language: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        // The track list is a JSON array embedded in the player response
        let tracks_regex =
            Regex::new(r#""captionTracks":(\[.*?\])"#).expect("Invalid regex");

        Ok(Self {
            http,
            language: language.to_string(),
            tracks_regex,
        })
    }

    /// Pull the caption track list out of the watch page HTML.
    fn extract_tracks(&self, html: &str, video_id: &str) -> Result<Vec<CaptionTrack>> {
        let caps = self
            .tracks_regex
            .captures(html)
            .ok_or_else(|| HenteError::TranscriptsDisabled(video_id.to_string()))?;

        let tracks: Vec<CaptionTrack> = serde_json::from_str(&caps[1]).map_err(|e| {
            HenteError::Transcript(format!(
                "Failed to parse caption track list for {}: {}",
                video_id, e
            ))
        })?;

        if tracks.is_empty() {
            return Err(HenteError::TranscriptsDisabled(video_id.to_string()));
        }

        Ok(tracks)
    }

    /// Pick the track matching the preferred language, or the first one.
    fn select_track<'a>(&self, tracks: &'a [CaptionTrack]) -> &'a CaptionTrack {
        tracks
            .iter()
            .find(|t| t.language_code == self.language)
            .unwrap_or(&tracks[0])
    }

    async fn fetch_track(&self, track: &CaptionTrack, video_id: &str) -> Result<Transcript> {
        let url = format!("{}&fmt=json3", track.base_url);
        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(HenteError::Transcript(format!(
                "Caption track request for {} returned {}",
                video_id,
                response.status()
            )));
        }

        let payload = response.json::<Json3Response>().await?;
        Ok(transcript_from_events(payload))
    }
}

/// Flatten json3 events into ordered caption entries.
fn transcript_from_events(payload: Json3Response) -> Transcript {
    let entries = payload
        .events
        .into_iter()
        .filter_map(|event| {
            let segs = event.segs?;
            let text = segs
                .iter()
                .map(|s| s.utf8.as_str())
                .collect::<String>()
                .replace('\n', " ")
                .trim()
                .to_string();

            if text.is_empty() {
                return None;
            }

            Some(CaptionEntry {
                text,
                start_seconds: event.start_ms as f64 / 1000.0,
                duration_seconds: event.duration_ms as f64 / 1000.0,
            })
        })
        .collect();

    Transcript { entries }
}

#[async_trait]
impl TranscriptProvider for TimedtextProvider {
    async fn fetch_transcript(&self, video_id: &str) -> Result<Transcript> {
        let response = self
            .http
            .get(WATCH_URL)
            .query(&[("v", video_id)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(HenteError::Transcript(format!(
                "Watch page request for {} returned {}",
                video_id,
                response.status()
            )));
        }

        let html = response.text().await?;
        let tracks = self.extract_tracks(&html, video_id)?;
        let track = self.select_track(&tracks);

        tracing::debug!(
            "Fetching caption track '{}' for video {}",
            track.language_code,
            video_id
        );
        self.fetch_track(track, video_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAYER_SNIPPET: &str = r#"...,"captions":{"playerCaptionsTracklistRenderer":{"captionTracks":[{"baseUrl":"https://www.youtube.com/api/timedtext?v=abc\u0026lang=en","name":{"simpleText":"English"},"vssId":".en","languageCode":"en"},{"baseUrl":"https://www.youtube.com/api/timedtext?v=abc\u0026lang=de","languageCode":"de"}],"audioTracks":[]}},..."#;

    #[test]
    fn test_extract_tracks_from_player_response() {
        let provider = TimedtextProvider::new("en").unwrap();
        let tracks = provider.extract_tracks(PLAYER_SNIPPET, "abc").unwrap();

        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].language_code, "en");
        // \u0026 unescapes to & during JSON parsing
        assert!(tracks[0].base_url.contains("?v=abc&lang=en"));
    }

    #[test]
    fn test_extract_tracks_missing_means_disabled() {
        let provider = TimedtextProvider::new("en").unwrap();
        let err = provider
            .extract_tracks("<html>no captions here</html>", "abc")
            .unwrap_err();
        assert!(matches!(err, HenteError::TranscriptsDisabled(_)));
    }

    #[test]
    fn test_select_track_prefers_language_then_first() {
        let provider = TimedtextProvider::new("de").unwrap();
        let tracks = provider.extract_tracks(PLAYER_SNIPPET, "abc").unwrap();
        assert_eq!(provider.select_track(&tracks).language_code, "de");

        let provider = TimedtextProvider::new("fr").unwrap();
        assert_eq!(provider.select_track(&tracks).language_code, "en");
    }

    #[test]
    fn test_transcript_from_events() {
        let json = r#"{
            "events": [
                { "tStartMs": 0, "dDurationMs": 1500, "segs": [{ "utf8": "hello " }, { "utf8": "there" }] },
                { "tStartMs": 1500, "dDurationMs": 800 },
                { "tStartMs": 2300, "dDurationMs": 900, "segs": [{ "utf8": "\n" }] },
                { "tStartMs": 3200, "dDurationMs": 700, "segs": [{ "utf8": "world" }] }
            ]
        }"#;

        let payload: Json3Response = serde_json::from_str(json).unwrap();
        let transcript = transcript_from_events(payload);

        assert_eq!(transcript.entries.len(), 2);
        assert_eq!(transcript.entries[0].text, "hello there");
        assert_eq!(transcript.entries[0].start_seconds, 0.0);
        assert_eq!(transcript.entries[1].text, "world");
        assert_eq!(transcript.entries[1].start_seconds, 3.2);
        assert_eq!(transcript.plain_text(), "hello there world");
    }
}
