//! YouTube Data API v3 playlist listing.

use super::{PlaylistSource, VideoDescriptor};
use crate::error::{HenteError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::time::Duration;

const API_BASE: &str = "https://www.googleapis.com/youtube/v3";

/// Default timeout for listing requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// One page of a playlistItems.list response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaylistItemsResponse {
    #[serde(default)]
    items: Vec<PlaylistItem>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaylistItem {
    snippet: Snippet,
    content_details: ContentDetails,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    title: String,
    published_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContentDetails {
    video_id: String,
}

/// Playlist listing client backed by the YouTube Data API.
pub struct DataApiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    page_size: u32,
}

impl DataApiClient {
    /// Create a client with the default endpoint and page size.
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_config(api_key, API_BASE, 50)
    }

    /// Create a client with the default endpoint and a custom page size.
    pub fn with_page_size(api_key: &str, page_size: u32) -> Result<Self> {
        Self::with_config(api_key, API_BASE, page_size)
    }

    /// Create a client against a specific endpoint (for tests) and page size.
    pub fn with_config(api_key: &str, base_url: &str, page_size: u32) -> Result<Self> {
        if api_key.is_empty() {
            return Err(HenteError::Config(
                "YouTube API key is empty. Set youtube.api_key or YOUTUBE_API_KEY.".to_string(),
            ));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            // The API rejects maxResults above 50
            page_size: page_size.min(50),
        })
    }

    /// Fetch one page of playlist items.
    async fn fetch_page(
        &self,
        playlist_id: &str,
        page_token: Option<&str>,
    ) -> Result<PlaylistItemsResponse> {
        let url = format!("{}/playlistItems", self.base_url);
        let page_size = self.page_size.to_string();

        let mut query = vec![
            ("part", "snippet,contentDetails"),
            ("playlistId", playlist_id),
            ("maxResults", page_size.as_str()),
            ("key", self.api_key.as_str()),
        ];
        if let Some(token) = page_token {
            query.push(("pageToken", token));
        }

        let response = self.http.get(&url).query(&query).send().await?;
        let status = response.status();

        // An unknown playlist id comes back as 404; treat it as empty
        // rather than a failure, matching "missing playlist means zero
        // videos" semantics.
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(PlaylistItemsResponse {
                items: Vec::new(),
                next_page_token: None,
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HenteError::Playlist(format!(
                "playlistItems request for {} returned {}: {}",
                playlist_id, status, body
            )));
        }

        Ok(response.json::<PlaylistItemsResponse>().await?)
    }
}

#[async_trait]
impl PlaylistSource for DataApiClient {
    async fn list_videos(&self, playlist_id: &str) -> Result<Vec<VideoDescriptor>> {
        let mut videos = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let page = self.fetch_page(playlist_id, page_token.as_deref()).await?;

            for item in page.items {
                videos.push(VideoDescriptor {
                    video_id: item.content_details.video_id,
                    title: item.snippet.title,
                    published_at: item.snippet.published_at,
                });
            }

            match page.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        tracing::debug!("Listed {} videos for playlist {}", videos.len(), playlist_id);
        Ok(videos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_with_continuation() {
        let json = r#"{
            "kind": "youtube#playlistItemListResponse",
            "etag": "etag-1",
            "nextPageToken": "CAUQAA",
            "items": [
                {
                    "snippet": {
                        "publishedAt": "2023-06-01T12:00:00Z",
                        "title": "Ancient Aliens: The Crystal Skulls (S6,E2)!",
                        "description": ""
                    },
                    "contentDetails": { "videoId": "dQw4w9WgXcQ" }
                }
            ]
        }"#;

        let page: PlaylistItemsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(page.next_page_token.as_deref(), Some("CAUQAA"));
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].content_details.video_id, "dQw4w9WgXcQ");
        assert_eq!(
            page.items[0].snippet.title,
            "Ancient Aliens: The Crystal Skulls (S6,E2)!"
        );
    }

    #[test]
    fn test_parse_last_page_without_token() {
        let json = r#"{ "items": [] }"#;
        let page: PlaylistItemsResponse = serde_json::from_str(json).unwrap();
        assert!(page.items.is_empty());
        assert!(page.next_page_token.is_none());
    }

    #[test]
    fn test_empty_api_key_rejected() {
        assert!(DataApiClient::new("").is_err());
    }

    #[test]
    fn test_page_size_capped_at_api_maximum() {
        let client = DataApiClient::with_config("key", API_BASE, 500).unwrap();
        assert_eq!(client.page_size, 50);
    }

    fn page_body(video_ids: &[&str], next_token: Option<&str>) -> String {
        let items: Vec<String> = video_ids
            .iter()
            .map(|id| {
                format!(
                    r#"{{"snippet":{{"publishedAt":"2023-06-01T12:00:00Z","title":"Video {id}"}},"contentDetails":{{"videoId":"{id}"}}}}"#
                )
            })
            .collect();
        let token = next_token
            .map(|t| format!(r#","nextPageToken":"{}""#, t))
            .unwrap_or_default();
        format!(r#"{{"items":[{}]{}}}"#, items.join(","), token)
    }

    /// Serve canned HTTP responses, handing each request line to `respond`.
    async fn spawn_api_stub(
        respond: impl Fn(&str) -> (u16, String) + Send + Sync + 'static,
    ) -> std::net::SocketAddr {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = vec![0u8; 8192];
                let n = socket.read(&mut buf).await.unwrap_or(0);
                let request = String::from_utf8_lossy(&buf[..n]).to_string();
                let request_line = request.lines().next().unwrap_or("").to_string();

                let (status, body) = respond(&request_line);
                let reason = if status == 200 { "OK" } else { "Not Found" };
                let response = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    reason,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
            }
        });

        addr
    }

    #[tokio::test]
    async fn test_list_videos_accumulates_all_pages() {
        // Three pages: continuation tokens on the first two, none on the last
        let addr = spawn_api_stub(|request_line| {
            let body = if request_line.contains("pageToken=tok-2") {
                page_body(&["e"], None)
            } else if request_line.contains("pageToken=tok-1") {
                page_body(&["c", "d"], Some("tok-2"))
            } else {
                page_body(&["a", "b"], Some("tok-1"))
            };
            (200, body)
        })
        .await;

        let client =
            DataApiClient::with_config("key", &format!("http://{}", addr), 2).unwrap();
        let videos = client.list_videos("PL-test").await.unwrap();

        let ids: Vec<&str> = videos.iter().map(|v| v.video_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c", "d", "e"]);
    }

    #[tokio::test]
    async fn test_list_videos_missing_playlist_is_empty() {
        let addr = spawn_api_stub(|_| (404, r#"{"error":{"code":404}}"#.to_string())).await;

        let client =
            DataApiClient::with_config("key", &format!("http://{}", addr), 50).unwrap();
        let videos = client.list_videos("PL-unknown").await.unwrap();
        assert!(videos.is_empty());
    }

    #[tokio::test]
    async fn test_list_videos_error_status_is_fatal() {
        let addr = spawn_api_stub(|_| {
            (403, r#"{"error":{"code":403,"message":"quotaExceeded"}}"#.to_string())
        })
        .await;

        let client =
            DataApiClient::with_config("key", &format!("http://{}", addr), 50).unwrap();
        let err = client.list_videos("PL-test").await.unwrap_err();
        assert!(matches!(err, HenteError::Playlist(_)));
        assert!(err.to_string().contains("quotaExceeded"));
    }
}
