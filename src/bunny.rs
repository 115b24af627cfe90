use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::{
    error::{Result, ShelfError},
    types::VideoMetadata,
};

const BUNNY_BASE_URL: &str = "https://video.bunnycdn.com";

/// Source of per-video metadata
///
/// Implemented by [`BunnyClient`] in production; tests substitute an
/// in-memory fake so the enricher never needs a live API.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// Fetch normalized metadata for a single video id
    async fn video_metadata(&self, video_id: &str) -> Result<VideoMetadata>;
}

/// Bunny CDN video API client
///
/// Issues one authenticated GET per video id against
/// `/library/{library_id}/videos/{video_id}` and normalizes the response
/// into a [`VideoMetadata`] record. Single attempt, no retry.
#[derive(Clone)]
pub struct BunnyClient {
    client: Client,
    base_url: String,
    api_key: String,
    library_id: String,
}

/// Raw shape of the Bunny video response; only the fields we keep
#[derive(Deserialize)]
struct BunnyVideo {
    length: Option<u64>,
    width: Option<u64>,
    height: Option<u64>,
    encode: Option<String>,
    status: Option<String>,
}

impl BunnyClient {
    pub fn new(api_key: String, library_id: String) -> Self {
        Self::with_base_url(BUNNY_BASE_URL.to_string(), api_key, library_id)
    }

    /// Create a client against a non-default API host (used by wire tests)
    pub fn with_base_url(base_url: String, api_key: String, library_id: String) -> Self {
        let client = Client::builder()
            .user_agent("media-shelf/0.1")
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url,
            api_key,
            library_id,
        }
    }

    /// Build the video detail URL for an id
    fn video_url(&self, video_id: &str) -> String {
        format!(
            "{}/library/{}/videos/{}",
            self.base_url.trim_end_matches('/'),
            self.library_id,
            video_id
        )
    }
}

#[async_trait]
impl MetadataSource for BunnyClient {
    async fn video_metadata(&self, video_id: &str) -> Result<VideoMetadata> {
        let url = self.video_url(video_id);

        let response = self
            .client
            .get(&url)
            .header("AccessKey", &self.api_key)
            .header("accept", "application/json")
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let video: BunnyVideo = response.json().await?;
                Ok(VideoMetadata {
                    duration: video.length,
                    width: video.width,
                    height: video.height,
                    encoding: video.encode,
                    status: video.status,
                })
            }
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(ShelfError::Fetch {
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }
}
