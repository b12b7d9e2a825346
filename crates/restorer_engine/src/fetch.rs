use restorer_core::VideoId;
use restorer_logging::restorer_info;

use crate::{FailureKind, FetchError};

/// Default remote annotation endpoint.
pub const DEFAULT_ANNOTATIONS_ENDPOINT: &str = "https://invidio.us/api/v1/annotations";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    /// Base URL the video identifier is appended to.
    pub endpoint: String,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ANNOTATIONS_ENDPOINT.to_string(),
        }
    }
}

/// Source of archived annotation payloads for a video.
#[async_trait::async_trait]
pub trait AnnotationSource: Send + Sync {
    /// Retrieves the raw annotation payload for `video_id`.
    ///
    /// A malformed identifier fails with [`FailureKind::InvalidVideoId`]
    /// before any network IO. An empty successful body fails with
    /// [`FailureKind::Unavailable`]. Exactly one attempt per invocation:
    /// no retry, no timeout, no caching.
    async fn fetch(&self, video_id: &str) -> Result<String, FetchError>;
}

#[derive(Debug, Clone)]
pub struct HttpAnnotationSource {
    settings: FetchSettings,
    client: reqwest::Client,
}

impl HttpAnnotationSource {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn request_url(&self, video_id: &VideoId) -> String {
        format!(
            "{}/{}",
            self.settings.endpoint.trim_end_matches('/'),
            video_id
        )
    }
}

#[async_trait::async_trait]
impl AnnotationSource for HttpAnnotationSource {
    async fn fetch(&self, video_id: &str) -> Result<String, FetchError> {
        let video_id = VideoId::parse(video_id)
            .map_err(|err| FetchError::new(FailureKind::InvalidVideoId, err.to_string()))?;
        let url = self.request_url(&video_id);
        restorer_info!("Retrieving annotations for '{video_id}' from '{url}'");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let text = response
            .text()
            .await
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;

        // The video was archived but had no annotation track.
        if text.is_empty() {
            return Err(FetchError::new(
                FailureKind::Unavailable,
                "empty annotation payload",
            ));
        }

        restorer_info!(
            "Received annotations for '{video_id}' ({} bytes)",
            text.len()
        );
        Ok(text)
    }
}
