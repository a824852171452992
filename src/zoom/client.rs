//! Zoom endpoint bindings

use crate::config::{ZoomConfig, DEFAULT_MAX};
use crate::error::Result;
use crate::fetch::{FetchArgs, HttpPageFetcher, PageFetcher, DEFAULT_PAGE_SIZE};
use crate::http::HttpClient;
use crate::stream::{resource_stream, ResourceStream};
use crate::types::JsonValue;
use std::sync::Arc;
use tracing::debug;

/// Listing of AI meeting summaries for the account
pub const MEETING_SUMMARIES_PATH: &str = "/meetings/meeting_summaries";

/// Zoom API client exposing the endpoints the summary actions use
#[derive(Debug, Clone)]
pub struct ZoomClient {
    http: Arc<HttpClient>,
    page_size: u32,
    default_max: usize,
}

impl ZoomClient {
    /// Wrap a shared HTTP client with Zoom's default page size and cap
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self {
            http,
            page_size: DEFAULT_PAGE_SIZE,
            default_max: DEFAULT_MAX,
        }
    }

    /// Build a client (transport, auth and limits) from config
    pub fn from_config(config: &ZoomConfig) -> Result<Self> {
        let http = config.build_client()?;
        Ok(Self::new(Arc::new(http))
            .with_page_size(config.page_size)
            .with_default_max(config.default_max))
    }

    /// Set the records requested per page
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the cap used when an action is given no `max`
    #[must_use]
    pub fn with_default_max(mut self, default_max: usize) -> Self {
        self.default_max = default_max;
        self
    }

    /// Cap applied when an action is given no `max`
    pub fn default_max(&self) -> usize {
        self.default_max
    }

    /// Underlying HTTP client
    pub fn http(&self) -> &Arc<HttpClient> {
        &self.http
    }

    fn fetcher(&self, path: String) -> HttpPageFetcher {
        HttpPageFetcher::new(Arc::clone(&self.http), path).with_page_size(Some(self.page_size))
    }

    /// Fetcher for `GET /meetings/meeting_summaries`
    pub fn meeting_summaries_fetcher(&self) -> HttpPageFetcher {
        self.fetcher(MEETING_SUMMARIES_PATH.to_string())
    }

    /// Fetcher for `GET /users/{userId}/recordings`
    ///
    /// `user_id` may be an ID, an email address, or `me`.
    pub fn user_recordings_fetcher(&self, user_id: &str) -> HttpPageFetcher {
        self.fetcher(format!("/users/{}/recordings", encode_segment(user_id)))
    }

    /// `GET /meetings/{meetingId}/meeting_summary`
    pub async fn get_meeting_summary(&self, meeting_id: &str) -> Result<JsonValue> {
        let path = format!("/meetings/{}/meeting_summary", encode_meeting_id(meeting_id));
        debug!("Fetching meeting summary from {path}");
        self.http.get_json(&path).await
    }

    /// Lazy stream over `result_field` of a paginated endpoint
    pub fn resources_stream<F: PageFetcher>(
        &self,
        fetcher: F,
        args: FetchArgs,
        result_field: &str,
        max: usize,
    ) -> ResourceStream<F> {
        resource_stream(fetcher, args, result_field, max)
    }
}

/// Encode a meeting ID or UUID for use as a path segment
///
/// Zoom requires UUIDs that start with `/` or contain `//` to be encoded twice.
pub fn encode_meeting_id(meeting_id: &str) -> String {
    let once = encode_segment(meeting_id);
    if meeting_id.starts_with('/') || meeting_id.contains("//") {
        encode_segment(&once)
    } else {
        once
    }
}

fn encode_segment(segment: &str) -> String {
    url::form_urlencoded::byte_serialize(segment.as_bytes()).collect()
}
