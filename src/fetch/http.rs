//! HTTP-backed page fetcher

use super::types::{FetchArgs, PageFetcher};
use crate::error::Result;
use crate::http::{HttpClient, RequestConfig};
use crate::pagination::{Cursor, DEFAULT_CURSOR_FIELD};
use crate::types::JsonValue;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::trace;

/// Largest page Zoom's listing endpoints accept
pub const DEFAULT_PAGE_SIZE: u32 = 300;

/// Fetches pages of one endpoint through a shared `HttpClient`
#[derive(Debug, Clone)]
pub struct HttpPageFetcher {
    client: Arc<HttpClient>,
    path: String,
    cursor_param: String,
    page_size_param: String,
    page_size: Option<u32>,
}

impl HttpPageFetcher {
    /// Bind a fetcher to an endpoint path (relative to the client's base URL)
    pub fn new(client: Arc<HttpClient>, path: impl Into<String>) -> Self {
        Self {
            client,
            path: path.into(),
            cursor_param: DEFAULT_CURSOR_FIELD.to_string(),
            page_size_param: "page_size".to_string(),
            page_size: Some(DEFAULT_PAGE_SIZE),
        }
    }

    /// Set the query parameter that carries the cursor
    #[must_use]
    pub fn with_cursor_param(mut self, param: impl Into<String>) -> Self {
        self.cursor_param = param.into();
        self
    }

    /// Set the page size, or `None` to let the server decide
    #[must_use]
    pub fn with_page_size(mut self, page_size: Option<u32>) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the query parameter that carries the page size
    #[must_use]
    pub fn with_page_size_param(mut self, param: impl Into<String>) -> Self {
        self.page_size_param = param.into();
        self
    }

    /// Endpoint path this fetcher is bound to
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query for one page; the cursor and page size parameters are owned by
    /// the fetcher, so same-named entries in `args` are dropped
    fn request_config(&self, args: &FetchArgs, cursor: Option<&Cursor>) -> RequestConfig {
        let owned = |key: &str| {
            key == self.cursor_param || (self.page_size.is_some() && key == self.page_size_param)
        };
        let mut config = RequestConfig::new().queries(args.iter().filter(|(k, _)| !owned(k)));

        if let Some(size) = self.page_size {
            config = config.query(&self.page_size_param, size.to_string());
        }
        if let Some(cursor) = cursor {
            config = config.query(&self.cursor_param, cursor.as_str());
        }
        config
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_page(&self, args: &FetchArgs, cursor: Option<&Cursor>) -> Result<JsonValue> {
        trace!(path = %self.path, cursor = ?cursor.map(Cursor::as_str), "Fetching page");
        let config = self.request_config(args, cursor);
        self.client.get_json_with_config(&self.path, config).await
    }
}
