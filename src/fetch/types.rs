//! Page fetcher trait and arguments

use crate::error::Result;
use crate::pagination::Cursor;
use crate::types::{JsonValue, StringMap};
use async_trait::async_trait;
use std::sync::Arc;

/// Fixed query parameters sent with every page of a listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchArgs {
    params: StringMap,
}

impl FetchArgs {
    /// Create empty arguments
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Get a parameter value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Iterate over all parameters
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether there are no parameters
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl From<StringMap> for FetchArgs {
    fn from(params: StringMap) -> Self {
        Self { params }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FetchArgs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            params: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Fetches one page of a listing endpoint
///
/// Implementations perform a single logical call and return the raw response
/// envelope. Transient-failure retries, auth and rate limiting belong here,
/// not in the stream engine.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the page that follows `cursor`, or the first page when `None`
    async fn fetch_page(&self, args: &FetchArgs, cursor: Option<&Cursor>) -> Result<JsonValue>;
}

#[async_trait]
impl<'a, T: PageFetcher + ?Sized> PageFetcher for &'a T {
    async fn fetch_page(&self, args: &FetchArgs, cursor: Option<&Cursor>) -> Result<JsonValue> {
        (**self).fetch_page(args, cursor).await
    }
}

#[async_trait]
impl<T: PageFetcher + ?Sized> PageFetcher for Box<T> {
    async fn fetch_page(&self, args: &FetchArgs, cursor: Option<&Cursor>) -> Result<JsonValue> {
        (**self).fetch_page(args, cursor).await
    }
}

#[async_trait]
impl<T: PageFetcher + ?Sized> PageFetcher for Arc<T> {
    async fn fetch_page(&self, args: &FetchArgs, cursor: Option<&Cursor>) -> Result<JsonValue> {
        (**self).fetch_page(args, cursor).await
    }
}
