//! Page fetching module
//!
//! The collaborator interface the stream engine pulls pages through.
//!
//! # Overview
//!
//! - `PageFetcher` - fetch one raw page envelope given fixed arguments and an
//!   optional continuation cursor
//! - `FetchArgs` - query parameters that stay the same across pages
//! - `HttpPageFetcher` - a fetcher bound to one endpoint on an `HttpClient`

mod http;
mod types;

pub use http::{HttpPageFetcher, DEFAULT_PAGE_SIZE};
pub use types::{FetchArgs, PageFetcher};

#[cfg(test)]
mod tests;
