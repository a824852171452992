//! Resource stream module
//!
//! Turns a page-at-a-time listing endpoint into a lazy, length-bounded
//! sequence of records.
//!
//! # Overview
//!
//! - `ResourceStream` - pulls pages on demand and hands out one record at a time
//! - `StreamRequest` - fixed arguments, envelope format and record cap
//! - `resource_stream` - the single construction entry point
//!
//! No page is fetched until a record that needs it is requested, and a page is
//! never fetched once `max` records have been produced.
//!
//! ```rust,ignore
//! let mut stream = resource_stream(fetcher, args, "summaries", 300);
//! while let Some(summary) = stream.next().await {
//!     let summary = summary?;
//!     // ...
//! }
//! ```

mod engine;
mod types;

pub use engine::{resource_stream, ResourceStream};
pub use types::StreamRequest;
