//! Pagination module
//!
//! Page-envelope normalization for cursor-paginated listing endpoints.
//!
//! # Overview
//!
//! Listing endpoints wrap their records in an envelope whose record-bearing
//! field varies by endpoint (`summaries`, `meetings`, ...) and carry an opaque
//! continuation token next to it. This module turns such an envelope into a
//! uniform [`Page`] and tracks the pagination state of a single stream.

mod envelope;
mod types;

pub use envelope::{lookup_path, take_path};
pub use types::{Cursor, EnvelopeFormat, Page, StreamState, DEFAULT_CURSOR_FIELD};
