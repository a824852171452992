//! Pagination types
//!
//! Defines the page, cursor and per-stream state abstractions.

use crate::types::{JsonValue, Record};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Envelope field that Zoom uses for its continuation token
pub const DEFAULT_CURSOR_FIELD: &str = "next_page_token";

/// Opaque continuation token issued by the server
///
/// The value is forwarded verbatim on the next request and never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    /// Create a cursor, treating an empty token as absent
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.is_empty() {
            None
        } else {
            Some(Self(token))
        }
    }

    /// Read a cursor from an envelope value
    ///
    /// Strings are used as-is. Numbers, objects and arrays are forwarded as
    /// their compact JSON text. Null, booleans and the empty string mean
    /// "no further pages".
    pub fn from_value(value: &JsonValue) -> Option<Self> {
        match value {
            JsonValue::String(s) => Self::new(s.as_str()),
            JsonValue::Number(_) | JsonValue::Object(_) | JsonValue::Array(_) => {
                Self::new(value.to_string())
            }
            JsonValue::Bool(flag) => {
                debug!("Ignoring boolean continuation token ({flag})");
                None
            }
            JsonValue::Null => None,
        }
    }

    /// Get the raw token
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Cursor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Describes where records and the continuation token live in an envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeFormat {
    /// Dot-separated path to the record array (e.g. `summaries`, `data.items`)
    pub result_field: String,
    /// Dot-separated path to the continuation token
    #[serde(default = "default_cursor_field")]
    pub cursor_field: String,
}

fn default_cursor_field() -> String {
    DEFAULT_CURSOR_FIELD.to_string()
}

impl EnvelopeFormat {
    /// Create a format reading records from `result_field` and the cursor
    /// from `next_page_token`
    pub fn new(result_field: impl Into<String>) -> Self {
        Self {
            result_field: result_field.into(),
            cursor_field: default_cursor_field(),
        }
    }

    /// Override the cursor field
    #[must_use]
    pub fn with_cursor_field(mut self, cursor_field: impl Into<String>) -> Self {
        self.cursor_field = cursor_field.into();
        self
    }
}

/// One normalized server response
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    /// Records in server order
    pub items: Vec<Record>,
    /// Token for the following page, absent on the terminal page
    pub next_cursor: Option<Cursor>,
}

impl Page {
    /// Create a page from its parts
    pub fn new(items: Vec<Record>, next_cursor: Option<Cursor>) -> Self {
        Self { items, next_cursor }
    }

    /// Number of records on the page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the page has no records
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether this is the last page of the listing
    pub fn is_terminal(&self) -> bool {
        self.next_cursor.is_none()
    }
}

/// Mutable state of one running stream
///
/// Owned by exactly one stream and mutated only by its pagination step.
#[derive(Debug, Clone, Default)]
pub struct StreamState {
    /// Cursor to send with the next fetch
    pub cursor: Option<Cursor>,
    /// Whether any page has been fetched yet
    pub started: bool,
    /// Records handed to the consumer so far
    pub yielded: usize,
    /// Pages fetched so far
    pub pages_fetched: usize,
    /// Stream is exhausted
    pub done: bool,
    /// A fetch failed; the stream produces nothing further
    pub failed: bool,
}

impl StreamState {
    /// Create a fresh state (no cursor, nothing fetched)
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a freshly fetched page, replacing the stored cursor
    pub fn record_page(&mut self, next_cursor: Option<Cursor>) {
        self.started = true;
        self.pages_fetched += 1;
        self.cursor = next_cursor;
    }

    /// Count one record handed to the consumer
    pub fn record_yield(&mut self) {
        self.yielded += 1;
    }

    /// Mark the stream as exhausted
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Mark the stream as failed
    pub fn mark_failed(&mut self) {
        self.failed = true;
        self.done = true;
    }

    /// Whether another fetch could return records
    pub fn has_more_pages(&self) -> bool {
        !self.started || self.cursor.is_some()
    }

    /// Whether the stream can produce nothing further under `max`
    pub fn is_finished(&self, max: usize) -> bool {
        self.done || self.yielded >= max
    }
}
