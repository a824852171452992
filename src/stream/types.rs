//! Stream request configuration

use crate::fetch::FetchArgs;
use crate::pagination::EnvelopeFormat;

/// What to stream and how much of it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamRequest {
    /// Query parameters reused on every page
    pub fetch_args: FetchArgs,
    /// Where records and the cursor live in each page envelope
    pub format: EnvelopeFormat,
    /// Hard ceiling on records ever produced; 0 produces nothing
    pub max: usize,
}

impl StreamRequest {
    /// Stream records from `result_field`, at most `max` of them
    pub fn new(result_field: impl Into<String>, max: usize) -> Self {
        Self {
            fetch_args: FetchArgs::new(),
            format: EnvelopeFormat::new(result_field),
            max,
        }
    }

    /// Set the fixed fetch arguments
    #[must_use]
    pub fn with_args(mut self, fetch_args: FetchArgs) -> Self {
        self.fetch_args = fetch_args;
        self
    }

    /// Override the envelope cursor field
    #[must_use]
    pub fn with_cursor_field(mut self, cursor_field: impl Into<String>) -> Self {
        self.format = self.format.with_cursor_field(cursor_field);
        self
    }
}
