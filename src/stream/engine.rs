//! Resource stream engine
//!
//! The pagination loop: fetch a page only when the buffered page has run dry
//! and more records are still wanted, then hand records out one at a time.

use super::types::StreamRequest;
use crate::error::Result;
use crate::fetch::{FetchArgs, PageFetcher};
use crate::pagination::{Page, StreamState};
use crate::types::Record;
use futures::Stream;
use std::collections::VecDeque;
use tracing::{debug, trace};

/// Lazy, forward-only sequence of records drawn from a paginated endpoint
///
/// Holds at most one fetched page at a time. Dropping the stream between
/// pulls is always safe: no fetch runs outside of [`ResourceStream::next`].
#[derive(Debug)]
pub struct ResourceStream<F> {
    fetcher: F,
    request: StreamRequest,
    state: StreamState,
    buffer: VecDeque<Record>,
}

/// Create a stream over `result_field` of the pages `fetcher` returns
///
/// Performs no fetch until the first record is pulled.
pub fn resource_stream<F: PageFetcher>(
    fetcher: F,
    fetch_args: FetchArgs,
    result_field: impl Into<String>,
    max: usize,
) -> ResourceStream<F> {
    ResourceStream::new(
        fetcher,
        StreamRequest::new(result_field, max).with_args(fetch_args),
    )
}

impl<F: PageFetcher> ResourceStream<F> {
    /// Create a stream from a fetcher and request
    pub fn new(fetcher: F, request: StreamRequest) -> Self {
        Self {
            fetcher,
            request,
            state: StreamState::new(),
            buffer: VecDeque::new(),
        }
    }

    /// Produce the next record, or `None` at end of sequence
    ///
    /// A fetch error is returned once; the stream yields `None` afterwards.
    pub async fn next(&mut self) -> Option<Result<Record>> {
        loop {
            if self.state.is_finished(self.request.max) {
                return None;
            }

            if let Some(record) = self.buffer.pop_front() {
                self.state.record_yield();
                if self.state.yielded == self.request.max {
                    trace!("Reached max of {} records", self.request.max);
                }
                return Some(Ok(record));
            }

            if !self.state.has_more_pages() {
                self.state.mark_done();
                return None;
            }

            if let Err(e) = self.fetch_next_page().await {
                debug!(
                    "Page {} of '{}' failed: {e}",
                    self.state.pages_fetched + 1,
                    self.request.format.result_field
                );
                self.state.mark_failed();
                return Some(Err(e));
            }
        }
    }

    /// Fetch the page after the stored cursor and buffer its records
    async fn fetch_next_page(&mut self) -> Result<()> {
        let body = self
            .fetcher
            .fetch_page(&self.request.fetch_args, self.state.cursor.as_ref())
            .await?;

        let page = Page::from_envelope(body, &self.request.format);
        let terminal = page.is_terminal();
        let count = page.len();

        self.state.record_page(page.next_cursor);
        self.buffer.extend(page.items);

        debug!(
            "Page {}: {count} '{}' records{}",
            self.state.pages_fetched,
            self.request.format.result_field,
            if terminal { " (last page)" } else { "" }
        );
        Ok(())
    }

    /// Adapt into a `futures::Stream`
    pub fn into_stream(self) -> impl Stream<Item = Result<Record>> {
        futures::stream::unfold(self, |mut stream| async move {
            let item = stream.next().await?;
            Some((item, stream))
        })
    }

    /// Records that may still be produced before hitting `max`
    pub fn remaining(&self) -> usize {
        if self.state.done {
            0
        } else {
            self.request.max.saturating_sub(self.state.yielded)
        }
    }

    /// Records produced so far
    pub fn yielded(&self) -> usize {
        self.state.yielded
    }

    /// Pages fetched so far
    pub fn pages_fetched(&self) -> usize {
        self.state.pages_fetched
    }

    /// Current pagination state
    pub fn state(&self) -> &StreamState {
        &self.state
    }

    /// The request this stream was built from
    pub fn request(&self) -> &StreamRequest {
        &self.request
    }
}
