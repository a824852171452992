//! Meeting summary actions
//!
//! Each action drains a resource stream into memory, counting only the
//! records it keeps, and reports what it did in a one-line summary.

use super::client::ZoomClient;
use super::types::{ActionOutput, DateRange, MeetingSummaryRecording};
use crate::error::Result;
use crate::fetch::PageFetcher;
use crate::stream::ResourceStream;
use crate::types::{JsonValue, Record};
use tracing::{info, warn};

/// Result field of `/meetings/meeting_summaries`
pub const SUMMARIES_FIELD: &str = "summaries";

/// Result field of `/users/{userId}/recordings`
pub const MEETINGS_FIELD: &str = "meetings";

/// List AI meeting summaries for the account within `range`
pub async fn get_meeting_summaries(
    client: &ZoomClient,
    range: DateRange,
    max: Option<usize>,
) -> Result<ActionOutput<JsonValue>> {
    let max = max.unwrap_or_else(|| client.default_max());
    let stream = client.resources_stream(
        client.meeting_summaries_fetcher(),
        range.to_args(),
        SUMMARIES_FIELD,
        max,
    );

    let summaries = collect_accepted(stream, max, Some)
        .await
        .inspect_err(|e| warn!("Listing meeting summaries for {range} failed: {e}"))?;

    let count = summaries.len();
    let summary = format!(
        "Successfully retrieved {count} meeting {} from {range}",
        if count == 1 { "summary" } else { "summaries" },
    );
    info!("{summary}");

    Ok(ActionOutput::new(summary, summaries))
}

/// Fetch the AI summary of one meeting
pub async fn get_meeting_summary(
    client: &ZoomClient,
    meeting_id: &str,
) -> Result<ActionOutput<JsonValue>> {
    let record = client.get_meeting_summary(meeting_id).await?;

    let summary = format!("Successfully retrieved AI summary for meeting {meeting_id}");
    info!("{summary}");

    Ok(ActionOutput::new(summary, vec![record]))
}

/// List a user's recorded meetings that have an AI summary available
///
/// Meetings without a `SUMMARY` recording file are skipped and do not count
/// toward `max`.
pub async fn list_user_meeting_summaries(
    client: &ZoomClient,
    user_id: &str,
    range: DateRange,
    max: Option<usize>,
) -> Result<ActionOutput<MeetingSummaryRecording>> {
    let max = max.unwrap_or_else(|| client.default_max());
    let stream = client.resources_stream(
        client.user_recordings_fetcher(user_id),
        range.to_args(),
        MEETINGS_FIELD,
        max,
    );

    let recordings = collect_accepted(stream, max, MeetingSummaryRecording::from_record)
        .await
        .inspect_err(|e| warn!("Listing recordings of user {user_id} failed: {e}"))?;

    let count = recordings.len();
    let summary = format!(
        "Successfully retrieved {count} meeting{} with summaries for user {user_id}",
        if count == 1 { "" } else { "s" },
    );
    info!("{summary}");

    Ok(ActionOutput::new(summary, recordings))
}

/// Pull records until the stream ends or `max` records have been accepted
///
/// `accept` returns `None` to skip a record. A failure is returned after
/// logging how many records had been accepted before it.
async fn collect_accepted<F, T, A>(
    mut stream: ResourceStream<F>,
    max: usize,
    mut accept: A,
) -> Result<Vec<T>>
where
    F: PageFetcher,
    A: FnMut(Record) -> Option<T>,
{
    let mut accepted = Vec::new();
    if max == 0 {
        return Ok(accepted);
    }

    while let Some(record) = stream.next().await {
        let kept = record.map(&mut accept).inspect_err(|_| {
            warn!(
                "Stopping after {} accepted records ({} pages fetched)",
                accepted.len(),
                stream.pages_fetched()
            );
        })?;

        if let Some(item) = kept {
            accepted.push(item);
            if accepted.len() >= max {
                break;
            }
        }
    }

    Ok(accepted)
}
