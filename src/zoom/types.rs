//! Zoom action types

use crate::error::{Error, Result};
use crate::fetch::FetchArgs;
use crate::types::JsonValue;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use tracing::warn;

/// Date format Zoom expects for `from`/`to`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Zoom only reports one month of data per request
pub const MAX_RANGE_DAYS: i64 = 31;

/// Recording file type that marks an AI Companion summary
pub const SUMMARY_FILE_TYPE: &str = "SUMMARY";

// ============================================================================
// Date Range
// ============================================================================

/// Inclusive `from`/`to` date window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    /// Build a range, rejecting one that ends before it starts
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self> {
        if from > to {
            return Err(Error::invalid_value(
                "from",
                format!("{from} is after {to}"),
            ));
        }

        let range = Self { from, to };
        if range.days() > MAX_RANGE_DAYS {
            warn!(
                "Date range {range} spans {} days; Zoom returns at most one month of data",
                range.days()
            );
        }
        Ok(range)
    }

    /// Parse a range from two `yyyy-MM-dd` strings
    pub fn parse(from: &str, to: &str) -> Result<Self> {
        Self::new(parse_date("from", from)?, parse_date("to", to)?)
    }

    /// Number of days covered, counting both ends
    pub fn days(&self) -> i64 {
        (self.to - self.from).num_days() + 1
    }

    /// Query parameters for a listing request
    pub fn to_args(&self) -> FetchArgs {
        FetchArgs::new()
            .param("from", self.from.format(DATE_FORMAT).to_string())
            .param("to", self.to.format(DATE_FORMAT).to_string())
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {}",
            self.from.format(DATE_FORMAT),
            self.to.format(DATE_FORMAT)
        )
    }
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|e| {
        Error::invalid_value(field, format!("'{value}' is not a yyyy-MM-dd date: {e}"))
    })
}

// ============================================================================
// Action Output
// ============================================================================

/// Result of running an action: a human-readable summary plus its records
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionOutput<T> {
    pub summary: String,
    pub records: Vec<T>,
}

impl<T> ActionOutput<T> {
    /// Pair a summary line with the records it describes
    pub fn new(summary: impl Into<String>, records: Vec<T>) -> Self {
        Self {
            summary: summary.into(),
            records,
        }
    }

    /// Number of records returned
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ============================================================================
// Recordings
// ============================================================================

fn is_summary_file(file: &JsonValue) -> bool {
    file.get("file_type").and_then(JsonValue::as_str) == Some(SUMMARY_FILE_TYPE)
}

/// A recorded meeting that has an AI summary available
///
/// Meeting fields are carried through exactly as Zoom sent them; only the
/// recording files are filtered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeetingSummaryRecording {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_uuid: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_size: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recording_count: Option<JsonValue>,
    pub summary_files: Vec<JsonValue>,
}

impl MeetingSummaryRecording {
    /// Shape a listed meeting, or `None` when it has no summary file
    ///
    /// A missing, null or non-array `recording_files` means no summary.
    pub fn from_record(mut record: JsonValue) -> Option<Self> {
        let summary_files: Vec<JsonValue> = record
            .get("recording_files")
            .and_then(JsonValue::as_array)?
            .iter()
            .filter(|file| is_summary_file(file))
            .cloned()
            .collect();

        if summary_files.is_empty() {
            return None;
        }

        let mut field = |key: &str| record.get_mut(key).map(JsonValue::take);
        Some(Self {
            meeting_id: field("id"),
            meeting_uuid: field("uuid"),
            topic: field("topic"),
            start_time: field("start_time"),
            duration: field("duration"),
            host_id: field("host_id"),
            total_size: field("total_size"),
            recording_count: field("recording_count"),
            summary_files,
        })
    }
}
