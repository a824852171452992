//! Zoom meeting summary connector
//!
//! Binds the Zoom endpoints that expose AI Companion meeting summaries and
//! builds the three actions on top of [`crate::stream::ResourceStream`]:
//!
//! - [`get_meeting_summaries`] - account-wide summaries within a date range
//! - [`get_meeting_summary`] - one meeting's summary
//! - [`list_user_meeting_summaries`] - a user's recordings that have a summary

mod actions;
mod client;
mod types;

pub use actions::{
    get_meeting_summaries, get_meeting_summary, list_user_meeting_summaries, MEETINGS_FIELD,
    SUMMARIES_FIELD,
};
pub use client::{encode_meeting_id, ZoomClient, MEETING_SUMMARIES_PATH};
pub use types::{
    ActionOutput, DateRange, MeetingSummaryRecording, DATE_FORMAT,
    MAX_RANGE_DAYS, SUMMARY_FILE_TYPE,
};
