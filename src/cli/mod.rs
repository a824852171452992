//! CLI module
//!
//! Command-line interface for the meeting summary actions.
//!
//! # Commands
//!
//! - `summaries` - Account-wide summaries within a date range
//! - `summary` - One meeting's summary
//! - `user-summaries` - A user's recordings that have a summary

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::{render_records, Runner};
