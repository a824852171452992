//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::ZoomConfig;
use crate::error::{Result, ResultExt};
use crate::zoom::{self, ActionOutput, DateRange, ZoomClient};
use serde::Serialize;
use std::io::Write;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;
        let client = ZoomClient::from_config(&config)?;

        match &self.cli.command {
            Commands::Summaries { from, to, max } => {
                let range = DateRange::parse(from, to)?;
                let output = zoom::get_meeting_summaries(&client, range, *max).await?;
                self.emit(&output)
            }
            Commands::Summary { meeting_id } => {
                let output = zoom::get_meeting_summary(&client, meeting_id).await?;
                self.emit(&output)
            }
            Commands::UserSummaries {
                user_id,
                from,
                to,
                max,
            } => {
                let range = DateRange::parse(from, to)?;
                let output =
                    zoom::list_user_meeting_summaries(&client, user_id, range, *max).await?;
                self.emit(&output)
            }
        }
    }

    /// Load configuration from the `-C` file, then apply `ZOOM_*` overrides
    fn load_config(&self) -> Result<ZoomConfig> {
        let mut config = match &self.cli.config {
            Some(path) => {
                debug!("Loading config from {}", path.display());
                ZoomConfig::from_file(path)
                    .with_context(|| format!("Loading config {}", path.display()))?
            }
            None => ZoomConfig::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Summary to stderr, records to stdout
    fn emit<T: Serialize>(&self, output: &ActionOutput<T>) -> Result<()> {
        eprintln!("{}", output.summary);

        let rendered = render_records(self.cli.format, &output.records)?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(rendered.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

/// Render records in the requested format, newline-terminated
pub fn render_records<T: Serialize>(format: OutputFormat, records: &[T]) -> Result<String> {
    let mut out = String::new();
    match format {
        OutputFormat::Json => {
            for record in records {
                out.push_str(&serde_json::to_string(record)?);
                out.push('\n');
            }
        }
        OutputFormat::Pretty => {
            out.push_str(&serde_json::to_string_pretty(records)?);
            out.push('\n');
        }
    }
    Ok(out)
}
