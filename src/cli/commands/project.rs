use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::ValueEnum;
use common::TimelineRecords;
use std::path::Path;
use tracing::{debug, info, instrument};

use crate::config::Settings;
use crate::handlers::timeline::TimelineRequest;
use crate::helpers::converters::timeline_to_response;
use crate::helpers::export::timeline_to_csv;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// The same body the service returns, pretty printed
    #[default]
    Json,
    /// One row per event
    Csv,
}

#[derive(Debug, Clone, Default)]
pub struct ProjectOptions {
    pub today: Option<NaiveDate>,
    pub horizon_days: Option<u32>,
    pub lookback_days: Option<u32>,
    pub format: OutputFormat,
}

/// Reads records from `path` and renders their timeline.
#[instrument(skip(options, settings))]
pub fn project_file(path: &Path, options: &ProjectOptions, settings: &Settings) -> Result<String> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read records from {}", path.display()))?;
    let records: TimelineRecords = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse records in {}", path.display()))?;
    debug!(
        "Read {} recurring payments and {} installments",
        records.recurring_payments.len(),
        records.installments.len()
    );

    project_records(records, options, settings)
}

/// Renders the timeline of already parsed records.
pub fn project_records(records: TimelineRecords, options: &ProjectOptions, settings: &Settings) -> Result<String> {
    let request = TimelineRequest {
        recurring_payments: records.recurring_payments,
        installments: records.installments,
        today: options.today,
        horizon_days: options.horizon_days,
        lookback_days: options.lookback_days,
        ..Default::default()
    };
    let today = request.resolve_today();
    let timeline = request.project(settings, today)?;
    info!(
        "Projected {} events between {} and {}",
        timeline.events.len(),
        timeline.window.start(),
        timeline.window.end()
    );

    match options.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&timeline_to_response(&timeline)?)?),
        OutputFormat::Csv => timeline_to_csv(&timeline.events),
    }
}
