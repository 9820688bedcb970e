use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use log::info;
use serde_json::json;
use uuid::Uuid;

use crate::config::LoadConfig;
use crate::constants::FILE_TIMESTAMP_FORMAT;
use crate::models::LoadStats;

/// Create a JSON summary of one load run.
///
/// The Markdown report lists the cases; this summary records what the run
/// itself did, for tooling that tracks nightly loads.
///
/// # Example Output
///
/// ```json
/// {
///   "load_id": "550e8400-e29b-41d4-a716-446655440000",
///   "started": "2026-02-27T02:00:00+11:00",
///   "finished": "2026-02-27T02:03:12+11:00",
///   "source_dir": "/data/Ticket Work",
///   "cases_dir": "/repo/cases",
///   "loader_version": "0.1.0",
///   "stats": { "folders_processed": 12, ... },
///   "report": "/repo/LOAD_REPORT.md"
/// }
/// ```
pub fn create_load_summary(
    config: &LoadConfig,
    started: DateTime<Local>,
    finished: DateTime<Local>,
    stats: &LoadStats,
    report_path: Option<&Path>,
) -> Result<String> {
    let summary = json!({
        "load_id": Uuid::new_v4().to_string(),
        "started": started.to_rfc3339(),
        "finished": finished.to_rfc3339(),
        "source_dir": config.source_dir.display().to_string(),
        "cases_dir": config.cases_dir().display().to_string(),
        "loader_version": env!("CARGO_PKG_VERSION"),
        "stats": stats,
        "report": report_path.map(|p| p.display().to_string()),
    });

    serde_json::to_string_pretty(&summary).context("Failed to serialize load summary to JSON")
}

/// Write the JSON summary next to the run's log file
pub fn write_load_summary(
    config: &LoadConfig,
    started: DateTime<Local>,
    stats: &LoadStats,
    report_path: Option<&Path>,
) -> Result<PathBuf> {
    let summary = create_load_summary(config, started, Local::now(), stats, report_path)?;

    let log_dir = config.log_dir();
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create directory: {}", log_dir.display()))?;

    let summary_path = log_dir.join(format!(
        "load_summary_{}.json",
        started.format(FILE_TIMESTAMP_FORMAT)
    ));
    fs::write(&summary_path, summary)
        .with_context(|| format!("Failed to write load summary: {}", summary_path.display()))?;

    info!("Load summary written to {}", summary_path.display());
    Ok(summary_path)
}
