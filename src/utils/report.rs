use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use log::info;
use walkdir::WalkDir;

use crate::config::LoadConfig;
use crate::constants::DATETIME_FORMAT;

/// List the case folders directly under `cases_dir`, sorted by name.
///
/// Every subdirectory is listed, including cases from earlier runs. A
/// missing `cases_dir` yields an empty list.
pub fn list_cases(cases_dir: &Path) -> Result<Vec<String>> {
    if !cases_dir.exists() {
        return Ok(Vec::new());
    }

    let mut cases = Vec::new();
    for entry in WalkDir::new(cases_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry
            .with_context(|| format!("Failed to list cases in {}", cases_dir.display()))?;
        if entry.path().is_dir() {
            cases.push(entry.file_name().to_string_lossy().into_owned());
        }
    }

    Ok(cases)
}

/// Render the Markdown load report
pub fn render_load_report(
    source_dir: &Path,
    cases_dir: &Path,
    cases: &[String],
    load_time: DateTime<Local>,
) -> String {
    let mut report = format!(
        "# Overnight Load Report\n\n\
         **Load Date**: {}  \n\
         **Source**: {}  \n\
         **Destination**: {}  \n\n\
         ## Summary\n\n\
         Files have been loaded from the Ticket Work directory into organized case folders.\n\n\
         ## Cases Created\n\n",
        load_time.format(DATETIME_FORMAT),
        source_dir.display(),
        cases_dir.display(),
    );

    for case in cases {
        report.push_str(&format!("- `{}/`\n", case));
    }

    report
}

/// Write the load report to `config.report_path()`, replacing any previous one
pub fn create_load_report(config: &LoadConfig) -> Result<PathBuf> {
    let cases_dir = config.cases_dir();
    let cases = list_cases(&cases_dir)?;
    let report = render_load_report(&config.source_dir, &cases_dir, &cases, Local::now());

    let report_path = config.report_path();
    fs::write(&report_path, report)
        .with_context(|| format!("Failed to write load report: {}", report_path.display()))?;

    info!("Load report created: {}", report_path.display());
    Ok(report_path)
}
