//! Tests that run the `case-loader` binary and check its exit status and
//! the files a run leaves behind.

mod common;

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use anyhow::Result;
use tempfile::TempDir;

use common::ticket;

fn run_loader(args: &[&str]) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_case-loader")).args(args).output()?)
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

fn log_files(log_dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(log_dir)? {
        let name = entry?.file_name().to_string_lossy().into_owned();
        if name.starts_with("load_") && name.ends_with(".log") {
            names.push(name);
        }
    }
    Ok(names)
}

#[test]
fn test_missing_source_exits_zero_with_report_and_log() -> Result<()> {
    let repo = TempDir::new()?;
    let missing = repo.path().join("no-such-source");

    let output = run_loader(&["--source", path_arg(&missing), "--repo", path_arg(repo.path())])?;

    assert!(output.status.success(), "status: {:?}", output.status);
    let report = fs::read_to_string(repo.path().join("LOAD_REPORT.md"))?;
    assert!(report.starts_with("# Overnight Load Report"));

    let logs = log_files(&repo.path().join("logs"))?;
    assert_eq!(logs.len(), 1);
    let log = fs::read_to_string(repo.path().join("logs").join(&logs[0]))?;
    assert!(log.contains("Source path does not exist"));
    assert!(log.contains("Overnight load process completed successfully"));
    Ok(())
}

#[test]
fn test_successful_load_writes_cases_and_summary() -> Result<()> {
    let source = TempDir::new()?;
    let repo = TempDir::new()?;
    ticket(source.path(), "CE00000007", &[("notes.txt", "n")])?;

    let output = run_loader(&["-s", path_arg(source.path()), "-r", path_arg(repo.path())])?;

    assert!(output.status.success(), "status: {:?}", output.status);
    assert!(repo.path().join("cases/case-CE00000007/notes/notes.txt").is_file());
    let summaries: Vec<_> = fs::read_dir(repo.path().join("logs"))?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_name().to_string_lossy().starts_with("load_summary_"))
        .collect();
    assert_eq!(summaries.len(), 1);
    Ok(())
}

#[test]
fn test_unwritable_report_exits_one() -> Result<()> {
    let source = TempDir::new()?;
    let repo = TempDir::new()?;
    fs::create_dir(repo.path().join("LOAD_REPORT.md"))?;

    let output = run_loader(&["--source", path_arg(source.path()), "--repo", path_arg(repo.path())])?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(log_files(&repo.path().join("logs"))?.len(), 1);
    Ok(())
}

#[test]
fn test_invalid_config_exits_one_before_logging() -> Result<()> {
    let repo = TempDir::new()?;
    let config = repo.path().join("loader.yaml");
    fs::write(&config, "source_dir: [unterminated")?;

    let output = run_loader(&["--config", path_arg(&config), "--repo", path_arg(repo.path())])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Fatal error"));
    assert!(!repo.path().join("logs").exists());
    Ok(())
}
