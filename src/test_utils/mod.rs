//! Test utilities for case-loader
//!
//! Builders for ticket work trees and zip fixtures shared by the unit tests.

#![cfg(test)]

use anyhow::Result;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;
use zip::{write::FileOptions, ZipWriter};

/// Write a zip archive at `path` holding the given (name, content) entries
pub fn write_zip(path: &Path, entries: &[(&str, &str)]) -> Result<()> {
    let file = fs::File::create(path)?;
    let mut zip = ZipWriter::new(file);

    for (name, content) in entries {
        zip.start_file(*name, FileOptions::default())?;
        zip.write_all(content.as_bytes())?;
    }

    zip.finish()?;
    Ok(())
}

/// Creates a ticket work tree in a temporary directory:
///
/// ```text
/// CE00064372/        notes.txt, run.py          (leaf)
/// Payroll Issues/                               (container)
///     Bank Feed/     fix.sql                    (leaf)
///     STP Rejection/ summary.md, export.zip     (leaf)
/// .git/              config                     (hidden)
/// loose.txt                                     (file at the root)
/// ```
pub fn create_ticket_tree() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;
    let base = temp_dir.path();

    let ticket = base.join("CE00064372");
    fs::create_dir_all(&ticket)?;
    fs::write(ticket.join("notes.txt"), "Customer reported failed sync")?;
    fs::write(ticket.join("run.py"), "print('diagnose')\n")?;

    let bank_feed = base.join("Payroll Issues").join("Bank Feed");
    fs::create_dir_all(&bank_feed)?;
    fs::write(bank_feed.join("fix.sql"), "UPDATE feeds SET state = 1;")?;

    let stp = base.join("Payroll Issues").join("STP Rejection");
    fs::create_dir_all(&stp)?;
    fs::write(stp.join("summary.md"), "# STP rejection")?;
    write_zip(&stp.join("export.zip"), &[("export/payload.xml", "<stp/>")])?;

    let hidden = base.join(".git");
    fs::create_dir_all(&hidden)?;
    fs::write(hidden.join("config"), "[core]")?;

    fs::write(base.join("loose.txt"), "not in any ticket")?;

    Ok(temp_dir)
}
