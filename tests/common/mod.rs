//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use zip::{write::FileOptions, ZipWriter};

/// Write a zip archive holding the given (name, content) entries
pub fn write_zip(path: &Path, entries: &[(&str, &str)]) -> Result<()> {
    let mut zip = ZipWriter::new(fs::File::create(path)?);
    for (name, content) in entries {
        zip.start_file(*name, FileOptions::default())?;
        zip.write_all(content.as_bytes())?;
    }
    zip.finish()?;
    Ok(())
}

/// Create a ticket folder under `root` holding the given files
pub fn ticket(root: &Path, name: &str, files: &[(&str, &str)]) -> Result<()> {
    let dir = root.join(name);
    fs::create_dir_all(&dir)?;
    for (file, content) in files {
        fs::write(dir.join(file), content)?;
    }
    Ok(())
}

/// Names of the case folders currently under `cases_dir`
pub fn case_names(cases_dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(cases_dir)? {
        names.push(entry?.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}
