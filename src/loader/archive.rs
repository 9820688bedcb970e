use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, error, info, warn};
use zip::ZipArchive;

use crate::constants::{ARCHIVES_DIR, ARCHIVE_EXTENSION};
use crate::loader::list_entries;
use crate::models::ArchiveOutcome;
use crate::security::validate_archive_entry;
use crate::utils::copy::copy_with_metadata;

/// Extract every zip found directly in `source_folder` into the case.
///
/// Each `name.zip` is expanded into `archives/name/` and the original is
/// copied unmodified to `archives/name.zip`. A failure on one archive is
/// logged and counted, and the remaining archives are still processed;
/// partially extracted files are left in place. Only failing to create
/// `archives/` or to list the folder is returned as an error.
pub fn extract_zip_files(case_path: &Path, source_folder: &Path) -> Result<ArchiveOutcome> {
    let archives_dir = case_path.join(ARCHIVES_DIR);
    fs::create_dir_all(&archives_dir)
        .with_context(|| format!("Failed to create directory: {}", archives_dir.display()))?;

    let mut outcome = ArchiveOutcome::default();

    for path in list_entries(source_folder)? {
        let file_name = match path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => continue,
        };
        let stem = match file_name.strip_suffix(ARCHIVE_EXTENSION) {
            Some(stem) => stem,
            None => continue,
        };

        let extract_to = archives_dir.join(stem);
        match extract_and_keep(&path, &extract_to, &archives_dir.join(&file_name)) {
            Ok(entries) => {
                info!("Extracted: {} to {} ({} entries)", file_name, extract_to.display(), entries);
                outcome.extracted += 1;
            }
            Err(e) => {
                error!("Failed to extract {}: {:#}", file_name, e);
                outcome.failed += 1;
            }
        }
    }

    Ok(outcome)
}

fn extract_and_keep(zip_path: &Path, extract_to: &Path, original_copy: &Path) -> Result<usize> {
    fs::create_dir_all(extract_to)
        .with_context(|| format!("Failed to create directory: {}", extract_to.display()))?;
    let entries = extract_zip(zip_path, extract_to)?;
    copy_with_metadata(zip_path, original_copy)?;
    Ok(entries)
}

/// Expand a zip archive into `dest_dir`, returning the number of files written.
///
/// Entries whose names contain `..`, an absolute root or a null byte are
/// dropped with a warning rather than cleaned and extracted. Unix permission
/// bits stored in the archive are not applied.
pub fn extract_zip(zip_path: &Path, dest_dir: &Path) -> Result<usize> {
    let file = fs::File::open(zip_path)
        .with_context(|| format!("Failed to open {}", zip_path.display()))?;
    let mut archive = ZipArchive::new(file)
        .with_context(|| format!("Failed to read zip archive {}", zip_path.display()))?;

    let mut written = 0;
    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .with_context(|| format!("Failed to read entry {} of {}", i, zip_path.display()))?;

        let relative = match validate_archive_entry(entry.name()) {
            Ok(relative) => relative,
            Err(e) => {
                warn!("Skipping entry in {}: {}", zip_path.display(), e);
                continue;
            }
        };
        let out_path = dest_dir.join(&relative);

        if entry.is_dir() {
            fs::create_dir_all(&out_path)
                .with_context(|| format!("Failed to create directory: {}", out_path.display()))?;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let mut out_file = fs::File::create(&out_path)
            .with_context(|| format!("Failed to create {}", out_path.display()))?;
        io::copy(&mut entry, &mut out_file)
            .with_context(|| format!("Failed to extract {}", relative.display()))?;

        debug!("Extracted {}", out_path.display());
        written += 1;
    }

    Ok(written)
}
