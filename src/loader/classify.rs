use std::fmt;
use std::path::Path;

use anyhow::Result;
use log::{debug, info};

use crate::constants::{ARCHIVE_EXTENSION, NOTES_DIR, NOTE_EXTENSIONS, SCRIPTS_DIR, SCRIPT_EXTENSIONS};
use crate::loader::list_entries;
use crate::utils::copy::copy_with_metadata;

/// Destination bucket for a file found in a ticket folder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCategory {
    /// Documentation and logs, copied to `notes/`
    Notes,
    /// Scripts, copied to `scripts/`
    Scripts,
    /// Zip archives, left to the archive extractor
    Archive,
    /// Anything unrecognised, copied to `scripts/`
    Other,
}

impl FileCategory {
    /// Case subfolder the file is copied into, `None` for archives
    pub fn target_dir(&self) -> Option<&'static str> {
        match self {
            FileCategory::Notes => Some(NOTES_DIR),
            FileCategory::Scripts | FileCategory::Other => Some(SCRIPTS_DIR),
            FileCategory::Archive => None,
        }
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileCategory::Notes => write!(f, "notes"),
            FileCategory::Scripts => write!(f, "scripts"),
            FileCategory::Archive => write!(f, "archive"),
            FileCategory::Other => write!(f, "other"),
        }
    }
}

/// Classify a file by the suffix of its name (case-sensitive)
pub fn classify_file_name(file_name: &str) -> FileCategory {
    if NOTE_EXTENSIONS.iter().any(|ext| file_name.ends_with(ext)) {
        FileCategory::Notes
    } else if SCRIPT_EXTENSIONS.iter().any(|ext| file_name.ends_with(ext)) {
        FileCategory::Scripts
    } else if file_name.ends_with(ARCHIVE_EXTENSION) {
        FileCategory::Archive
    } else {
        FileCategory::Other
    }
}

/// Copy the direct files of `source_folder` into the case's subfolders.
///
/// Subdirectories are ignored and zip files are left for
/// [`extract_zip_files`](crate::loader::archive::extract_zip_files). Files
/// already present in the case are overwritten. The first failing copy
/// aborts the folder and is returned to the caller.
pub fn copy_files(case_path: &Path, source_folder: &Path) -> Result<usize> {
    let mut copied = 0;

    for path in list_entries(source_folder)? {
        if !path.is_file() {
            continue;
        }

        let file_name = match path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => continue,
        };

        let category = classify_file_name(&file_name);
        let target_dir = match category.target_dir() {
            Some(dir) => dir,
            None => {
                debug!("Leaving archive for extraction: {}", file_name);
                continue;
            }
        };

        let dest = case_path.join(target_dir).join(&file_name);
        copy_with_metadata(&path, &dest)?;
        info!("Copied to {}: {}", target_dir, file_name);
        copied += 1;
    }

    Ok(copied)
}
