//! The load pipeline: from a ticket work tree to case folders.
//!
//! ## Components
//!
//! - **normalize**: folder name to case name
//! - **structure**: `scripts/`, `notes/` and `README.md` for a case
//! - **classify**: copies a folder's direct files into the case by extension
//! - **archive**: expands zip files into `archives/`
//! - **walker**: descends the source tree and drives the other components
//!
//! ## Example
//!
//! ```no_run
//! use case_loader::config::LoadConfig;
//! use case_loader::loader::process_directory;
//!
//! let config = LoadConfig::new("/data/Ticket Work", "/data/case-repo");
//! let stats = process_directory(&config);
//! println!("{} folders processed, {} files copied", stats.folders_processed, stats.files_copied);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub mod archive;
pub mod classify;
pub mod normalize;
pub mod structure;
pub mod walker;

pub use archive::{extract_zip, extract_zip_files};
pub use classify::{classify_file_name, copy_files, FileCategory};
pub use normalize::normalize_case_name;
pub use structure::create_case_structure;
pub use walker::{process_directory, DirectoryWalker};

/// List the entries of a directory, sorted by name so runs are reproducible
pub(crate) fn list_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?
    {
        let entry = entry.with_context(|| format!("Failed to read entry in {}", dir.display()))?;
        entries.push(entry.path());
    }
    entries.sort();
    Ok(entries)
}
