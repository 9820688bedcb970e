//! Path validation for archive extraction.
//!
//! Zip entry names are attacker-controlled; before an entry is written it
//! must resolve to a path strictly inside the extraction directory.

use anyhow::{bail, Result};
use std::path::{Component, Path, PathBuf};

/// Validate a zip entry name and return it as a relative path.
///
/// Rejects:
/// - `..` components
/// - absolute paths and Windows drive or UNC prefixes
/// - null bytes
/// - names that resolve to nothing (empty, or only `.`)
pub fn validate_archive_entry(name: &str) -> Result<PathBuf> {
    if name.contains('\0') {
        bail!("Entry name contains null bytes: {:?}", name);
    }

    let mut relative = PathBuf::new();
    for component in Path::new(name).components() {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                bail!("Path traversal attempt detected in entry: {}", name);
            }
            Component::RootDir | Component::Prefix(_) => {
                bail!("Absolute entry path not allowed: {}", name);
            }
        }
    }

    if relative.as_os_str().is_empty() {
        bail!("Entry name is empty: {:?}", name);
    }

    Ok(relative)
}
