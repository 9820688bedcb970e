use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use filetime::{set_file_times, FileTime};
use log::debug;

/// Copy a file and carry over its permissions and access/modification times.
///
/// An existing file at `dest` is overwritten, even when an earlier copy left
/// it read-only. Returns the number of bytes copied.
pub fn copy_with_metadata(source: &Path, dest: &Path) -> Result<u64> {
    let metadata = fs::metadata(source)
        .with_context(|| format!("Failed to get metadata for {}", source.display()))?;

    if let Ok(existing) = fs::metadata(dest) {
        debug!("Overwriting {}", dest.display());
        let mut permissions = existing.permissions();
        if permissions.readonly() {
            permissions.set_readonly(false);
            fs::set_permissions(dest, permissions)
                .with_context(|| format!("Failed to make {} writable", dest.display()))?;
        }
    }

    // fs::copy also copies the permission bits
    let bytes = fs::copy(source, dest)
        .with_context(|| format!("Failed to copy {} to {}", source.display(), dest.display()))?;

    let accessed = FileTime::from_last_access_time(&metadata);
    let modified = FileTime::from_last_modification_time(&metadata);
    set_file_times(dest, accessed, modified)
        .with_context(|| format!("Failed to set file times on {}", dest.display()))?;

    Ok(bytes)
}
