use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use log::{debug, info};

use crate::constants::{
    DATETIME_FORMAT, DATE_FORMAT, DEFAULT_CASE_STATUS, NOTES_DIR, README_NAME, SCRIPTS_DIR,
};

/// Create the standard case folder layout.
///
/// `scripts/` and `notes/` are created if missing. `README.md` is only
/// written when absent, so a readme from an earlier load (or one edited by
/// hand) is never replaced.
pub fn create_case_structure(case_name: &str, case_path: &Path, source_description: &str) -> Result<()> {
    for dir_name in [SCRIPTS_DIR, NOTES_DIR] {
        let dir_path = case_path.join(dir_name);
        fs::create_dir_all(&dir_path)
            .with_context(|| format!("Failed to create directory: {}", dir_path.display()))?;
    }

    let readme_path = case_path.join(README_NAME);
    if readme_path.exists() {
        debug!("Keeping existing readme: {}", readme_path.display());
    } else {
        let readme = render_readme(case_name, source_description, Local::now());
        fs::write(&readme_path, readme)
            .with_context(|| format!("Failed to write readme: {}", readme_path.display()))?;
    }

    info!("Created case structure: {}", case_path.display());
    Ok(())
}

/// Render the readme written into new case folders
pub fn render_readme(case_name: &str, source_description: &str, now: DateTime<Local>) -> String {
    format!(
        "# {case_name}\n\n\
         **Date Created**: {date}  \n\
         **Status**: {status}  \n\
         **Source**: {source_description}  \n\n\
         ## Overview\n\n\
         Case loaded from ticket work directory.\n\n\
         ## Contents\n\n\
         - **Scripts**: Loaded scripts and diagnostics\n\
         - **Notes**: Documentation and configuration files\n\n\
         ## Load Date\n\n\
         Loaded on {loaded}\n\n",
        date = now.format(DATE_FORMAT),
        status = DEFAULT_CASE_STATUS,
        loaded = now.format(DATETIME_FORMAT),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    #[test]
    fn test_creates_required_subdirectories() {
        let temp_dir = TempDir::new().unwrap();
        let case_path = temp_dir.path().join("case-alpha");

        create_case_structure("case-alpha", &case_path, "Test load").unwrap();

        assert!(case_path.join("scripts").is_dir());
        assert!(case_path.join("notes").is_dir());
        assert!(case_path.join("README.md").is_file());
        assert!(!case_path.join("archives").exists());
    }

    #[test]
    fn test_readme_contents() {
        let temp_dir = TempDir::new().unwrap();
        let case_path = temp_dir.path().join("case-CE00064372");

        create_case_structure("case-CE00064372", &case_path, "Nightly import").unwrap();

        let readme = fs::read_to_string(case_path.join("README.md")).unwrap();
        assert!(readme.starts_with("# case-CE00064372\n"));
        assert!(readme.contains("**Status**: ACTIVE"));
        assert!(readme.contains("**Source**: Nightly import"));
        assert!(readme.contains("Loaded on "));
    }

    #[test]
    fn test_existing_readme_is_kept() {
        let temp_dir = TempDir::new().unwrap();
        let case_path = temp_dir.path().join("case-beta");
        fs::create_dir_all(&case_path).unwrap();
        fs::write(case_path.join("README.md"), "hand written notes").unwrap();

        create_case_structure("case-beta", &case_path, "Test load").unwrap();
        create_case_structure("case-beta", &case_path, "Test load").unwrap();

        let readme = fs::read_to_string(case_path.join("README.md")).unwrap();
        assert_eq!(readme, "hand written notes");
    }

    #[test]
    fn test_render_readme_dates() {
        let now = Local.with_ymd_and_hms(2026, 2, 27, 23, 15, 4).unwrap();
        let readme = render_readme("case-gamma", "Overnight", now);

        assert!(readme.contains("**Date Created**: 2026-02-27  \n"));
        assert!(readme.contains("Loaded on 2026-02-27 23:15:04"));
    }
}
