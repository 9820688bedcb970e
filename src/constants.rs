//! Global constants for the case loader.
//!
//! Folder names, file classification tables and default locations live here
//! so the walker, the copier and the report writer agree on them.

// Case layout
/// Subfolder receiving scripts and unclassified files
pub const SCRIPTS_DIR: &str = "scripts";

/// Subfolder receiving documentation and logs
pub const NOTES_DIR: &str = "notes";

/// Subfolder receiving extracted archives and the original zip files
pub const ARCHIVES_DIR: &str = "archives";

/// Per-case readme, written once and never overwritten
pub const README_NAME: &str = "README.md";

/// Prefix of every case folder name
pub const CASE_PREFIX: &str = "case-";

/// Ticket numbers starting with this prefix are used verbatim (e.g. CE00064372)
pub const TICKET_PREFIX: &str = "CE";

/// Status recorded in newly created readmes
pub const DEFAULT_CASE_STATUS: &str = "ACTIVE";

// File classification (matched as file name suffixes, case-sensitive)
pub const NOTE_EXTENSIONS: &[&str] = &[".txt", ".md", ".log", ".doc", ".docx"];
pub const SCRIPT_EXTENSIONS: &[&str] = &[".py", ".ps1", ".sh", ".bat", ".sql"];
pub const ARCHIVE_EXTENSION: &str = ".zip";

// Default locations
/// Default source root on Windows (OneDrive ticket work folder)
#[cfg(windows)]
pub const DEFAULT_SOURCE_DIR: &str = "%USERPROFILE%\\OneDrive\\Documents\\Ticket Work";

/// Default source root on Unix-like systems
#[cfg(not(windows))]
pub const DEFAULT_SOURCE_DIR: &str = "$HOME/Documents/Ticket Work";

pub const DEFAULT_REPO_DIR: &str = ".";
pub const DEFAULT_CASES_DIR_NAME: &str = "cases";
pub const DEFAULT_LOG_DIR_NAME: &str = "logs";
pub const DEFAULT_REPORT_NAME: &str = "LOAD_REPORT.md";
pub const DEFAULT_CONFIG_NAME: &str = "case-loader.yaml";
pub const DEFAULT_SOURCE_DESCRIPTION: &str = "Automated overnight load from ticket work directory";

// Timestamp formats
/// Used in log and summary file names
pub const FILE_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Width of the `=` banner lines bracketing a run in the log
pub const LOG_BANNER_WIDTH: usize = 60;
