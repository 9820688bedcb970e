//! # case-loader
//!
//! Organizes ad-hoc ticket work folders into a standardized case repository.
//!
//! ## Overview
//!
//! The loader walks a source tree of ticket folders, gives each folder a
//! case directory (`case-<name>/` with `scripts/`, `notes/` and a
//! `README.md`), copies the folder's files into it by extension, expands
//! any zip archives into `archives/`, and finally writes a Markdown report
//! listing every case in the repository.
//!
//! It is meant to run unattended overnight: individual failures (a corrupt
//! archive, an unreadable folder) are logged and the run carries on.
//!
//! ## Usage
//!
//! ```no_run
//! use case_loader::config::LoadConfig;
//! use case_loader::loader::process_directory;
//! use case_loader::utils::report::create_load_report;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = LoadConfig::new("/data/Ticket Work", "/data/case-repo");
//!
//! let stats = process_directory(&config);
//! println!("Loaded {} folders", stats.folders_processed);
//!
//! create_load_report(&config)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Load configuration and YAML persistence
//! - [`loader`]: Name normalization, case layout, copying, extraction and the walker
//! - [`models`]: Run statistics
//! - [`utils`]: Metadata-preserving copies, the Markdown report and the JSON summary
//! - [`security`]: Archive entry validation
//! - [`constants`]: Folder names, extension tables and defaults

/// Command-line interface definitions and argument parsing
pub mod cli;

/// Configuration management
pub mod config;

/// Application constants
pub mod constants;

/// The directory walk and the per-folder load steps
pub mod loader;

/// Data models shared across the pipeline
pub mod models;

/// Security utilities for archive extraction
pub mod security;

/// Copying, reporting and summary utilities
pub mod utils;

/// Test utilities and helpers
#[cfg(test)]
pub mod test_utils;
