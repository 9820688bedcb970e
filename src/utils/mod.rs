//! Utilities shared by the load pipeline.
//!
//! ## Components
//!
//! - **Copy**: file copies that keep permissions and timestamps
//! - **Report**: the Markdown report listing every case folder
//! - **Summary**: a JSON record of one load run
//!
//! ## Writing the Load Report
//!
//! ```no_run
//! use case_loader::config::LoadConfig;
//! use case_loader::utils::report::create_load_report;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = LoadConfig::new("/data/Ticket Work", "/data/case-repo");
//! let report_path = create_load_report(&config)?;
//! println!("Report written to {}", report_path.display());
//! # Ok(())
//! # }
//! ```

/// Metadata-preserving file copies
pub mod copy;

/// Markdown load report listing all case folders
pub mod report;

/// JSON summary of a load run
pub mod summary;
