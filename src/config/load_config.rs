use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::config::env_vars::expand_path;
use crate::constants::{
    DEFAULT_CASES_DIR_NAME, DEFAULT_LOG_DIR_NAME, DEFAULT_REPORT_NAME, DEFAULT_REPO_DIR,
    DEFAULT_SOURCE_DESCRIPTION, DEFAULT_SOURCE_DIR,
};

/// Settings for one load run.
///
/// Built once at process start and passed by reference to the walker,
/// the copier and the report writer. `cases_dir` and `log_dir` default to
/// `cases/` and `logs/` under `repo_dir` when not set.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LoadConfig {
    /// Root of the ticket work tree to load from
    pub source_dir: PathBuf,
    /// Case repository root; the load report is written here
    #[serde(default = "default_repo_dir")]
    pub repo_dir: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cases_dir: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,
    #[serde(default = "default_report_name")]
    pub report_name: String,
    /// Text recorded on the "Source" line of new case readmes
    #[serde(default = "default_source_description")]
    pub source_description: String,
}

fn default_repo_dir() -> PathBuf {
    PathBuf::from(DEFAULT_REPO_DIR)
}

fn default_report_name() -> String {
    DEFAULT_REPORT_NAME.to_string()
}

fn default_source_description() -> String {
    DEFAULT_SOURCE_DESCRIPTION.to_string()
}

impl Default for LoadConfig {
    fn default() -> Self {
        LoadConfig {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            repo_dir: default_repo_dir(),
            cases_dir: None,
            log_dir: None,
            report_name: default_report_name(),
            source_description: default_source_description(),
        }
    }
}

impl LoadConfig {
    /// Configuration rooted at the given source and repository directories
    pub fn new(source_dir: impl Into<PathBuf>, repo_dir: impl Into<PathBuf>) -> Self {
        LoadConfig {
            source_dir: source_dir.into(),
            repo_dir: repo_dir.into(),
            ..Self::default()
        }
    }

    /// Directory holding the `case-*` folders
    pub fn cases_dir(&self) -> PathBuf {
        self.cases_dir
            .clone()
            .unwrap_or_else(|| self.repo_dir.join(DEFAULT_CASES_DIR_NAME))
    }

    /// Directory receiving per-run log files and JSON summaries
    pub fn log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .unwrap_or_else(|| self.repo_dir.join(DEFAULT_LOG_DIR_NAME))
    }

    /// Location of the Markdown load report
    pub fn report_path(&self) -> PathBuf {
        self.repo_dir.join(&self.report_name)
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: LoadConfig =
            serde_yaml::from_str(&content).context("Failed to parse YAML config")?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save_to_yaml_file(&self, path: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self).context("Failed to serialize config to YAML")?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(path, yaml)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        info!("Saved configuration to {}", path.display());
        Ok(())
    }

    /// Expand %VAR%, $VAR and ${VAR} in every path field
    pub fn process_environment_variables(&mut self) {
        self.source_dir = expand_path_buf(&self.source_dir);
        self.repo_dir = expand_path_buf(&self.repo_dir);
        self.cases_dir = self.cases_dir.as_deref().map(expand_path_buf);
        self.log_dir = self.log_dir.as_deref().map(expand_path_buf);
    }
}

fn expand_path_buf(path: &Path) -> PathBuf {
    PathBuf::from(expand_path(&path.to_string_lossy()))
}

/// Load a configuration file or fall back to defaults.
///
/// * `Some(path)` that exists is parsed as YAML.
/// * `Some(path)` that does not exist gets the defaults written to it.
/// * `None` uses the defaults without touching the filesystem.
pub fn load_or_create_config(config_path: Option<&Path>) -> Result<LoadConfig> {
    match config_path {
        Some(path) if path.exists() => LoadConfig::from_yaml_file(path),
        Some(path) => {
            info!("Config file {} not found, creating default", path.display());
            let config = LoadConfig::default();
            config.save_to_yaml_file(path)?;
            Ok(config)
        }
        None => {
            debug!("No config file given, using defaults");
            Ok(LoadConfig::default())
        }
    }
}
