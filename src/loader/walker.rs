use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use log::{debug, error, info, warn};

use crate::config::LoadConfig;
use crate::loader::archive::extract_zip_files;
use crate::loader::classify::copy_files;
use crate::loader::list_entries;
use crate::loader::normalize::normalize_case_name;
use crate::loader::structure::create_case_structure;
use crate::models::LoadStats;

/// One directory whose entries are still being visited
struct Level {
    path: PathBuf,
    entries: std::vec::IntoIter<PathBuf>,
}

impl Level {
    fn open(path: &Path) -> Result<Self> {
        Ok(Level {
            path: path.to_path_buf(),
            entries: list_entries(path)?.into_iter(),
        })
    }
}

/// What the walker decided for one source subdirectory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    /// Not a directory, or a hidden one
    Skipped,
    /// Has direct files, loaded into its case
    Leaf,
    /// Only subdirectories, to be descended into
    Container,
}

/// Walks the source tree and loads every ticket folder into its case.
///
/// Every subdirectory (hidden ones excepted) gets a case folder named after
/// it. A subdirectory holding at least one direct file is a leaf: its files
/// are copied and its zips extracted. One without direct files is a
/// container and is descended into. Case folders are always created flat
/// under the cases root, whatever the depth of the source folder.
///
/// The traversal keeps an explicit stack of open directory levels and
/// visits entries depth-first in name order. An error while handling a level
/// is logged and abandons the rest of that level only; the parent level
/// carries on with its next entry.
pub struct DirectoryWalker<'a> {
    config: &'a LoadConfig,
    cases_dir: PathBuf,
    stats: LoadStats,
    case_sources: HashMap<String, PathBuf>,
}

impl<'a> DirectoryWalker<'a> {
    pub fn new(config: &'a LoadConfig) -> Self {
        DirectoryWalker {
            config,
            cases_dir: config.cases_dir(),
            stats: LoadStats::default(),
            case_sources: HashMap::new(),
        }
    }

    /// Walk the configured source root and return what was done
    pub fn walk(mut self) -> LoadStats {
        let config = self.config;
        let root = &config.source_dir;
        if !root.exists() {
            error!("Source path does not exist: {}", root.display());
            return self.stats;
        }

        let mut stack = Vec::new();
        match Level::open(root) {
            Ok(level) => stack.push(level),
            Err(e) => {
                error!("Error processing directory {}: {:#}", root.display(), e);
                self.stats.level_failures += 1;
                return self.stats;
            }
        }

        loop {
            let (level_path, next) = match stack.last_mut() {
                Some(level) => (level.path.clone(), level.entries.next()),
                None => break,
            };

            let entry = match next {
                Some(entry) => entry,
                None => {
                    debug!("Finished {}", level_path.display());
                    stack.pop();
                    continue;
                }
            };

            match self.visit(&entry) {
                Ok(Visit::Container) => match Level::open(&entry) {
                    Ok(level) => stack.push(level),
                    Err(e) => {
                        error!("Error processing directory {}: {:#}", entry.display(), e);
                        self.stats.level_failures += 1;
                    }
                },
                Ok(Visit::Leaf) | Ok(Visit::Skipped) => {}
                Err(e) => {
                    error!("Error processing directory {}: {:#}", level_path.display(), e);
                    self.stats.level_failures += 1;
                    stack.pop();
                }
            }
        }

        info!(
            "Walk finished: {} folders ({} leaf, {} container), {} files copied, {} archives extracted, {} archive failures",
            self.stats.folders_processed,
            self.stats.leaf_cases,
            self.stats.containers,
            self.stats.files_copied,
            self.stats.archives_extracted,
            self.stats.archive_failures,
        );
        self.stats
    }

    fn visit(&mut self, entry: &Path) -> Result<Visit> {
        if !entry.is_dir() {
            return Ok(Visit::Skipped);
        }

        let name = match entry.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => return Ok(Visit::Skipped),
        };
        if name.starts_with('.') {
            debug!("Skipping hidden directory: {}", entry.display());
            return Ok(Visit::Skipped);
        }

        let case_name = normalize_case_name(&name);
        let case_path = self.cases_dir.join(&case_name);
        info!("Processing: {} -> {}", name, case_name);

        self.note_case_source(&case_name, entry);
        create_case_structure(&case_name, &case_path, &self.config.source_description)?;
        self.stats.folders_processed += 1;

        if has_direct_files(entry)? {
            self.stats.files_copied += copy_files(&case_path, entry)?;
            let outcome = extract_zip_files(&case_path, entry)?;
            self.stats.record_archives(&outcome);
            self.stats.leaf_cases += 1;
            Ok(Visit::Leaf)
        } else {
            self.stats.containers += 1;
            Ok(Visit::Container)
        }
    }

    /// Warn when a second source folder maps onto an existing case; the
    /// contents are merged either way.
    fn note_case_source(&mut self, case_name: &str, source: &Path) {
        match self.case_sources.get(case_name) {
            Some(first) if first != source => {
                warn!(
                    "{} and {} both map to {}, merging contents",
                    first.display(),
                    source.display(),
                    case_name
                );
                self.stats.name_collisions += 1;
            }
            Some(_) => {}
            None => {
                self.case_sources.insert(case_name.to_string(), source.to_path_buf());
            }
        }
    }
}

fn has_direct_files(dir: &Path) -> Result<bool> {
    Ok(list_entries(dir)?.iter().any(|path| path.is_file()))
}

/// Load every ticket folder under `config.source_dir` into the cases root.
///
/// Never fails: a missing source root and per-level errors are logged and
/// reflected in the returned statistics.
pub fn process_directory(config: &LoadConfig) -> LoadStats {
    DirectoryWalker::new(config).walk()
}
