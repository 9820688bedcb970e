use serde::{Deserialize, Serialize};

/// Counters accumulated over one walk of the source tree
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Source folders mapped to a case (leaf and container alike)
    pub folders_processed: usize,
    pub leaf_cases: usize,
    pub containers: usize,
    pub files_copied: usize,
    pub archives_extracted: usize,
    pub archive_failures: usize,
    /// Directory levels abandoned after an error
    pub level_failures: usize,
    /// Source folders whose case name was already produced by another folder
    pub name_collisions: usize,
}

impl LoadStats {
    pub fn record_archives(&mut self, outcome: &ArchiveOutcome) {
        self.archives_extracted += outcome.extracted;
        self.archive_failures += outcome.failed;
    }
}

/// Result of extracting every zip found directly in one source folder
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArchiveOutcome {
    pub extracted: usize,
    pub failed: usize,
}
