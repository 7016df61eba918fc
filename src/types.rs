use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What the report shows for a single visited file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileVerdict {
    /// Size exceeded the configured maximum; holds the size in bytes.
    TooLarge(u64),
    Binary,
    /// Content decoded as UTF-8, invalid sequences replaced with U+FFFD.
    Text(String),
    /// Content could not be read after passing the size and binary checks.
    Unreadable(String),
}

/// A file visited during a run, consumed by the report writer right away.
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// Root joined with the path below it, as printed in the `FILE:` line.
    pub path: PathBuf,
    /// Path relative to the explored root.
    pub relative_path: PathBuf,
    pub size: u64,
    pub verdict: FileVerdict,
}

/// Counters for a finished run.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub roots_explored: usize,
    pub roots_missing: usize,
    pub files_listed: usize,
    pub text_files: usize,
    pub binary_files: usize,
    pub oversized_files: usize,
    pub unreadable_files: usize,
}
impl ReportSummary {
    pub(crate) fn record(&mut self, verdict: &FileVerdict) {
        self.files_listed += 1;
        match verdict {
            FileVerdict::TooLarge(_) => self.oversized_files += 1,
            FileVerdict::Binary => self.binary_files += 1,
            FileVerdict::Text(_) => self.text_files += 1,
            FileVerdict::Unreadable(_) => self.unreadable_files += 1,
        }
    }
}
