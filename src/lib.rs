//! # Dirscribe
//!
//! `dirscribe` recursively walks a set of project directories and concatenates every
//! readable file path and its contents into a single plain-text report. Binary files,
//! files above a size limit, pruned directories, and ignored suffixes are left out or
//! replaced by a one-line notice.
//!
//! A run never aborts because of a single file: missing roots, unreadable files, and
//! failed size queries degrade to inline notices (or silent skips). Only failing to
//! create or write the report itself is an error.
//!
//! # Features
//!
//! - `logging` (default): Emits debug events via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use dirscribe::{ExploreBuilder, explore};
//!
//! let options = ExploreBuilder::new("project_directory_content.txt")
//!     .project_root(".")
//!     .extra_ignore_dirs(vec!["coverage".to_string()])
//!     .max_file_size(512 * 1024)
//!     .build();
//!
//! let summary = explore(&options).expect("Failed to write report");
//! println!("{} files listed", summary.files_listed);
//! ```

mod classify;
mod engine;
mod error;
mod options;
pub mod report;
mod types;

pub use classify::{SNIFF_LEN, is_binary, is_binary_with};
pub use engine::{explore, explore_to_writer};
pub use error::ExploreError;
pub use options::{
    BinaryDetection, DEFAULT_IGNORE_DIRS, DEFAULT_IGNORE_EXTENSIONS, DEFAULT_MAX_FILE_SIZE,
    DEFAULT_OUTPUT, ExploreBuilder, ExploreOptions, PROJECT_SCAN_TARGETS,
};
pub use types::{FileRecord, FileVerdict, ReportSummary};
