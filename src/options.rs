use crate::error::ExploreError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory names pruned at every depth unless the caller replaces the list.
pub const DEFAULT_IGNORE_DIRS: &[&str] = &[
    ".git",
    "node_modules",
    ".next",
    "venv",
    "__pycache__",
    ".idea",
    ".vscode",
    "public",
    "out",
    "build",
];

/// File name suffixes that never produce a report block.
pub const DEFAULT_IGNORE_EXTENSIONS: &[&str] = &[
    ".pyc", ".class", ".o", ".so", ".dll", ".exe", ".jpg", ".jpeg", ".png", ".gif", ".svg",
    ".ico", ".pdf", ".zip", ".tar.gz", ".rar",
];

/// Subdirectories of a project root that are scanned, in report order.
pub const PROJECT_SCAN_TARGETS: &[&str] = &["app", "constants", "config", "components"];

pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024;

pub const DEFAULT_OUTPUT: &str = "project_directory_content.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinaryDetection {
    Simple,
    Accurate,
    None,
}

/// A complete exploration request.
///
/// Built once before a run and only read during it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExploreOptions {
    pub directories: Vec<PathBuf>,
    pub output: PathBuf,
    pub ignore_dirs: Vec<String>,
    pub ignore_extensions: Vec<String>,
    pub max_file_size: u64,
    pub binary_detection: BinaryDetection,
    pub follow_links: bool,
}
impl Default for ExploreOptions {
    fn default() -> Self {
        Self {
            directories: Vec::new(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            ignore_dirs: DEFAULT_IGNORE_DIRS.iter().map(|s| s.to_string()).collect(),
            ignore_extensions: DEFAULT_IGNORE_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            binary_detection: BinaryDetection::Simple,
            follow_links: false,
        }
    }
}
impl ExploreOptions {
    /// Loads options from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ExploreError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ExploreError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ExploreError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
    pub fn is_ignored_dir(&self, name: &str) -> bool {
        self.ignore_dirs.iter().any(|d| d == name)
    }
    /// Plain suffix match; `.tar.gz` does not catch a bare `.gz`.
    pub fn is_ignored_file(&self, name: &str) -> bool {
        self.ignore_extensions.iter().any(|ext| name.ends_with(ext.as_str()))
    }
}
#[derive(Debug, Default)]
pub struct ExploreBuilder {
    options: ExploreOptions,
}
impl ExploreBuilder {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            options: ExploreOptions {
                output: output.into(),
                ..Default::default()
            },
        }
    }
    pub fn from_options(options: ExploreOptions) -> Self {
        Self { options }
    }
    pub fn output(mut self, output: impl Into<PathBuf>) -> Self {
        self.options.output = output.into();
        self
    }
    pub fn directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.options.directories.push(dir.into());
        self
    }
    pub fn directories<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.options.directories = dirs.into_iter().map(Into::into).collect();
        self
    }
    /// Replaces the directory list with the standard scan targets under `root`.
    pub fn project_root(self, root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        self.directories(PROJECT_SCAN_TARGETS.iter().map(|t| root.join(t)))
    }
    pub fn ignore_dirs(mut self, dirs: Vec<String>) -> Self {
        self.options.ignore_dirs = dirs;
        self
    }
    pub fn extra_ignore_dirs<I: IntoIterator<Item = String>>(mut self, dirs: I) -> Self {
        self.options.ignore_dirs.extend(dirs);
        self
    }
    pub fn ignore_extensions(mut self, exts: Vec<String>) -> Self {
        self.options.ignore_extensions = exts;
        self
    }
    pub fn extra_ignore_extensions<I: IntoIterator<Item = String>>(mut self, exts: I) -> Self {
        self.options.ignore_extensions.extend(exts);
        self
    }
    pub fn max_file_size(mut self, bytes: u64) -> Self {
        self.options.max_file_size = bytes;
        self
    }
    pub fn binary_detection(mut self, method: BinaryDetection) -> Self {
        self.options.binary_detection = method;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn build(self) -> ExploreOptions {
        self.options
    }
}
