use crate::classify::is_binary_with;
use crate::error::ExploreError;
use crate::options::ExploreOptions;
use crate::report::{ReportWriter, TIMESTAMP_FORMAT};
use crate::types::{FileRecord, FileVerdict, ReportSummary};
use chrono::Local;
use ignore::{DirEntry, WalkBuilder};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(root: &Path, options: &ExploreOptions) -> Self {
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(options.follow_links)
            .sort_by_file_name(|a, b| a.cmp(b));
        let ignore_dirs = options.ignore_dirs.clone();
        builder.filter_entry(move |entry| {
            let pruned = entry.depth() > 0
                && entry.file_type().is_some_and(|t| t.is_dir())
                && ignore_dirs.iter().any(|d| entry.file_name() == d.as_str());
            #[cfg(feature = "logging")]
            if pruned {
                tracing::debug!("Pruned directory {}", entry.path().display());
            }
            !pruned
        });
        Self {
            inner: builder.build(),
        }
    }
    fn into_iter(self) -> impl Iterator<Item = DirEntry> {
        self.inner.filter_map(|result| match result {
            Ok(entry) if entry.depth() > 0 => Some(entry),
            Ok(_) => None,
            Err(_e) => {
                #[cfg(feature = "logging")]
                tracing::debug!("Walk error skipped: {}", _e);
                None
            }
        })
    }
}
fn read_verdict(path: &Path, size: u64, options: &ExploreOptions) -> FileVerdict {
    if size > options.max_file_size {
        #[cfg(feature = "logging")]
        tracing::debug!(
            "File too large ({} > {}), skipping content",
            size,
            options.max_file_size
        );
        return FileVerdict::TooLarge(size);
    }
    if is_binary_with(path, options.binary_detection) {
        return FileVerdict::Binary;
    }
    match fs::read(path) {
        Ok(bytes) => FileVerdict::Text(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) => FileVerdict::Unreadable(e.to_string()),
    }
}
fn inspect_entry(entry: &DirEntry, root: &Path, options: &ExploreOptions) -> Option<FileRecord> {
    if entry.file_type().is_some_and(|t| t.is_dir()) {
        return None;
    }
    let path = entry.path();
    let name = entry.file_name().to_string_lossy();
    if options.is_ignored_file(&name) {
        #[cfg(feature = "logging")]
        tracing::debug!("Ignored by extension: {}", path.display());
        return None;
    }
    let metadata = match fs::metadata(path) {
        Ok(m) => m,
        Err(_e) => {
            #[cfg(feature = "logging")]
            tracing::debug!("Size unavailable for {}: {}", path.display(), _e);
            return None;
        }
    };
    // Directories behind unfollowed symlinks, FIFOs, sockets and devices.
    if !metadata.is_file() {
        #[cfg(feature = "logging")]
        tracing::debug!("Not a regular file: {}", path.display());
        return None;
    }
    let size = metadata.len();
    Some(FileRecord {
        path: path.to_path_buf(),
        relative_path: path.strip_prefix(root).unwrap_or(path).to_path_buf(),
        size,
        verdict: read_verdict(path, size, options),
    })
}
fn resolve_root(dir: &Path) -> PathBuf {
    std::path::absolute(dir).unwrap_or_else(|_| dir.to_path_buf())
}
fn write_report<W: Write>(
    options: &ExploreOptions,
    out: W,
    timestamp: &str,
) -> std::io::Result<ReportSummary> {
    let mut report = ReportWriter::new(out);
    let mut summary = ReportSummary::default();
    report.header(timestamp, &options.directories)?;
    for dir in &options.directories {
        let root = resolve_root(dir);
        if !root.exists() {
            #[cfg(feature = "logging")]
            tracing::debug!("Directory not found: {}", root.display());
            report.missing_root(&root)?;
            summary.roots_missing += 1;
            continue;
        }
        report.root_banner(&root)?;
        summary.roots_explored += 1;
        for entry in Walker::new(&root, options).into_iter() {
            if let Some(record) = inspect_entry(&entry, &root, options) {
                report.file(&record)?;
                summary.record(&record.verdict);
            }
        }
    }
    report.finish()?;
    Ok(summary)
}
fn timestamp_now() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}
/// Writes the report for `options` into `out` instead of the configured output file.
///
/// `options.output` is ignored; write failures surface as [`ExploreError::Write`].
pub fn explore_to_writer<W: Write>(
    options: &ExploreOptions,
    out: W,
) -> Result<ReportSummary, ExploreError> {
    write_report(options, out, &timestamp_now()).map_err(ExploreError::Write)
}
/// Explores every configured directory and overwrites `options.output` with the report.
///
/// Only failing to create or write the output is an error; per-file problems
/// are recorded inside the report.
pub fn explore(options: &ExploreOptions) -> Result<ReportSummary, ExploreError> {
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Exploring {} directories into {}",
        options.directories.len(),
        options.output.display()
    );
    let file = File::create(&options.output).map_err(|e| ExploreError::io(&options.output, e))?;
    write_report(options, BufWriter::new(file), &timestamp_now())
        .map_err(|e| ExploreError::io(&options.output, e))
}
