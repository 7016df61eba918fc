//! Plain-text report format.
//!
//! The report is a header followed by one section per explored root and one
//! block per visited file. The layout written here is the whole output contract.

use crate::types::{FileRecord, FileVerdict};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const REPORT_TITLE: &str = "Next.js Project Directory Explorer";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const BINARY_NOTICE: &str = "[Binary file - content not displayed]";

const BANNER_WIDTH: usize = 100;
const RULE_WIDTH: usize = 80;

/// Streams report sections into an underlying writer.
pub struct ReportWriter<W: Write> {
    out: W,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Writes the title, the generation timestamp, and the requested roots as given.
    pub fn header(&mut self, timestamp: &str, directories: &[PathBuf]) -> io::Result<()> {
        let targets = directories
            .iter()
            .map(|d| d.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(self.out, "{}", REPORT_TITLE)?;
        writeln!(self.out, "Date: {}", timestamp)?;
        writeln!(self.out, "Target directories: {}", targets)?;
        writeln!(self.out)
    }

    pub fn missing_root(&mut self, root: &Path) -> io::Result<()> {
        writeln!(self.out, "[SKIP] Directory not found: {}", root.display())?;
        writeln!(self.out)
    }

    pub fn root_banner(&mut self, root: &Path) -> io::Result<()> {
        let bar = "#".repeat(BANNER_WIDTH);
        writeln!(self.out, "{}", bar)?;
        writeln!(self.out, "EXPLORING DIRECTORY: {}", root.display())?;
        writeln!(self.out, "{}", bar)?;
        writeln!(self.out)
    }

    pub fn file(&mut self, record: &FileRecord) -> io::Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.out)?;
        writeln!(self.out, "{}", rule)?;
        writeln!(self.out, "FILE: {}", record.path.display())?;
        writeln!(self.out, "{}", rule)?;
        match &record.verdict {
            FileVerdict::TooLarge(size) => writeln!(self.out, "{}", too_large_notice(*size)),
            FileVerdict::Binary => writeln!(self.out, "{}", BINARY_NOTICE),
            FileVerdict::Text(content) => {
                self.out.write_all(content.as_bytes())?;
                writeln!(self.out)
            }
            FileVerdict::Unreadable(message) => {
                writeln!(self.out, "[Error reading file: {}]", message)
            }
        }
    }

    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

pub fn too_large_notice(size: u64) -> String {
    format!(
        "[File too large to display: {:.2} MB]",
        size as f64 / 1024.0 / 1024.0
    )
}
