//! Command-line interface for dirscribe.
//!
//! Scans the `app`, `constants`, `config` and `components` directories under a
//! project root and writes their file contents into one text report.

use clap::Parser;
use dirscribe::{BinaryDetection, ExploreBuilder, ExploreError, ExploreOptions, explore};
use std::path::PathBuf;
use std::process::exit;

/// dirscribe — dump project directories into a single text report
#[derive(Parser)]
#[command(name = "dirscribe", version, about, long_about = None)]
struct Cli {
    /// Root path of the project (default: current directory)
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Output file path (default: project_directory_content.txt)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Additional directory names to ignore
    #[arg(short = 'd', long = "ignore-dirs", num_args = 1..)]
    ignore_dirs: Vec<String>,

    /// Additional file extensions to ignore
    #[arg(short = 'e', long = "ignore-exts", num_args = 1..)]
    ignore_exts: Vec<String>,

    /// Maximum file size in bytes to display (default: 1MB)
    #[arg(short = 'm', long = "max-size")]
    max_size: Option<u64>,

    /// JSON file with base options; flags are applied on top
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Binary detection strategy
    #[arg(long, value_parser = parse_binary_detection)]
    binary_detection: Option<BinaryDetection>,

    /// Follow symlinks
    #[arg(long)]
    follow_links: bool,
}

/// Parse string into BinaryDetection enum.
fn parse_binary_detection(s: &str) -> Result<BinaryDetection, String> {
    match s {
        "simple" => Ok(BinaryDetection::Simple),
        "accurate" => Ok(BinaryDetection::Accurate),
        "none" => Ok(BinaryDetection::None),
        _ => Err(format!("invalid binary detection method: {}", s)),
    }
}

impl Cli {
    fn into_options(self) -> Result<ExploreOptions, ExploreError> {
        let base = match &self.config {
            Some(path) => ExploreOptions::from_json_file(path)?,
            None => ExploreOptions::default(),
        };
        let use_project_root = self.root.is_some() || base.directories.is_empty();
        let mut builder = ExploreBuilder::from_options(base)
            .extra_ignore_dirs(self.ignore_dirs)
            .extra_ignore_extensions(self.ignore_exts);

        if use_project_root {
            builder = builder.project_root(self.root.unwrap_or_else(|| PathBuf::from(".")));
        }
        if let Some(output) = self.output {
            builder = builder.output(output);
        }
        if let Some(max) = self.max_size {
            builder = builder.max_file_size(max);
        }
        if let Some(method) = self.binary_detection {
            builder = builder.binary_detection(method);
        }
        if self.follow_links {
            builder = builder.follow_links(true);
        }
        Ok(builder.build())
    }
}

fn main() {
    let cli = Cli::parse();
    let options = match cli.into_options() {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    if let Err(e) = explore(&options) {
        eprintln!("Error: {}", e);
        exit(1);
    }
    println!(
        "Exploration complete. Results saved to {}",
        options.output.display()
    );
}
