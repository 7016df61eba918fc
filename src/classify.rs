//! Heuristic binary/text classification.

use crate::options::BinaryDetection;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Number of leading bytes inspected when sniffing content.
pub const SNIFF_LEN: u64 = 1024;

const TEXT_MEDIA_PREFIXES: &[&str] = &["text/", "application/json", "application/xml"];

/// Returns `true` if the file at `path` should be treated as non-text.
///
/// Uses the name-based media type first, then looks for a null byte in the
/// first [`SNIFF_LEN`] bytes. A file that cannot be opened or read counts as binary.
pub fn is_binary(path: impl AsRef<Path>) -> bool {
    is_binary_with(path, BinaryDetection::Simple)
}

/// Like [`is_binary`], with a selectable content sniffing strategy.
///
/// The media type check and the unreadable-means-binary fallback apply to every strategy.
pub fn is_binary_with(path: impl AsRef<Path>, detection: BinaryDetection) -> bool {
    let path = path.as_ref();
    if let Some(essence) = guessed_media_type(path) {
        if !TEXT_MEDIA_PREFIXES.iter().any(|p| essence.starts_with(p)) {
            #[cfg(feature = "logging")]
            tracing::debug!("{} classified as binary by media type {}", path.display(), essence);
            return true;
        }
    }
    let prefix = match read_prefix(path) {
        Ok(bytes) => bytes,
        Err(_e) => {
            #[cfg(feature = "logging")]
            tracing::debug!("Cannot sniff {}, treating as binary: {}", path.display(), _e);
            return true;
        }
    };
    match detection {
        BinaryDetection::Simple => prefix.contains(&0),
        BinaryDetection::Accurate => content_inspector::inspect(&prefix).is_binary(),
        BinaryDetection::None => false,
    }
}

/// Source extensions the media type table assigns to unrelated formats.
const SOURCE_EXTENSIONS: &[&str] = &["ts", "mts", "cts"];

fn guessed_media_type(path: &Path) -> Option<String> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    // TypeScript, not MPEG transport streams; let the content sniff decide.
    if SOURCE_EXTENSIONS.contains(&ext) {
        return None;
    }
    let mime = mime_guess::from_path(path).first()?;
    let essence = match mime.essence_str() {
        // RFC 9239 moved JavaScript under text/.
        "application/javascript" | "application/ecmascript" | "application/x-javascript" => {
            "text/javascript"
        }
        other => other,
    };
    Some(essence.to_string())
}

fn read_prefix(path: &Path) -> std::io::Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut prefix = Vec::with_capacity(SNIFF_LEN as usize);
    file.take(SNIFF_LEN).read_to_end(&mut prefix)?;
    Ok(prefix)
}
