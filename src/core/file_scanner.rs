use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

use crate::core::error::L10nError;

/// Result of scanning the source tree.
pub struct ScanResult {
    /// Matching files in traversal order (entries sorted by file name).
    pub files: Vec<PathBuf>,
    pub ignored_count: usize,
}

/// Recursively collect source files under `root`.
///
/// Any traversal error aborts the scan; a partially scanned tree would
/// silently drop strings from the catalog.
pub fn scan_files(
    root: &Path,
    extensions: &[String],
    ignore_patterns: &[Pattern],
) -> Result<ScanResult, L10nError> {
    if !root.is_dir() {
        return Err(L10nError::SourceDirMissing(root.to_path_buf()));
    }

    let mut files = Vec::new();
    let mut ignored_count = 0;

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|source| L10nError::Walk {
            path: source
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf()),
            source,
        })?;
        let path = entry.path();
        if !entry.file_type().is_file() || !has_extension(path, extensions) {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        if ignore_patterns.iter().any(|p| p.matches_path(relative)) {
            tracing::debug!(path = %relative.display(), "ignored");
            ignored_count += 1;
            continue;
        }

        files.push(path.to_path_buf());
    }

    Ok(ScanResult {
        files,
        ignored_count,
    })
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}
