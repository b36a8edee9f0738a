// src/core/scanner.rs
use crate::core::filter::FileFilter;
use crate::utils::normalize_path;
use anyhow::{Result, bail};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A file discovered under the scan root.
#[derive(Debug, Clone)]
pub struct ScannedFile {
    /// Path usable for reading the file.
    pub path: PathBuf,
    /// Path relative to the scan root, `/`-separated.
    pub relative_path: String,
}

/// Walks `root` depth-first and returns every documentation file that
/// survives the filter. Excluded directories are pruned, so their
/// contents are never visited.
///
/// Iteration order is the OS directory listing order; the classifier is
/// the ordering authority for the final artifacts.
///
/// # Errors
///
/// Returns an error if `root` does not exist or is not a directory.
/// Unreadable entries below the root are reported as warnings and
/// skipped.
pub fn scan(root: &Path, filter: &FileFilter) -> Result<Vec<ScannedFile>> {
    if !root.exists() {
        bail!("input directory does not exist: {}", root.display());
    }
    if !root.is_dir() {
        bail!("input path is not a directory: {}", root.display());
    }

    let mut files = Vec::new();

    let walker = WalkDir::new(root).follow_links(true).into_iter();
    for entry in walker.filter_entry(|entry| {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return true;
        }
        let name = entry.file_name().to_string_lossy();
        let relative = entry
            .path()
            .strip_prefix(root)
            .map(normalize_path)
            .unwrap_or_default();
        !filter.is_excluded_by_name(&name, &relative)
    }) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                eprintln!("warning: skipping unreadable entry: {err}");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if !filter.is_document(&name) {
            continue;
        }

        let relative = match entry.path().strip_prefix(root) {
            Ok(relative) => normalize_path(relative),
            Err(_) => continue,
        };
        if filter.is_excluded_by_name(&name, &relative) {
            continue;
        }
        if !filter.matches_globs(&relative) {
            continue;
        }

        files.push(ScannedFile {
            path: entry.path().to_path_buf(),
            relative_path: relative,
        });
    }

    Ok(files)
}
