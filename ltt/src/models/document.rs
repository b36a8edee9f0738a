// src/models/document.rs
use std::path::PathBuf;

/// A single documentation file, read once and immutable afterwards.
#[derive(Debug, Clone)]
pub struct Document {
    /// Path relative to the scan root, `/`-separated.
    pub relative_path: String,
    /// File content with front matter stripped and surrounding whitespace
    /// trimmed.
    pub content: String,
    /// Absolute path the content was read from.
    pub source_path: PathBuf,
    /// `title` from the front matter block, when one parsed.
    pub title: Option<String>,
}
