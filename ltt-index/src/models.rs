// src/models.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One file in a directory listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryEntry {
    pub name: String,
    /// `/`-separated path relative to the scanned root.
    pub relative_path: String,
    pub size: u64,
    /// Null when the filesystem cannot report a modification time.
    pub modified_timestamp: Option<DateTime<Utc>>,
    /// Extension with its leading dot (".md"), empty when absent.
    pub extension: String,
    pub is_document: bool,
}

/// One immediate subdirectory in a directory listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubdirectoryEntry {
    pub name: String,
    pub relative_path: String,
    /// Where the child's own index.json lives, relative to the output
    /// root.
    pub child_index_path: String,
}

/// Counts and sizes over one directory's immediate children.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectorySummary {
    pub total_files: u64,
    pub total_subdirectories: u64,
    pub document_files: u64,
    pub total_size: u64,
}

impl DirectorySummary {
    pub fn add(&mut self, other: &Self) {
        self.total_files += other.total_files;
        self.total_subdirectories += other.total_subdirectories;
        self.document_files += other.document_files;
        self.total_size += other.total_size;
    }
}

/// The persisted per-directory inventory. Written once, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryIndex {
    /// `"."` for the root, otherwise the `/`-separated relative path.
    pub directory: String,
    pub generated_timestamp: DateTime<Utc>,
    pub files: Vec<DirectoryEntry>,
    pub subdirectories: Vec<SubdirectoryEntry>,
    pub summary: DirectorySummary,
}

/// One directory's contribution to the rollup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateEntry {
    pub relative_path: String,
    pub child_index_path: String,
    pub summary: DirectorySummary,
}

/// The rollup over every generated `DirectoryIndex`, persisted as
/// `master-index.json` at the output root.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateIndex {
    pub generated_timestamp: DateTime<Utc>,
    pub summary: DirectorySummary,
    pub directories: Vec<AggregateEntry>,
}
