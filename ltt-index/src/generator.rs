// src/generator.rs
use crate::models::{
    AggregateEntry, AggregateIndex, DirectoryEntry, DirectoryIndex, DirectorySummary,
    SubdirectoryEntry,
};
use anyhow::{Context as _, Result};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Component, Path};
use walkdir::WalkDir;

/// Builds the per-directory JSON inventories. The two predicates come
/// from the caller's matcher: `exclude` takes a name and a relative
/// path, `is_document` takes a file name.
pub struct IndexGenerator<'a> {
    exclude: &'a dyn Fn(&str, &str) -> bool,
    is_document: &'a dyn Fn(&str) -> bool,
}

impl<'a> IndexGenerator<'a> {
    #[must_use]
    pub fn new(
        exclude: &'a dyn Fn(&str, &str) -> bool,
        is_document: &'a dyn Fn(&str) -> bool,
    ) -> Self {
        Self {
            exclude,
            is_document,
        }
    }

    /// Walks every directory under `input_root` that the exclusion
    /// predicate keeps, writes one pretty-printed `index.json` per
    /// directory into the mirrored location under `output_root`, and
    /// finishes with `master-index.json` at the output root.
    ///
    /// Summaries are accumulated in memory during the single pass, so a
    /// directory that cannot be read is skipped silently and is simply
    /// absent from the aggregate.
    ///
    /// # Errors
    ///
    /// Returns an error if an output directory or file cannot be
    /// written, or a produced index cannot be serialized.
    pub fn generate(&self, input_root: &Path, output_root: &Path) -> Result<AggregateIndex> {
        let mut totals = DirectorySummary::default();
        let mut directories = Vec::new();

        let walker = WalkDir::new(input_root).follow_links(true).into_iter();
        for entry in walker.filter_entry(|entry| {
            if entry.depth() == 0 {
                return true;
            }
            let name = entry.file_name().to_string_lossy();
            let relative = entry
                .path()
                .strip_prefix(input_root)
                .map(normalize_path)
                .unwrap_or_default();
            !entry.file_type().is_dir() || !(self.exclude)(&name, &relative)
        }) {
            let Ok(entry) = entry else {
                continue;
            };
            if !entry.file_type().is_dir() {
                continue;
            }

            let relative = match entry.path().strip_prefix(input_root) {
                Ok(relative) => normalize_path(relative),
                Err(_) => continue,
            };
            let Some(index) = self.build_directory_index(entry.path(), &relative) else {
                continue;
            };

            let target_dir = if relative.is_empty() {
                output_root.to_path_buf()
            } else {
                output_root.join(&relative)
            };
            fs::create_dir_all(&target_dir).with_context(|| {
                format!("Failed to create index directory: {}", target_dir.display())
            })?;
            let path = target_dir.join("index.json");
            let json = serde_json::to_string_pretty(&index)
                .with_context(|| format!("Failed to serialize index for: {}", index.directory))?;
            fs::write(&path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;

            totals.add(&index.summary);
            directories.push(AggregateEntry {
                relative_path: index.directory.clone(),
                child_index_path: if relative.is_empty() {
                    String::from("index.json")
                } else {
                    format!("{relative}/index.json")
                },
                summary: index.summary,
            });
        }

        let aggregate = AggregateIndex {
            generated_timestamp: Utc::now(),
            summary: totals,
            directories,
        };
        let path = output_root.join("master-index.json");
        let json = serde_json::to_string_pretty(&aggregate)
            .context("Failed to serialize master index")?;
        fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(aggregate)
    }

    /// Lists one directory's immediate children. Returns `None` when the
    /// directory cannot be read; the caller skips it.
    fn build_directory_index(&self, dir: &Path, relative: &str) -> Option<DirectoryIndex> {
        let entries = fs::read_dir(dir).ok()?;

        let mut files = Vec::new();
        let mut subdirectories = Vec::new();
        for entry in entries.flatten() {
            let name = entry.file_name().to_string_lossy().into_owned();
            let Ok(file_type) = entry.file_type() else {
                continue;
            };
            let child_relative = if relative.is_empty() {
                name.clone()
            } else {
                format!("{relative}/{name}")
            };
            if (self.exclude)(&name, &child_relative) {
                continue;
            }

            if file_type.is_dir() {
                subdirectories.push(SubdirectoryEntry {
                    child_index_path: format!("{child_relative}/index.json"),
                    relative_path: child_relative,
                    name,
                });
            } else if file_type.is_file() {
                let Ok(metadata) = entry.metadata() else {
                    continue;
                };
                files.push(DirectoryEntry {
                    extension: extension_of(&name),
                    is_document: (self.is_document)(&name),
                    size: metadata.len(),
                    modified_timestamp: metadata.modified().ok().map(DateTime::<Utc>::from),
                    relative_path: child_relative,
                    name,
                });
            }
        }

        files.sort_by(|a, b| a.name.cmp(&b.name));
        subdirectories.sort_by(|a, b| a.name.cmp(&b.name));

        let summary = DirectorySummary {
            total_files: files.len() as u64,
            total_subdirectories: subdirectories.len() as u64,
            document_files: files.iter().filter(|file| file.is_document).count() as u64,
            total_size: files.iter().map(|file| file.size).sum(),
        };

        Some(DirectoryIndex {
            directory: if relative.is_empty() {
                String::from(".")
            } else {
                relative.to_owned()
            },
            generated_timestamp: Utc::now(),
            files,
            subdirectories,
            summary,
        })
    }
}

fn normalize_path(path: &Path) -> String {
    let parts: Vec<_> = path
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect();
    parts.join("/")
}

/// Extension with its leading dot, extname style: `".md"` for
/// `guide.md`, `""` for `Makefile`, `""` for dotfiles like `.env`.
fn extension_of(name: &str) -> String {
    match name.rfind('.') {
        Some(at) if at > 0 => name[at..].to_owned(),
        _ => String::new(),
    }
}
