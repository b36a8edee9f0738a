// src/core/render.rs
use crate::models::{Document, OrderedDocuments};
use anyhow::{Context as _, Result};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// Renders the llms.txt table of contents: a header followed by a
/// "Core Documentation" section (index and important documents) and an
/// "Optional" section (everything else). Empty sections are omitted.
#[must_use]
pub fn render_index(title: &str, documents: &OrderedDocuments) -> String {
    let mut out = header(title);

    let core: Vec<&Document> = documents.core().collect();
    if !core.is_empty() {
        out.push_str("\n## Core Documentation\n\n");
        for document in core {
            let _ = writeln!(out, "- [{0}]({0})", document.relative_path);
        }
    }
    if !documents.other.is_empty() {
        out.push_str("\n## Optional\n\n");
        for document in &documents.other {
            let _ = writeln!(out, "- [{0}]({0})", document.relative_path);
        }
    }
    out
}

/// Renders llms-full.txt: the same header, then every document in final
/// order with its stripped content and a `---` separator.
#[must_use]
pub fn render_full(title: &str, documents: &OrderedDocuments) -> String {
    let mut out = header(title);
    for document in documents.all() {
        let _ = write!(
            out,
            "\n## {}\n\n{}\n\n---\n",
            document.relative_path, document.content
        );
    }
    out
}

fn header(title: &str) -> String {
    format!("# {title}\n\n> Documentation for {title}\n")
}

/// A persisted artifact and its size on disk.
#[derive(Debug)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub bytes: u64,
}

/// Writes the two artifacts as siblings under `output_dir`, creating the
/// directory first.
///
/// # Errors
///
/// Returns an error if the output directory cannot be created or either
/// file cannot be written.
pub fn write_outputs(output_dir: &Path, index: &str, full: &str) -> Result<Vec<WrittenFile>> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))?;

    let mut written = Vec::new();
    for (name, contents) in [("llms.txt", index), ("llms-full.txt", full)] {
        let path = output_dir.join(name);
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        written.push(WrittenFile {
            path,
            bytes: contents.len() as u64,
        });
    }
    Ok(written)
}
