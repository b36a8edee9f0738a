// src/core/order.rs
use crate::core::filter::DOCUMENT_EXTENSIONS;
use crate::models::{Document, Frontmatter, OrderedDocuments};
use std::cmp::Ordering;

/// Ordering bucket for a documentation file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocClass {
    Index,
    Important,
    Other,
}

const INDEX_NAMES: [&str; 3] = ["index", "readme", "home"];

const INDEX_MARKERS: [&str; 3] = ["/index.", "/readme.", "/home."];

/// Path fragments that promote a document to the important bucket.
/// Matched as substrings of the whole lowercased path, exactly as the
/// format prescribes, so unrelated words can trigger a match.
const IMPORTANT_FRAGMENTS: [&str; 13] = [
    "doc",
    "docs",
    "guide",
    "guides",
    "tutorial",
    "tutorials",
    "intro",
    "introduction",
    "getting-started",
    "get-started",
    "quickstart",
    "quick-start",
    "start",
];

/// Removes a leading front matter block delimited by lines consisting
/// solely of `---`. The opening delimiter must be the very first line;
/// without a well-formed closing delimiter nothing is stripped. The
/// result is trimmed of surrounding whitespace in every case, which
/// makes the operation idempotent.
#[must_use]
pub fn strip_front_matter(text: &str) -> &str {
    let mut lines = text.split_inclusive('\n');
    let Some(first) = lines.next() else {
        return text;
    };
    if first.trim_end_matches(['\r', '\n']) != "---" || !first.ends_with('\n') {
        return text.trim();
    }

    let mut offset = first.len();
    for line in lines {
        offset += line.len();
        if line.trim_end_matches(['\r', '\n']) == "---" {
            return text[offset..].trim();
        }
    }
    text.trim()
}

/// Parses the front matter block as YAML metadata. Absent, unterminated,
/// or invalid blocks all yield `None`; front matter problems are never
/// errors.
#[must_use]
pub fn parse_front_matter(text: &str) -> Option<Frontmatter> {
    let mut lines = text.lines();
    if lines.next()? != "---" {
        return None;
    }

    let mut block = String::new();
    for line in lines {
        if line == "---" {
            return serde_yaml_ng::from_str(&block).ok();
        }
        block.push_str(line);
        block.push('\n');
    }
    None
}

/// Classifies a relative path into its ordering bucket.
#[must_use]
pub fn classify(relative_path: &str) -> DocClass {
    let lower = relative_path.to_lowercase();
    let stem = base_name_stem(&lower);
    if INDEX_NAMES.contains(&stem) || INDEX_MARKERS.iter().any(|marker| lower.contains(marker)) {
        return DocClass::Index;
    }
    if IMPORTANT_FRAGMENTS
        .iter()
        .any(|fragment| lower.contains(fragment))
    {
        DocClass::Important
    } else {
        DocClass::Other
    }
}

/// Tie-break rank inside the index bucket: `index` before `readme`
/// before `home` before everything else index-classified.
#[must_use]
pub fn index_priority(relative_path: &str) -> u8 {
    let lower = relative_path.to_lowercase();
    match base_name_stem(&lower) {
        "index" => 1,
        "readme" => 2,
        "home" => 3,
        _ => 4,
    }
}

fn base_name_stem(lower_path: &str) -> &str {
    let base = lower_path.rsplit('/').next().unwrap_or("");
    for ext in DOCUMENT_EXTENSIONS {
        if let Some(stem) = base.strip_suffix(ext) {
            return stem;
        }
    }
    base
}

/// Buckets and sorts documents. Index files sort by priority; the sort
/// is stable, so index files sharing a priority keep their discovery
/// order. The remaining buckets sort by path, case-insensitively.
#[must_use]
pub fn order_documents(documents: Vec<Document>) -> OrderedDocuments {
    let mut ordered = OrderedDocuments::default();
    for document in documents {
        match classify(&document.relative_path) {
            DocClass::Index => ordered.index.push(document),
            DocClass::Important => ordered.important.push(document),
            DocClass::Other => ordered.other.push(document),
        }
    }

    ordered
        .index
        .sort_by_key(|document| index_priority(&document.relative_path));
    ordered
        .important
        .sort_by(|a, b| compare_paths(&a.relative_path, &b.relative_path));
    ordered
        .other
        .sort_by(|a, b| compare_paths(&a.relative_path, &b.relative_path));
    ordered
}

// Case-insensitive comparison with a case-sensitive tie-break, standing
// in for locale-aware collation on the ASCII paths doc trees use.
fn compare_paths(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
