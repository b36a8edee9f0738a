// src/core/filter.rs
use anyhow::{Context as _, Result};
use glob::{MatchOptions, Pattern};

/// Names excluded from every scan unless the deny-list is extended by
/// configuration. Matched as literal substrings of the file name or the
/// relative path, case-insensitively.
pub const DEFAULT_EXCLUDED_NAMES: [&str; 11] = [
    "node_modules",
    ".git",
    "dist",
    "build",
    "out",
    "coverage",
    ".next",
    ".nuxt",
    ".output",
    ".vercel",
    ".netlify",
];

/// Extensions that mark a file as a documentation file.
pub const DOCUMENT_EXTENSIONS: [&str; 3] = [".md", ".mdx", ".html"];

/// Decides whether a discovered path takes part in the run: deny-list
/// name exclusion, include/exclude glob matching, and document
/// classification by extension.
pub struct FileFilter {
    excluded_names: Vec<String>,
    include: Vec<Pattern>,
    exclude: Vec<Pattern>,
    is_document: Box<dyn Fn(&str) -> bool + Send + Sync>,
}

impl FileFilter {
    /// Builds a filter from extra deny-list entries and include/exclude
    /// glob patterns.
    ///
    /// # Errors
    ///
    /// Returns an error if any include or exclude pattern is not valid
    /// glob syntax.
    pub fn new(extra_names: &[String], include: &[String], exclude: &[String]) -> Result<Self> {
        let mut excluded_names: Vec<String> = DEFAULT_EXCLUDED_NAMES
            .iter()
            .map(|name| (*name).to_lowercase())
            .collect();
        excluded_names.extend(extra_names.iter().map(|name| name.to_lowercase()));

        Ok(Self {
            excluded_names,
            include: compile_patterns(include)?,
            exclude: compile_patterns(exclude)?,
            is_document: Box::new(is_document_file),
        })
    }

    /// Replaces the document predicate, for callers that classify
    /// documents by something other than the default extensions.
    #[must_use]
    pub fn with_document_predicate(
        mut self,
        predicate: impl Fn(&str) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.is_document = Box::new(predicate);
        self
    }

    /// True when the name or the relative path contains any deny-list
    /// entry as a substring. Deliberately coarse: `my-build-notes.md` is
    /// excluded because it contains `build`.
    #[must_use]
    pub fn is_excluded_by_name(&self, name: &str, relative_path: &str) -> bool {
        let name = name.to_lowercase();
        let relative_path = relative_path.to_lowercase();
        self.excluded_names
            .iter()
            .any(|entry| name.contains(entry) || relative_path.contains(entry))
    }

    /// Applies the include and exclude glob lists independently: a
    /// non-empty include list must match, a non-empty exclude list must
    /// not. `*` stays within a path segment, `**` crosses segments.
    #[must_use]
    pub fn matches_globs(&self, relative_path: &str) -> bool {
        let options = MatchOptions {
            require_literal_separator: true,
            ..MatchOptions::new()
        };

        if !self.include.is_empty()
            && !self
                .include
                .iter()
                .any(|pattern| pattern.matches_with(relative_path, options))
        {
            return false;
        }

        !self
            .exclude
            .iter()
            .any(|pattern| pattern.matches_with(relative_path, options))
    }

    #[must_use]
    pub fn is_document(&self, name: &str) -> bool {
        (self.is_document)(name)
    }
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|pattern| {
            Pattern::new(pattern).with_context(|| format!("Invalid glob pattern: {pattern}"))
        })
        .collect()
}

/// True when the lowercased name ends with one of the document
/// extensions.
#[must_use]
pub fn is_document_file(name: &str) -> bool {
    let name = name.to_lowercase();
    DOCUMENT_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}
