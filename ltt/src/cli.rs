// src/cli.rs
use anyhow::{Context as _, Result, bail};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{self, FileConfig, Options};
use crate::core::filter::FileFilter;
use crate::core::order::{order_documents, parse_front_matter, strip_front_matter};
use crate::core::render::{render_full, render_index, write_outputs};
use crate::core::scanner::scan;
use crate::models::{Document, OrderedDocuments};
use crate::utils::format_size;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory to aggregate documentation from
    #[arg(short, long, default_value = ".")]
    pub input: PathBuf,

    /// Directory the artifacts are written to
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Only include paths matching this glob (repeatable)
    #[arg(long, value_name = "GLOB")]
    pub include: Vec<String>,

    /// Skip paths matching this glob (repeatable)
    #[arg(long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Also write per-directory index.json metadata
    #[arg(long)]
    pub generate_index: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub silent: bool,
}

impl Args {
    /// Merges the config file under the CLI flags: flags win, list
    /// settings concatenate with the config entries first.
    fn into_options(self, config: FileConfig) -> (PathBuf, PathBuf, Options) {
        let mut include = config.include;
        include.extend(self.include);
        let mut exclude = config.exclude;
        exclude.extend(self.exclude);

        let options = Options {
            title: config.title,
            include,
            exclude,
            exclude_names: config.exclude_names,
            generate_index: self.generate_index,
            silent: self.silent,
        };
        (self.input, self.output, options)
    }
}

/// Runs one aggregation pass: scan, classify, render, write, and
/// optionally generate the JSON directory indexes.
///
/// # Errors
///
/// Returns an error if the input root is missing or not a directory,
/// the configuration or glob patterns are invalid, or the output cannot
/// be written. Per-file read failures are warnings, not errors.
pub fn run(args: Args) -> Result<()> {
    if !args.input.is_dir() {
        bail!(
            "input directory does not exist or is not a directory: {}",
            args.input.display()
        );
    }

    let file_config = config::load_config(&args.input)?;
    let (input, output, options) = args.into_options(file_config);

    let filter = FileFilter::new(&options.exclude_names, &options.include, &options.exclude)?;
    let files = scan(&input, &filter)
        .with_context(|| format!("Failed to scan input directory: {}", input.display()))?;

    let mut documents = Vec::new();
    for file in files {
        match fs::read_to_string(&file.path) {
            Ok(raw) => documents.push(Document {
                content: strip_front_matter(&raw).to_owned(),
                title: parse_front_matter(&raw).and_then(|fm| fm.title),
                relative_path: file.relative_path,
                source_path: file.path,
            }),
            Err(err) => {
                eprintln!(
                    "warning: skipping unreadable file {}: {err}",
                    file.path.display()
                );
            }
        }
    }

    if documents.is_empty() {
        if !options.silent {
            println!("No documentation files found in {}", input.display());
        }
        return Ok(());
    }

    let ordered = order_documents(documents);
    let title = resolve_title(&options, &ordered, &input);

    let index = render_index(&title, &ordered);
    let full = render_full(&title, &ordered);
    let written = write_outputs(&output, &index, &full)
        .with_context(|| format!("Failed to write output to: {}", output.display()))?;
    if !options.silent {
        for file in &written {
            println!("{} ({})", file.path.display(), format_size(file.bytes));
        }
    }

    if options.generate_index {
        generate_indexes(&input, &output, &options, &filter)?;
    }

    Ok(())
}

/// Title precedence: config file, then the front matter of the first
/// index document, then the input directory name.
fn resolve_title(options: &Options, ordered: &OrderedDocuments, input: &Path) -> String {
    if let Some(title) = &options.title {
        return title.clone();
    }
    if let Some(title) = ordered.index.first().and_then(|doc| doc.title.clone()) {
        return title;
    }
    input
        .canonicalize()
        .ok()
        .and_then(|path| {
            path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| String::from("Documentation"))
}

#[cfg(feature = "index")]
fn generate_indexes(
    input: &Path,
    output: &Path,
    options: &Options,
    filter: &FileFilter,
) -> Result<()> {
    let exclude = |name: &str, relative_path: &str| filter.is_excluded_by_name(name, relative_path);
    let is_document = |name: &str| filter.is_document(name);
    let generator = ltt_index::IndexGenerator::new(&exclude, &is_document);
    let aggregate = generator
        .generate(input, output)
        .with_context(|| format!("Failed to generate directory indexes in: {}", output.display()))?;
    if !options.silent {
        println!(
            "master-index.json ({} directories, {} files)",
            aggregate.directories.len(),
            aggregate.summary.total_files
        );
    }
    Ok(())
}

#[cfg(not(feature = "index"))]
fn generate_indexes(
    _input: &Path,
    _output: &Path,
    _options: &Options,
    _filter: &FileFilter,
) -> Result<()> {
    bail!("this build does not include index generation (enable the `index` feature)");
}
