// tests/integration_tests/scanning_test.rs
use super::common::{create_test_file, setup_docs_directory};
use anyhow::Result;
use ltt::core::filter::FileFilter;
use ltt::core::scanner::scan;

#[test]
fn test_scan_finds_documents_and_prunes_excluded() -> Result<()> {
    let dir = setup_docs_directory()?;
    let filter = FileFilter::new(&[], &[], &[])?;
    let files = scan(dir.path(), &filter)?;

    let mut paths: Vec<&str> = files.iter().map(|f| f.relative_path.as_str()).collect();
    paths.sort_unstable();
    assert_eq!(
        paths,
        vec!["api/readme.md", "changelog.md", "guide.md", "index.md"]
    );
    Ok(())
}

#[test]
fn test_scan_skips_non_document_files() -> Result<()> {
    let dir = setup_docs_directory()?;
    let filter = FileFilter::new(&[], &[], &[])?;
    let files = scan(dir.path(), &filter)?;
    assert!(
        !files.iter().any(|f| f.relative_path.ends_with(".svg")),
        "only .md/.mdx/.html files should be scanned"
    );
    Ok(())
}

#[test]
fn test_scan_coarse_name_exclusion() -> Result<()> {
    let dir = setup_docs_directory()?;
    // Substring matching: "about" contains "out", "my-build-notes"
    // contains "build".
    create_test_file(dir.path(), "about.md", "# About")?;
    create_test_file(dir.path(), "my-build-notes.md", "# Notes")?;

    let filter = FileFilter::new(&[], &[], &[])?;
    let files = scan(dir.path(), &filter)?;
    assert!(!files.iter().any(|f| f.relative_path == "about.md"));
    assert!(!files.iter().any(|f| f.relative_path == "my-build-notes.md"));
    Ok(())
}

#[test]
fn test_scan_with_extra_excluded_names() -> Result<()> {
    let dir = setup_docs_directory()?;
    create_test_file(dir.path(), "private/secret.md", "# Secret")?;

    let extra = vec![String::from("private")];
    let filter = FileFilter::new(&extra, &[], &[])?;
    let files = scan(dir.path(), &filter)?;
    assert!(!files.iter().any(|f| f.relative_path.contains("secret")));
    Ok(())
}

#[test]
fn test_scan_include_globs_limit_depth() -> Result<()> {
    let dir = setup_docs_directory()?;
    let include = vec![String::from("*.md")];
    let filter = FileFilter::new(&[], &include, &[])?;
    let files = scan(dir.path(), &filter)?;

    // `*` does not cross path segments, so api/readme.md is rejected.
    let mut paths: Vec<&str> = files.iter().map(|f| f.relative_path.as_str()).collect();
    paths.sort_unstable();
    assert_eq!(paths, vec!["changelog.md", "guide.md", "index.md"]);
    Ok(())
}

#[test]
fn test_scan_exclude_globs() -> Result<()> {
    let dir = setup_docs_directory()?;
    let exclude = vec![String::from("api/*")];
    let filter = FileFilter::new(&[], &[], &exclude)?;
    let files = scan(dir.path(), &filter)?;
    assert!(!files.iter().any(|f| f.relative_path.starts_with("api/")));
    Ok(())
}
