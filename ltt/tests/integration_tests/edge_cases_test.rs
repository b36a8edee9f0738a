// tests/integration_tests/edge_cases_test.rs
use super::common::create_test_file;
use anyhow::Result;
use ltt::Args;
use std::fs;
use tempfile::TempDir;

fn run(input: &TempDir, output: &TempDir) -> Result<()> {
    ltt::run(Args {
        input: input.path().to_path_buf(),
        output: output.path().to_path_buf(),
        include: Vec::new(),
        exclude: Vec::new(),
        generate_index: false,
        silent: true,
    })
}

#[test]
fn test_malformed_front_matter_is_kept_as_content() -> Result<()> {
    let input = TempDir::new()?;
    let output = TempDir::new()?;
    create_test_file(input.path(), "page.md", "---\ntitle: x\nno closing delimiter")?;

    run(&input, &output)?;

    let full = fs::read_to_string(output.path().join("llms-full.txt"))?;
    // Without a closing delimiter the block is ordinary content.
    assert!(full.contains("no closing delimiter"));
    assert!(full.contains("title: x"));
    Ok(())
}

#[test]
fn test_delimiter_not_at_start_is_content() -> Result<()> {
    let input = TempDir::new()?;
    let output = TempDir::new()?;
    create_test_file(input.path(), "page.md", "intro line\n---\ntitle: x\n---\nrest")?;

    run(&input, &output)?;

    let full = fs::read_to_string(output.path().join("llms-full.txt"))?;
    assert!(full.contains("intro line"));
    assert!(full.contains("title: x"));
    Ok(())
}

#[test]
fn test_crlf_front_matter_is_stripped() -> Result<()> {
    let input = TempDir::new()?;
    let output = TempDir::new()?;
    create_test_file(input.path(), "page.md", "---\r\ntitle: x\r\n---\r\nBody\r\n")?;

    run(&input, &output)?;

    let full = fs::read_to_string(output.path().join("llms-full.txt"))?;
    assert!(full.contains("## page.md\n\nBody\n"));
    Ok(())
}

#[test]
fn test_unreadable_file_is_skipped_with_a_warning() -> Result<()> {
    let input = TempDir::new()?;
    let output = TempDir::new()?;
    create_test_file(input.path(), "good.md", "# Good")?;
    // Invalid UTF-8 makes read_to_string fail; the run must continue.
    fs::write(input.path().join("bad.md"), [0xff, 0xfe, 0x00, 0x9f])?;

    run(&input, &output)?;

    let full = fs::read_to_string(output.path().join("llms-full.txt"))?;
    assert!(full.contains("## good.md"));
    assert!(!full.contains("## bad.md"));
    Ok(())
}

#[test]
fn test_whitespace_only_document_is_kept_empty() -> Result<()> {
    let input = TempDir::new()?;
    let output = TempDir::new()?;
    create_test_file(input.path(), "blank.md", "   \n\n  ")?;

    run(&input, &output)?;

    let full = fs::read_to_string(output.path().join("llms-full.txt"))?;
    assert!(full.contains("## blank.md\n\n\n\n---\n"));
    Ok(())
}

#[test]
fn test_document_extension_case_is_ignored() -> Result<()> {
    let input = TempDir::new()?;
    let output = TempDir::new()?;
    create_test_file(input.path(), "PAGE.MD", "# Upper")?;

    run(&input, &output)?;

    let index = fs::read_to_string(output.path().join("llms.txt"))?;
    assert!(index.contains("PAGE.MD"));
    Ok(())
}
