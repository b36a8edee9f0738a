// tests/integration_tests/ordering_test.rs
use anyhow::Result;
use ltt::core::order::{
    DocClass, classify, index_priority, order_documents, strip_front_matter,
};
use ltt::models::Document;
use std::path::PathBuf;

fn doc(relative_path: &str) -> Document {
    Document {
        relative_path: relative_path.to_owned(),
        content: String::new(),
        source_path: PathBuf::from(relative_path),
        title: None,
    }
}

#[test]
fn test_priority_levels_inside_index_bucket() -> Result<()> {
    let ordered = order_documents(vec![
        doc("notes/home.md"),
        doc("sub/other-index/readme.md"),
        doc("index.md"),
    ]);

    let priorities: Vec<u8> = ordered
        .index
        .iter()
        .map(|d| index_priority(&d.relative_path))
        .collect();
    let mut sorted = priorities.clone();
    sorted.sort_unstable();
    assert_eq!(priorities, sorted, "index bucket must be priority-ordered");
    assert_eq!(ordered.index[0].relative_path, "index.md");
    Ok(())
}

#[test]
fn test_index_classification_at_any_depth() {
    assert_eq!(classify("deep/nested/index.md"), DocClass::Index);
    assert_eq!(classify("deep/nested/readme.html"), DocClass::Index);
    assert_eq!(classify("deep/nested/home.mdx"), DocClass::Index);
}

#[test]
fn test_important_is_substring_not_word_boundary() {
    // "restart" contains "start"; the heuristic is substring-based on
    // purpose.
    assert_eq!(classify("restart.md"), DocClass::Important);
    assert_eq!(classify("quickstart.md"), DocClass::Important);
    assert_eq!(classify("misc.md"), DocClass::Other);
}

#[test]
fn test_partition_is_total_and_disjoint() {
    let paths = [
        "index.md",
        "readme.md",
        "guide.md",
        "docs/deep/page.md",
        "changelog.md",
        "misc/note.md",
    ];
    let ordered = order_documents(paths.iter().map(|p| doc(p)).collect());
    assert_eq!(
        ordered.index.len() + ordered.important.len() + ordered.other.len(),
        paths.len()
    );
    assert_eq!(ordered.all().count(), paths.len());
}

#[test]
fn test_strip_front_matter_is_idempotent_over_files() -> Result<()> {
    let contents = [
        "---\ntitle: a\n---\nBody text",
        "# Plain\nNo front matter",
        "---\nbroken without closing",
        "",
    ];
    for content in contents {
        let once = strip_front_matter(content).to_owned();
        let twice = strip_front_matter(&once).to_owned();
        assert_eq!(once, twice);
    }
    Ok(())
}

#[test]
fn test_buckets_sort_by_path() {
    let ordered = order_documents(vec![
        doc("zzz.md"),
        doc("misc/alpha.md"),
        doc("beta.md"),
    ]);
    let other: Vec<&str> = ordered.other.iter().map(|d| d.relative_path.as_str()).collect();
    assert_eq!(other, vec!["beta.md", "misc/alpha.md", "zzz.md"]);
}
