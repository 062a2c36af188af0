// tests/unit_resolver.rs
//! Filesystem-backed tests for reference resolution rules.

use repograph_core::graph::resolver::{
    build_basename_index, resolve_import, resolve_mdlink, resolve_wikilink, Resolution,
};
use std::fs;
use std::path::{Path, PathBuf};

fn write(root: &Path, rel: &str, content: &str) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_extension_precedence_ts_wins_over_js() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().canonicalize().unwrap();
    write(&root, "b.js", "");
    let b_ts = write(&root, "b.ts", "");
    let from = write(&root, "a.ts", "");

    assert_eq!(
        resolve_import(&root, &from, "./b"),
        Resolution::Resolved(b_ts)
    );
}

#[test]
fn test_exact_path_when_specifier_has_extension() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().canonicalize().unwrap();
    let b_js = write(&root, "b.js", "");
    write(&root, "b.ts", "");
    let from = write(&root, "a.ts", "");

    assert_eq!(
        resolve_import(&root, &from, "./b.js"),
        Resolution::Resolved(b_js)
    );
}

#[test]
fn test_directory_resolves_to_index_file() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().canonicalize().unwrap();
    let index = write(&root, "utils/index.tsx", "");
    let from = write(&root, "a.ts", "");

    assert_eq!(
        resolve_import(&root, &from, "./utils"),
        Resolution::Resolved(index)
    );
}

#[test]
fn test_missing_relative_specifier_is_unresolved() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().canonicalize().unwrap();
    let from = write(&root, "a.ts", "");

    assert_eq!(resolve_import(&root, &from, "./ghost"), Resolution::Unresolved);
}

#[test]
fn test_traversal_guard_rejects_escaping_paths() {
    let tmp = tempfile::tempdir().unwrap();
    let base = tmp.path().canonicalize().unwrap();
    write(&base, "outside.ts", "");
    let root = base.join("inner");
    let from = write(&root, "a.ts", "");

    // ../outside.ts exists on disk but sits outside the scan root.
    assert_eq!(
        resolve_import(&root, &from, "../outside"),
        Resolution::Unresolved
    );
    assert_eq!(
        resolve_import(&root, &from, "../outside.ts"),
        Resolution::Unresolved
    );
}

#[test]
fn test_resolution_is_idempotent() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().canonicalize().unwrap();
    write(&root, "b.ts", "");
    let from = write(&root, "a.ts", "");

    let first = resolve_import(&root, &from, "./b");
    let second = resolve_import(&root, &from, "./b");
    assert_eq!(first, second);

    let missing_first = resolve_import(&root, &from, "./nope");
    let missing_second = resolve_import(&root, &from, "./nope");
    assert_eq!(missing_first, missing_second);
}

#[test]
fn test_wikilink_basename_lookup_first_match_wins() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().canonicalize().unwrap();
    let docs_y = write(&root, "docs/y.md", "");
    let notes_y = write(&root, "notes/y.md", "");

    // Discovery order is sorted, so docs/y.md is the deterministic winner.
    let index = build_basename_index(&[docs_y.clone(), notes_y]);
    assert_eq!(resolve_wikilink(&root, &index, "y"), Some(docs_y));
}

#[test]
fn test_wikilink_falls_back_to_root_relative_md() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().canonicalize().unwrap();
    let guide = write(&root, "docs/guide.md", "");

    // Not in the index (e.g. target written as a path, not a basename).
    let index = build_basename_index(&[]);
    assert_eq!(resolve_wikilink(&root, &index, "docs/guide"), Some(guide));
    assert_eq!(resolve_wikilink(&root, &index, "docs/missing"), None);
}

#[test]
fn test_mdlink_relative_with_md_append() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().canonicalize().unwrap();
    let target = write(&root, "notes/topic.md", "");
    let from = write(&root, "notes/index.md", "");

    assert_eq!(resolve_mdlink(&root, &from, "topic.md"), Some(target.clone()));
    assert_eq!(resolve_mdlink(&root, &from, "topic"), Some(target));
    assert_eq!(resolve_mdlink(&root, &from, "absent"), None);
}

#[test]
fn test_mdlink_outside_root_is_unresolved() {
    let tmp = tempfile::tempdir().unwrap();
    let base = tmp.path().canonicalize().unwrap();
    write(&base, "secret.md", "");
    let root = base.join("inner");
    let from = write(&root, "a.md", "");

    assert_eq!(resolve_mdlink(&root, &from, "../secret.md"), None);
}
