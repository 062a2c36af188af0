// tests/unit_discovery.rs
//! Tests for file discovery: allowlist, pruned directories, ordering.

use repograph_core::config::Config;
use repograph_core::discovery;
use std::fs;
use std::path::Path;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn test_discovers_allowlisted_files_sorted() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().canonicalize().unwrap();
    write(&root, "src/b.md", "# b");
    write(&root, "src/a.ts", "");
    write(&root, "top.tsx", "");
    write(&root, "image.png", "");

    let config = Config::new(root.clone());
    let found = discovery::discover(&config);

    let rels: Vec<_> = found
        .iter()
        .map(|p| p.strip_prefix(&root).unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(rels, vec!["src/a.ts", "src/b.md", "top.tsx"]);
}

#[test]
fn test_prunes_infrastructure_directories() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().canonicalize().unwrap();
    write(&root, "src/a.ts", "");
    write(&root, "node_modules/pkg/index.js", "");
    write(&root, ".git/hooks/x.md", "");
    write(&root, "dist/bundle.js", "");
    write(&root, "coverage/report.md", "");

    let config = Config::new(root.clone());
    let found = discovery::discover(&config);

    assert_eq!(found.len(), 1);
    assert!(found[0].ends_with("src/a.ts"));
}

#[test]
fn test_allowlist_is_configurable() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().canonicalize().unwrap();
    write(&root, "a.ts", "");
    write(&root, "b.md", "");

    let mut config = Config::new(root);
    config.extensions = vec!["md".to_string()];
    let found = discovery::discover(&config);

    assert_eq!(found.len(), 1);
    assert!(found[0].ends_with("b.md"));
}

#[test]
fn test_empty_root_yields_no_files() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().canonicalize().unwrap();
    let config = Config::new(root);
    assert!(discovery::discover(&config).is_empty());
}
