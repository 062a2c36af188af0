// src/discovery.rs
use crate::config::{Config, PRUNE_DIRS};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Enumerates candidate files under the scan root.
///
/// Returns absolute paths, lexicographically sorted and deduplicated, whose
/// extension is on the allowlist. Infrastructure directories are pruned and
/// the walk never follows symlinks out of the root. Unreadable entries are
/// skipped; the walk itself cannot fail.
#[must_use]
pub fn discover(config: &Config) -> Vec<PathBuf> {
    let walker = WalkDir::new(&config.root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| {
            // depth 0 is the root itself, even when the root dir is named
            // like a pruned directory (e.g. scanning a folder called "build")
            e.depth() == 0 || !should_prune(&e.file_name().to_string_lossy())
        });

    let mut paths = BTreeSet::new();
    let mut errors = 0usize;

    for item in walker {
        match item {
            Ok(entry) => {
                if entry.file_type().is_file()
                    && has_allowed_ext(entry.path(), &config.extensions)
                {
                    paths.insert(entry.path().to_path_buf());
                }
            }
            Err(_) => errors += 1,
        }
    }

    if errors > 0 && config.verbose {
        eprintln!("WARN: skipped {errors} unreadable entries during file walk");
    }

    paths.into_iter().collect()
}

fn should_prune(name: &str) -> bool {
    PRUNE_DIRS.contains(&name)
}

fn has_allowed_ext(path: &Path, allowed: &[String]) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(str::to_ascii_lowercase)
        .is_some_and(|ext| allowed.iter().any(|a| *a == ext))
}
