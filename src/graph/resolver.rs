// src/graph/resolver.rs
//! Maps raw reference specifiers to concrete in-tree files.
//!
//! Every strategy is constrained by the scan root: a candidate that
//! lexically escapes the root is rejected before any disk probe, even if
//! such a path exists.

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

/// Extension precedence for extensionless code specifiers. First existing
/// candidate wins; the fixed order makes ties impossible.
pub const CODE_EXTS: &[&str] = &["ts", "tsx", "js", "jsx", "mjs", "cjs"];

/// Outcome of resolving a code import specifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A concrete in-tree file.
    Resolved(PathBuf),
    /// Bare/package specifier: always external, never a node and never an
    /// unresolved record.
    External,
    /// Relative specifier that matched nothing in the tree.
    Unresolved,
}

/// Basename (file stem) -> discovered files, in discovery order.
///
/// Multiple files may share a basename in different directories; the first
/// match in discovery order wins. That ambiguity is deliberate and
/// documented, not silently corrected.
pub type BasenameIndex = HashMap<String, Vec<PathBuf>>;

#[must_use]
pub fn build_basename_index(files: &[PathBuf]) -> BasenameIndex {
    let mut index: BasenameIndex = HashMap::new();
    for file in files {
        if let Some(stem) = file.file_stem().and_then(|s| s.to_str()) {
            index.entry(stem.to_string()).or_default().push(file.clone());
        }
    }
    index
}

/// Resolves a code import specifier relative to the file containing it.
///
/// Only relative specifiers (starting with `.`) resolve. Resolution order:
/// the exact path if the specifier already has an extension, then each
/// entry of [`CODE_EXTS`] appended, then `index.<ext>` under the specifier
/// treated as a directory.
#[must_use]
pub fn resolve_import(root: &Path, from: &Path, spec: &str) -> Resolution {
    if !spec.starts_with('.') {
        return Resolution::External;
    }
    let Some(parent) = from.parent() else {
        return Resolution::Unresolved;
    };
    let base = normalize(&parent.join(spec));

    let mut candidates = Vec::new();
    if base.extension().is_some() {
        candidates.push(base.clone());
    }
    for ext in CODE_EXTS {
        candidates.push(append_ext(&base, ext));
    }
    for ext in CODE_EXTS {
        candidates.push(base.join(format!("index.{ext}")));
    }

    for candidate in candidates {
        if !inside_root(root, &candidate) {
            continue;
        }
        if candidate.is_file() {
            return Resolution::Resolved(candidate);
        }
    }
    Resolution::Unresolved
}

/// Resolves a wiki-link target: basename index first (first discovery-order
/// hit wins), then a root-relative `<target>.md` guess.
#[must_use]
pub fn resolve_wikilink(root: &Path, index: &BasenameIndex, target: &str) -> Option<PathBuf> {
    if let Some(first) = index.get(target).and_then(|hits| hits.first()) {
        return Some(first.clone());
    }
    let guess = normalize(&root.join(format!("{target}.md")));
    (inside_root(root, &guess) && guess.is_file()).then_some(guess)
}

/// Resolves a relative markdown link against the referencing file's
/// directory: the raw target first, then the target with `.md` appended.
#[must_use]
pub fn resolve_mdlink(root: &Path, from: &Path, target: &str) -> Option<PathBuf> {
    let parent = from.parent()?;
    let raw = normalize(&parent.join(target));
    if inside_root(root, &raw) && raw.is_file() {
        return Some(raw);
    }
    let with_md = append_ext(&raw, "md");
    (inside_root(root, &with_md) && with_md.is_file()).then_some(with_md)
}

/// Lexically folds `.` and `..` components without touching disk. Needed
/// because candidates must pass the root guard before any existence check.
#[must_use]
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

fn inside_root(root: &Path, path: &Path) -> bool {
    path.starts_with(root)
}

/// Appends `.ext` to a path without replacing an existing extension, so
/// `./a.module` can still resolve to `a.module.ts`.
fn append_ext(base: &Path, ext: &str) -> PathBuf {
    let mut s = base.as_os_str().to_os_string();
    s.push(".");
    s.push(ext);
    PathBuf::from(s)
}
