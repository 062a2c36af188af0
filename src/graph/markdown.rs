// src/graph/markdown.rs
//! Link extraction for markdown files.
//!
//! Purely syntactic: two regex passes over the raw text, one for
//! `[[wiki-links]]` and one for standard `[text](target)` links. No
//! resolution happens here.

use super::EdgeKind;
use regex::Regex;
use std::sync::LazyLock;

/// A typed reference extracted from markdown text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MdRef {
    pub kind: EdgeKind,
    pub target: String,
}

static WIKI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[([^\]]+)\]\]").unwrap_or_else(|_| panic!("Invalid Regex")));
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[[^\]]*\]\(([^)]+)\)").unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// Scans markdown text for wiki-links and markdown links, in that order.
///
/// Wiki targets drop the `|display` suffix and `#anchor`; markdown targets
/// drop `#anchor` and absolute URLs (anything starting with `http`).
#[must_use]
pub fn extract(text: &str) -> Vec<MdRef> {
    let mut refs = Vec::new();

    for cap in WIKI_RE.captures_iter(text) {
        let raw = cap.get(1).map_or("", |m| m.as_str());
        let target = before('#', before('|', raw)).trim();
        if !target.is_empty() {
            refs.push(MdRef {
                kind: EdgeKind::Wikilink,
                target: target.to_string(),
            });
        }
    }

    for cap in LINK_RE.captures_iter(text) {
        let raw = cap.get(1).map_or("", |m| m.as_str());
        let target = before('#', raw).trim();
        if !target.is_empty() && !target.starts_with("http") {
            refs.push(MdRef {
                kind: EdgeKind::Mdlink,
                target: target.to_string(),
            });
        }
    }

    refs
}

fn before(sep: char, text: &str) -> &str {
    text.split(sep).next().unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wiki(target: &str) -> MdRef {
        MdRef {
            kind: EdgeKind::Wikilink,
            target: target.to_string(),
        }
    }

    fn md(target: &str) -> MdRef {
        MdRef {
            kind: EdgeKind::Mdlink,
            target: target.to_string(),
        }
    }

    #[test]
    fn test_wikilink_variants() {
        let text = "see [[alpha]] and [[beta|Display Text]] and [[gamma#section]]";
        assert_eq!(extract(text), vec![wiki("alpha"), wiki("beta"), wiki("gamma")]);
    }

    #[test]
    fn test_markdown_links() {
        let text = "[doc](./notes/doc.md) and [site](https://example.com) and [frag](page#top)";
        assert_eq!(extract(text), vec![md("./notes/doc.md"), md("page")]);
    }

    #[test]
    fn test_empty_targets_are_dropped() {
        assert!(extract("[[#anchor-only]] [text](#top)").is_empty());
    }

    #[test]
    fn test_wikilinks_come_before_mdlinks() {
        let text = "[l](a.md) then [[b]]";
        assert_eq!(extract(text), vec![wiki("b"), md("a.md")]);
    }
}
