// src/lang.rs
use std::path::Path;
use tree_sitter::Language;

/// File classification by extension; selects the extraction strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    /// Plain TypeScript (`.ts`).
    TypeScript,
    /// JSX-capable scripts (`.tsx`, `.jsx`, `.js`, `.mjs`, `.cjs`). The tsx
    /// grammar accepts JSX, type annotations, and plain script syntax.
    Tsx,
    /// Markdown (`.md`), scanned for wiki-links and markdown links.
    Markdown,
}

impl Lang {
    #[must_use]
    pub fn from_ext(ext: &str) -> Option<Self> {
        match ext {
            "ts" => Some(Self::TypeScript),
            "tsx" | "jsx" | "js" | "mjs" | "cjs" => Some(Self::Tsx),
            "md" => Some(Self::Markdown),
            _ => None,
        }
    }

    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension().and_then(|s| s.to_str())?;
        Self::from_ext(&ext.to_ascii_lowercase())
    }

    #[must_use]
    pub fn is_code(self) -> bool {
        !matches!(self, Self::Markdown)
    }

    /// Grammar used for code extraction. Markdown has no grammar.
    #[must_use]
    pub fn grammar(self) -> Option<Language> {
        match self {
            Self::TypeScript => Some(tree_sitter_typescript::language_typescript()),
            Self::Tsx => Some(tree_sitter_typescript::language_tsx()),
            Self::Markdown => None,
        }
    }
}
