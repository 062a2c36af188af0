// src/graph/extract.rs
//! Import extraction for code files.
//!
//! Collects the source string of every static import declaration and the
//! first string argument of every call to an identifier named `require`.
//! Dynamic `import()` expressions parse as a call whose callee is the
//! `import` keyword, not an identifier, so they produce no reference; that
//! gap is a documented capability choice.

use crate::lang::Lang;
use tree_sitter::{Language, Parser, Query, QueryCursor};

/// Static imports plus `require()` calls. The `@callee` capture is checked
/// in code because query predicates are not evaluated by the runtime.
const IMPORT_QUERY: &str = r"
    (import_statement source: (string) @source)
    (call_expression
      function: (identifier) @callee
      arguments: (arguments . (string) @source))
";

/// Extracts raw import specifiers from `content`, in source order.
///
/// Extraction is best-effort: a file the parser cannot handle yields an
/// empty list, never an error, so the file keeps its node with no outgoing
/// edges.
#[must_use]
pub fn extract(lang: Lang, content: &str) -> Vec<String> {
    let Some(grammar) = lang.grammar() else {
        return Vec::new();
    };
    run_query(content, grammar, &compile_query(grammar))
}

fn run_query(source: &str, lang: Language, query: &Query) -> Vec<String> {
    let mut parser = Parser::new();
    if parser.set_language(lang).is_err() {
        return Vec::new();
    }

    let Some(tree) = parser.parse(source, None) else {
        return Vec::new();
    };

    let source_idx = query.capture_index_for_name("source");
    let callee_idx = query.capture_index_for_name("callee");

    let mut cursor = QueryCursor::new();
    let matches = cursor.matches(query, tree.root_node(), source.as_bytes());
    let mut imports = Vec::new();

    for m in matches {
        let mut is_require_call = true;
        let mut specifiers = Vec::new();

        for capture in m.captures {
            let Ok(text) = capture.node.utf8_text(source.as_bytes()) else {
                continue;
            };
            if Some(capture.index) == callee_idx {
                is_require_call = text == "require";
            } else if Some(capture.index) == source_idx {
                specifiers.push(unquote(text));
            }
        }

        if is_require_call {
            imports.extend(specifiers);
        }
    }

    imports
}

fn unquote(text: &str) -> String {
    text.trim_matches(|c| c == '"' || c == '\'' || c == '`')
        .to_string()
}

fn compile_query(lang: Language) -> Query {
    match Query::new(lang, IMPORT_QUERY) {
        Ok(q) => q,
        Err(e) => panic!("Invalid import query: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_imports() {
        let code = r#"
            import { Foo } from "./components";
            import bar from './bar';
            import * as ns from "../lib/ns";
        "#;
        let imports = extract(Lang::TypeScript, code);
        assert_eq!(imports, vec!["./components", "./bar", "../lib/ns"]);
    }

    #[test]
    fn test_require_calls() {
        let code = r#"
            const fs = require('fs');
            const local = require("./local");
            const notRequire = load("./ignored");
        "#;
        let imports = extract(Lang::Tsx, code);
        assert!(imports.contains(&"fs".to_string()));
        assert!(imports.contains(&"./local".to_string()));
        assert!(!imports.contains(&"./ignored".to_string()));
    }

    #[test]
    fn test_dynamic_import_is_not_extracted() {
        let code = r#"const m = await import("./dynamic");"#;
        let imports = extract(Lang::TypeScript, code);
        assert!(imports.is_empty());
    }

    #[test]
    fn test_jsx_and_type_syntax() {
        let code = r#"
            import React from "react";
            import type { Props } from "./types";
            export const App = (p: Props) => <div>{p.title}</div>;
        "#;
        let imports = extract(Lang::Tsx, code);
        assert!(imports.contains(&"react".to_string()));
        assert!(imports.contains(&"./types".to_string()));
    }

    #[test]
    fn test_markdown_yields_nothing() {
        assert!(extract(Lang::Markdown, "[[note]]").is_empty());
    }
}
