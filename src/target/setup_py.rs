//! Script-style strategy: setup.py.
//!
//! Parses the file with tree-sitter's Python grammar, confirms that `setup`
//! is imported from setuptools, and locates the version keyword argument
//! inside the `setup(...)` call. The rewrite splices the new version into the
//! located literal's byte span only, so version-shaped text anywhere else in
//! the file (comments, unrelated literals) is left untouched.

use std::ops::Range;
use std::path::Path;

use tree_sitter::{Node, Parser};

use super::{BumpOutcome, TargetKind, read_file, write_file};
use crate::error::BumpError;
use crate::version::{BumpKind, apply_bump, extract_triple};

/// A located version string literal inside a setup() call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionLiteral {
    /// Raw literal text, quotes included.
    pub text: String,
    /// Byte range of the literal in the source, quotes included.
    pub span: Range<usize>,
    /// Quote character found at the match site.
    pub quote: char,
}

impl VersionLiteral {
    /// The literal text with the surrounding quotes stripped.
    pub fn unquoted(&self) -> &str {
        self.text.trim_matches(self.quote)
    }
}

/// A Python parser bound to the tree-sitter Python grammar.
///
/// Constructed explicitly per invocation and passed where needed; there is
/// no process-wide parser state.
pub struct SetupParser {
    parser: Parser,
}

impl SetupParser {
    pub fn new() -> Result<Self, BumpError> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_python::language())
            .map_err(BumpError::ParserInit)?;
        Ok(SetupParser { parser })
    }

    /// Locate the version keyword argument's string literal in `source`.
    ///
    /// Requires a setuptools import (either `from setuptools import setup`
    /// or `import setuptools`) and a setup() call with a quoted version
    /// argument. Each missing piece surfaces as its own error variant.
    pub fn extract_version_literal(
        &mut self,
        path: &Path,
        source: &str,
    ) -> Result<VersionLiteral, BumpError> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| BumpError::PythonParseFailed(path.to_path_buf()))?;
        let root = tree.root_node();

        if root.has_error() {
            return Err(BumpError::PythonParseFailed(path.to_path_buf()));
        }

        if !has_setuptools_import(root, source) {
            return Err(BumpError::SetupImportMissing(path.to_path_buf()));
        }

        let call = find_setup_call(root, source)
            .ok_or_else(|| BumpError::SetupCallMissing(path.to_path_buf()))?;

        find_version_argument(call, source)
            .ok_or_else(|| BumpError::VersionFieldMissing(path.to_path_buf()))
    }
}

pub(crate) fn bump(path: &Path, kind: BumpKind) -> Result<BumpOutcome, BumpError> {
    let source = read_file(path)?;

    let mut parser = SetupParser::new()?;
    let literal = parser.extract_version_literal(path, &source)?;

    let previous =
        extract_triple(&literal.text).ok_or_else(|| BumpError::VersionFormatInvalid {
            path: path.to_path_buf(),
            value: literal.unquoted().to_string(),
        })?;
    let next = apply_bump(&previous, kind);

    // Splice the new literal into the located span; bytes outside it are
    // copied through unchanged.
    let mut updated = String::with_capacity(source.len());
    updated.push_str(&source[..literal.span.start]);
    updated.push(literal.quote);
    updated.push_str(&next.to_string());
    updated.push(literal.quote);
    updated.push_str(&source[literal.span.end..]);

    write_file(path, &updated)?;

    Ok(BumpOutcome {
        target: TargetKind::SetupPy,
        previous,
        next,
    })
}

/// Check that the file imports setup from setuptools.
///
/// Accepts both `from setuptools import setup` and `import setuptools`
/// (with or without aliases).
fn has_setuptools_import(root: Node, source: &str) -> bool {
    for import in find_descendants(root, "import_from_statement") {
        let module = import
            .child_by_field_name("module_name")
            .map(|n| node_text(n, source));
        if module != Some("setuptools") {
            continue;
        }
        let mut cursor = import.walk();
        for name in import.children_by_field_name("name", &mut cursor) {
            if imported_name(name, source) == Some("setup") {
                return true;
            }
        }
    }

    for import in find_descendants(root, "import_statement") {
        let mut cursor = import.walk();
        for name in import.children_by_field_name("name", &mut cursor) {
            if imported_name(name, source) == Some("setuptools") {
                return true;
            }
        }
    }

    false
}

/// The imported name, looking through `x as y` aliases.
fn imported_name<'a>(node: Node, source: &'a str) -> Option<&'a str> {
    match node.kind() {
        "dotted_name" => Some(node_text(node, source)),
        "aliased_import" => node
            .child_by_field_name("name")
            .map(|n| node_text(n, source)),
        _ => None,
    }
}

/// Find the first call whose callee is `setup` or `<module>.setup`.
fn find_setup_call<'tree>(root: Node<'tree>, source: &str) -> Option<Node<'tree>> {
    find_descendants(root, "call").into_iter().find(|call| {
        let Some(function) = call.child_by_field_name("function") else {
            return false;
        };
        match function.kind() {
            "identifier" => node_text(function, source) == "setup",
            "attribute" => function
                .child_by_field_name("attribute")
                .map(|a| node_text(a, source) == "setup")
                .unwrap_or(false),
            _ => false,
        }
    })
}

/// Find the `version` keyword argument with a string-literal value.
fn find_version_argument(call: Node, source: &str) -> Option<VersionLiteral> {
    let args = call.child_by_field_name("arguments")?;

    for i in 0..args.child_count() {
        let Some(arg) = args.child(i) else { continue };
        if arg.kind() != "keyword_argument" {
            continue;
        }
        let Some(name) = arg.child_by_field_name("name") else {
            continue;
        };
        if node_text(name, source) != "version" {
            continue;
        }
        let Some(value) = arg.child_by_field_name("value") else {
            continue;
        };
        if value.kind() != "string" {
            continue;
        }

        let text = node_text(value, source);
        let quote = text.chars().next()?;
        if quote != '"' && quote != '\'' {
            continue;
        }

        return Some(VersionLiteral {
            text: text.to_string(),
            span: value.start_byte()..value.end_byte(),
            quote,
        });
    }

    None
}

/// Collect descendants of `node` with the given kind, depth-first.
fn find_descendants<'tree>(node: Node<'tree>, kind: &str) -> Vec<Node<'tree>> {
    let mut result = Vec::new();
    let mut stack = vec![node];
    while let Some(current) = stack.pop() {
        if current.kind() == kind {
            result.push(current);
        }
        for i in (0..current.child_count()).rev() {
            if let Some(child) = current.child(i) {
                stack.push(child);
            }
        }
    }
    result
}

fn node_text<'a>(node: Node, source: &'a str) -> &'a str {
    &source[node.start_byte()..node.end_byte()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(source: &str) -> Result<VersionLiteral, BumpError> {
        let mut parser = SetupParser::new().unwrap();
        parser.extract_version_literal(Path::new("setup.py"), source)
    }

    #[test]
    fn test_extract_double_quoted_literal() {
        let source = "from setuptools import setup\nsetup(name=\"x\", version=\"1.2.3\")\n";

        let literal = extract(source).unwrap();

        assert_eq!(literal.text, "\"1.2.3\"");
        assert_eq!(literal.quote, '"');
        assert_eq!(&source[literal.span.clone()], "\"1.2.3\"");
    }

    #[test]
    fn test_extract_single_quoted_literal() {
        let source = "from setuptools import setup\nsetup(version='0.4.0')\n";

        let literal = extract(source).unwrap();

        assert_eq!(literal.unquoted(), "0.4.0");
        assert_eq!(literal.quote, '\'');
    }

    #[test]
    fn test_accepts_import_setuptools_form() {
        let source = "import setuptools\nsetuptools.setup(version='1.0.0')\n";

        let literal = extract(source).unwrap();

        assert_eq!(literal.unquoted(), "1.0.0");
    }

    #[test]
    fn test_accepts_aliased_import() {
        let source = "import setuptools as st\nst.setup(version='1.0.0')\n";

        assert!(extract(source).is_ok());
    }

    #[test]
    fn test_missing_import_is_rejected() {
        let source = "setup(version='1.0.0')\n";

        let result = extract(source);

        assert!(matches!(result, Err(BumpError::SetupImportMissing(_))));
    }

    #[test]
    fn test_missing_setup_call() {
        let source = "from setuptools import setup\nprint('no call here')\n";

        let result = extract(source);

        assert!(matches!(result, Err(BumpError::SetupCallMissing(_))));
    }

    #[test]
    fn test_missing_version_argument() {
        let source = "from setuptools import setup\nsetup(name='x')\n";

        let result = extract(source);

        assert!(matches!(result, Err(BumpError::VersionFieldMissing(_))));
    }

    #[test]
    fn test_ignores_version_text_outside_setup_call() {
        let source = "from setuptools import setup\n\n# requires 2.0.0\nbanner = 'build 3.1.4'\nsetup(version='1.0.0')\n";

        let literal = extract(source).unwrap();

        assert_eq!(literal.unquoted(), "1.0.0");
    }

    #[test]
    fn test_skips_other_calls_before_setup() {
        let source =
            "from setuptools import setup\nsetup(\n    long_description=open('README.md').read(),\n    version='2.5.0',\n)\n";

        let literal = extract(source).unwrap();

        assert_eq!(literal.unquoted(), "2.5.0");
    }
}
