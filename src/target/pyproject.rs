//! Structured-config strategy: pyproject.toml.
//!
//! Reads the version from `[project].version` (PEP 621), falling back to
//! `[tool.poetry].version`, and writes the bumped value back through
//! `toml_edit` so the rest of the document keeps its formatting.

use std::path::Path;

use toml_edit::DocumentMut;

use super::{BumpOutcome, TargetKind, read_file, write_file};
use crate::error::BumpError;
use crate::version::{BumpKind, apply_bump, extract_triple};

pub(crate) fn bump(path: &Path, kind: BumpKind) -> Result<BumpOutcome, BumpError> {
    let content = read_file(path)?;
    let mut doc = content
        .parse::<DocumentMut>()
        .map_err(|e| BumpError::TomlInvalid {
            path: path.to_path_buf(),
            source: e,
        })?;

    let current = read_version(&doc)
        .ok_or_else(|| BumpError::VersionFieldMissing(path.to_path_buf()))?
        .to_string();

    let previous = extract_triple(&current).ok_or_else(|| BumpError::VersionFormatInvalid {
        path: path.to_path_buf(),
        value: current.clone(),
    })?;
    let next = apply_bump(&previous, kind);

    // Write back to whichever table held the version
    if doc
        .get("project")
        .and_then(|p| p.get("version"))
        .is_some()
    {
        doc["project"]["version"] = toml_edit::value(next.to_string());
    } else {
        doc["tool"]["poetry"]["version"] = toml_edit::value(next.to_string());
    }

    write_file(path, &doc.to_string())?;

    Ok(BumpOutcome {
        target: TargetKind::PyprojectToml,
        previous,
        next,
    })
}

fn read_version(doc: &DocumentMut) -> Option<&str> {
    // PEP 621: [project].version
    doc.get("project")
        .and_then(|p| p.get("version"))
        .and_then(|v| v.as_str())
        // Poetry fallback: [tool.poetry].version
        .or_else(|| {
            doc.get("tool")
                .and_then(|t| t.get("poetry"))
                .and_then(|p| p.get("version"))
                .and_then(|v| v.as_str())
        })
}
