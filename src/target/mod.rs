//! Target-file detection and per-format bump strategies.
//!
//! Supports pyproject.toml (PEP 621 + Poetry) and setup.py.

pub mod pyproject;
pub mod setup_py;

pub use setup_py::{SetupParser, VersionLiteral};

use std::path::Path;

use semver::Version;
use tracing::debug;

use crate::error::BumpError;
use crate::version::BumpKind;

/// The kind of packaging metadata file detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    PyprojectToml,
    SetupPy,
}

impl std::fmt::Display for TargetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetKind::PyprojectToml => write!(f, "pyproject.toml"),
            TargetKind::SetupPy => write!(f, "setup.py"),
        }
    }
}

/// Result of a successful bump.
#[derive(Debug, Clone)]
pub struct BumpOutcome {
    pub target: TargetKind,
    pub previous: Version,
    pub next: Version,
}

/// Infer the target kind from the path's file name.
///
/// Returns `BumpError::UnsupportedFileKind` for anything that is not a
/// pyproject.toml or setup.py path.
pub fn detect_target(path: &Path) -> Result<TargetKind, BumpError> {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();

    if name.ends_with("pyproject.toml") {
        Ok(TargetKind::PyprojectToml)
    } else if name.ends_with("setup.py") {
        Ok(TargetKind::SetupPy)
    } else {
        Err(BumpError::UnsupportedFileKind(path.to_path_buf()))
    }
}

/// Bump the version in the file at `path`, in place.
///
/// Reads the whole file, extracts the current version, applies the bump, and
/// overwrites the file with the updated content. Every failure is detected
/// before the write, so a failed invocation leaves the file unmodified.
pub fn bump_file(path: &Path, kind: BumpKind) -> Result<BumpOutcome, BumpError> {
    if !path.exists() {
        return Err(BumpError::FileNotFound(path.to_path_buf()));
    }

    let target = detect_target(path)?;
    debug!("Bumping {} version in {}", kind, path.display());

    let outcome = match target {
        TargetKind::PyprojectToml => pyproject::bump(path, kind)?,
        TargetKind::SetupPy => setup_py::bump(path, kind)?,
    };

    debug!("Version bumped: {} -> {}", outcome.previous, outcome.next);
    Ok(outcome)
}

// --- Shared helpers ---

pub(crate) fn read_file(path: &Path) -> Result<String, BumpError> {
    std::fs::read_to_string(path).map_err(|e| BumpError::ReadFailed {
        path: path.to_path_buf(),
        source: e,
    })
}

pub(crate) fn write_file(path: &Path, content: &str) -> Result<(), BumpError> {
    std::fs::write(path, content).map_err(|e| BumpError::WriteFailed {
        path: path.to_path_buf(),
        source: e,
    })
}
