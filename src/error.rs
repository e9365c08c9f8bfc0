//! Error types for pybump using thiserror.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors from version bump operations.
///
/// Each failure condition gets its own variant so callers can match on the
/// specific problem instead of a generic failure.
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Unsupported file '{}': expected a setup.py or pyproject.toml path", .0.display())]
    UnsupportedFileKind(PathBuf),

    #[error("No version field found in {}", .0.display())]
    VersionFieldMissing(PathBuf),

    #[error("Version '{value}' in {} is not MAJOR.MINOR.PATCH", .path.display())]
    VersionFormatInvalid { path: PathBuf, value: String },

    #[error("Invalid bump kind '{0}': expected major, minor, or patch")]
    InvalidBumpKind(String),

    #[error("Failed to read {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid TOML in {}: {source}", .path.display())]
    TomlInvalid {
        path: PathBuf,
        #[source]
        source: toml_edit::TomlError,
    },

    #[error("Failed to parse Python source in {}", .0.display())]
    PythonParseFailed(PathBuf),

    #[error("Failed to load the Python grammar: {0}")]
    ParserInit(#[source] tree_sitter::LanguageError),

    #[error("'setup' is not imported from 'setuptools' in {}", .0.display())]
    SetupImportMissing(PathBuf),

    #[error("No setup() call found in {}", .0.display())]
    SetupCallMissing(PathBuf),
}
