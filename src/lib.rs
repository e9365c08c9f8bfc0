//! pybump - bump the semantic version in Python packaging metadata.
//!
//! # Overview
//!
//! pybump locates the version string in a project's setup.py or
//! pyproject.toml, increments the requested component (major, minor, or
//! patch), and rewrites the file in place, leaving the surrounding content
//! untouched.

pub mod error;
pub mod target;
pub mod version;

// Re-export commonly used types
pub use error::BumpError;
pub use target::{BumpOutcome, SetupParser, TargetKind, VersionLiteral, bump_file, detect_target};
pub use version::{BumpKind, apply_bump, extract_triple};
