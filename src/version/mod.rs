//! Version triple parsing and semver bumping.

pub mod bump;

pub use bump::{BumpKind, apply_bump, extract_triple};
