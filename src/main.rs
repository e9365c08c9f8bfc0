//! pybump - CLI entry point.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pybump::{BumpKind, bump_file};

/// Bump the semantic version in setup.py or pyproject.toml.
#[derive(Parser, Debug)]
#[command(name = "pybump")]
#[command(about = "Bump the semantic version in setup.py or pyproject.toml")]
#[command(version)]
struct Cli {
    /// Path to the packaging metadata file
    #[arg(default_value = "setup.py")]
    file: PathBuf,

    /// Version component to increment: major, minor, or patch
    #[arg(default_value = "patch")]
    kind: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let kind: BumpKind = cli.kind.parse()?;
    let outcome = bump_file(&cli.file, kind)?;

    println!("Version: {} -> {}", outcome.previous, outcome.next);

    Ok(())
}
