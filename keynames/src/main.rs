//! keynames — generate the `smgf_key_names` array from SDL's scancode table.
//!
//! Reads `SDL_keyboard.c` (SDL 2.26.1), cuts out the
//! `SDL_scancode_names` initializer, and prints it as a single-line
//! `smgf_key_names` declaration on stdout:
//!
//! ```text
//! keynames path/to/SDL_keyboard.c > src/keys.inc
//! ```

mod error;
mod region;
mod rewrite;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "keynames",
    about = "Print smgf_key_names from SDL's SDL_scancode_names table"
)]
struct Cli {
    /// Path to SDL_keyboard.c
    input: PathBuf,
}

/// Extract and rewrite the scancode table, end marker included.
fn extract(source: &str) -> error::Result<String> {
    let region = region::find_region(source, region::ARRAY_START, region::ARRAY_END)?;
    tracing::debug!(bytes = region.len(), "found scancode table");
    Ok(rewrite::rewrite_region(region) + region::ARRAY_END)
}

fn extract_file(path: &Path) -> error::Result<String> {
    let source = fs::read_to_string(path)?;
    extract(&source)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let output = extract_file(&cli.input)
        .with_context(|| format!("Failed to extract key names from {}", cli.input.display()))?;
    println!("{}", output);

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
