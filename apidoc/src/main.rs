//! apidoc — generate the smgf Markdown API reference.
//!
//! Runs lua-language-server in documentation export mode over the Lua
//! definition files, filters and orders the resulting `doc.json`, and
//! writes a single Docusaurus page:
//!
//! - **analyzer mode** (default): `apidoc --docs docs-api --config scripts/llsConf.json`
//! - **dump mode**: `apidoc -i doc.json --stdout`

mod acquire;
mod error;
mod filter;
mod model;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "apidoc",
    about = "Generate the Markdown API reference from lua-language-server definitions"
)]
struct Cli {
    /// Directory of Lua definition files handed to the analyzer
    #[arg(long, default_value = "docs-api")]
    docs: PathBuf,

    /// Analyzer configuration file (must exist)
    #[arg(long, default_value = "scripts/llsConf.json")]
    config: PathBuf,

    /// Output markdown file, overwritten on every run
    #[arg(short = 'o', long, default_value = "website/docs/api.md")]
    output: PathBuf,

    /// Print the page to stdout instead of writing the output file
    #[arg(long)]
    stdout: bool,

    /// Read an existing doc.json instead of running the analyzer
    #[arg(short = 'i', long)]
    input: Option<PathBuf>,

    /// Analyzer executable
    #[arg(long, default_value = "lua-language-server")]
    analyzer: String,

    /// Keep the analyzer's temporary directory after the run
    #[arg(long)]
    keep_temp: bool,

    /// Root namespace; the descriptor with this exact name is listed first
    #[arg(long, default_value = "smgf")]
    root: String,

    /// Front-matter title
    #[arg(long, default_value = "API reference")]
    title: String,

    /// Front-matter sidebar position
    #[arg(long, default_value_t = 5)]
    sidebar_position: u32,

    /// Language tag for fenced code blocks
    #[arg(long, default_value = "lua")]
    lang: String,

    /// How links inside field descriptions are turned into anchors
    #[arg(long, value_enum, default_value_t = render::LinkStyle::Label)]
    links: render::LinkStyle,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let descriptors = match cli.input {
        Some(ref path) => {
            tracing::info!(path = %path.display(), "dump path");
            acquire::load_dump(path)
                .with_context(|| format!("failed to load {}", path.display()))?
        }
        None => {
            tracing::info!(path = %cli.docs.display(), "docs dir path");
            tracing::info!(path = %cli.config.display(), "config path");
            let analyzer = acquire::LuaLanguageServer {
                program: cli.analyzer.clone(),
                keep_temp: cli.keep_temp,
            };
            acquire::acquire(&analyzer, &cli.config, &cli.docs)
                .context("failed to acquire documentation dump")?
        }
    };

    let filter = filter::DescriptorFilter::new(&cli.root)?;
    let ordered = filter.apply(descriptors);

    let renderer = render::MarkdownRenderer {
        title: cli.title.clone(),
        sidebar_position: cli.sidebar_position,
        lang: cli.lang.clone(),
        links: cli.links,
    };
    let markdown = renderer.render(&ordered);

    if cli.stdout {
        print!("{}", markdown);
        return Ok(());
    }

    write_output(&cli.output, &markdown)
}

/// Write the fully rendered page; nothing touches the target before this.
fn write_output(path: &Path, content: &str) -> Result<()> {
    tracing::info!(path = %path.display(), "output path");
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
