//! genconfig - applies `CMS_` environment overrides to a JSON configuration.
//!
//! Entry point: reads the target file, applies the override engine, and
//! writes the result back (or to stdout with `--dry-run`).

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use genconfig::document::{load_document, render_document};
use genconfig::logging::init_tracing;
use genconfig::{Engine, Mode};

/// Apply `CMS_`-prefixed environment variable overrides to a configuration file.
#[derive(Parser, Debug)]
#[command(name = "genconfig")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (read and, unless --dry-run, overwritten)
    config: PathBuf,

    /// Increase output verbosity
    #[arg(short, long)]
    verbose: bool,

    /// Print the result to stdout instead of overwriting the file
    #[arg(long)]
    dry_run: bool,

    /// Resolve override names as flattened double-underscore paths
    #[arg(long)]
    legacy: bool,

    /// Enable JSON logging output
    #[arg(long, env = "GENCONFIG_LOG_JSON")]
    log_json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Errors only unless -v, matching the historical tool.
    init_tracing(if cli.verbose { "debug" } else { "error" }, cli.log_json);

    tracing::debug!("target configuration file: {}", cli.config.display());

    let mut document = load_document(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;

    let overrides = Engine::collect_overrides(std::env::vars());
    tracing::debug!(count = overrides.len(), "override candidates collected");

    let mode = if cli.legacy { Mode::Legacy } else { Mode::Registry };
    let report = Engine::new(mode).apply(&mut document, &overrides);
    tracing::debug!(?report, "overrides processed");

    let rendered = render_document(&document)?;

    if cli.dry_run {
        print!("{rendered}");
    } else {
        fs::write(&cli.config, rendered)
            .with_context(|| format!("writing {}", cli.config.display()))?;
    }

    Ok(())
}
