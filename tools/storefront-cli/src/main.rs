//! Storefront CLI - browse a product catalog, fill a cart and pay in cash
//! from the terminal.
//!
//! ```text
//! storefront [--catalog PATH] [--config PATH] [--page-size N] [-v]
//! ```

mod config;
mod context;
mod output;

use std::io;
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Parser;
use storefront::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::context::Context;
use crate::output::Output;

/// Storefront - an interactive text shop
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Config file path
    #[arg(short, long)]
    config: Option<String>,

    /// Catalog file, one `id|name|price|department` record per line
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Number of products listed per browse page
    #[arg(long)]
    page_size: Option<usize>,
}

fn main() {
    let cli = Cli::parse();

    let output = Output::new(cli.verbose);

    if let Err(e) = run(cli, output.clone()) {
        output.error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(cli: Cli, output: Output) -> Result<()> {
    let ctx = Context::load(cli.config.as_deref(), output)?;
    init_logging(&ctx.config.log.level, cli.verbose);

    let settings = ctx.settings(cli.catalog.as_deref(), cli.page_size);
    let catalog = Catalog::load(&settings.catalog_path);
    tracing::debug!(
        catalog = %settings.catalog_path.display(),
        products = catalog.len(),
        "catalog loaded"
    );

    let output = &ctx.output;
    if output.is_verbose() {
        output.header("Storefront");
        output.kv("Catalog", &settings.catalog_path.display().to_string());
        output.kv("Products", &catalog.len().to_string());
        output.kv("Page size", &settings.page_size.to_string());
    }

    let stdin = io::stdin();
    let console = LineConsole::new(stdin.lock(), io::stdout());
    NavigationEngine::new(&catalog, console)
        .with_page_size(settings.page_size)
        .run()
        .context("Console I/O failed")?;

    Ok(())
}

/// Install the stderr log subscriber. `RUST_LOG` wins over the flags and config.
fn init_logging(level: &str, verbose: bool) {
    let fallback = if verbose { "debug" } else { level };
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(fallback)
            .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_LEVEL)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
