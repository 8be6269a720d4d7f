//! Sukaj CLI - Query the product catalog and check preview decisions.
//!
//! Commands:
//! - `sukaj catalog` - Filter, sort and facet the product catalog
//! - `sukaj partners` - Browse partners by type
//! - `sukaj preview` - Resolve the 3D preview mode for a device profile
//! - `sukaj validate` - Check fixture integrity
//! - `sukaj config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::{CatalogArgs, ConfigArgs, PartnersArgs, PreviewArgs};

/// Environment variable holding a tracing filter directive.
const LOG_ENV: &str = "SUKAJ_LOG";

/// Sukaj CLI - Pipe catalog and preview tooling
#[derive(Parser)]
#[command(name = "sukaj")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Catalog fixture to load instead of the configured or bundled one
    #[arg(long, global = true)]
    fixture: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter and sort products
    Catalog(CatalogArgs),

    /// List partners by type
    Partners(PartnersArgs),

    /// Resolve the preview mode for a device profile
    Preview(PreviewArgs),

    /// Check the catalog fixture for integrity errors
    Validate,

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let ctx = context::Context::load(cli.config.as_deref(), cli.fixture.as_deref(), output)?;
    tracing::debug!(session = %ctx.session_id, "context loaded");

    // Execute command
    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx),
        Commands::Partners(args) => commands::partners::run(args, &ctx),
        Commands::Preview(args) => commands::preview::run(args, &ctx),
        Commands::Validate => commands::validate::run(&ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
