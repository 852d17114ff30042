//! Essancia CLI - Developer preview tool for the storefront core.
//!
//! Commands:
//! - `essancia catalog` - List the seeded catalog
//! - `essancia show` - Resolve and render a product page
//! - `essancia demo` - Run a scripted cart session

mod commands;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CatalogArgs, DemoArgs, ShowArgs};

/// Essancia CLI - Preview and exercise the storefront core
#[derive(Parser)]
#[command(name = "essancia")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Store profile TOML path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List categories and products in the seeded catalog
    Catalog(CatalogArgs),

    /// Resolve a product and render its detail page
    Show(ShowArgs),

    /// Run a scripted cart session against a product
    Demo(DemoArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let output = output::Output::new(cli.verbose, cli.json);
    let ctx = context::Context::load(cli.config.as_deref(), output)?;

    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx),
        Commands::Show(args) => commands::show::run(args, &ctx),
        Commands::Demo(args) => commands::demo::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
