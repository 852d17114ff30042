//! CLI subcommands.

pub mod catalog;
pub mod demo;
pub mod show;

use clap::Args;

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Limit the listing to one category (e.g. "hoodie")
    #[arg(long)]
    pub category: Option<String>,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Category key (e.g. "hoodie")
    pub category: String,

    /// Product id (e.g. "ess-hoodie-01")
    pub id: String,

    /// Print the rendered page HTML instead of the summary
    #[arg(long)]
    pub html: bool,
}

/// Arguments for the demo command.
#[derive(Args)]
pub struct DemoArgs {
    /// Category key of the product to exercise
    #[arg(long, default_value = "hoodie")]
    pub category: String,

    /// Product id to exercise
    #[arg(long, default_value = "ess-hoodie-01")]
    pub id: String,

    /// Quantity for the first add
    #[arg(long, default_value_t = 2)]
    pub quantity: i64,
}
