//! Tread CLI - browse the TreadLine wholesale catalog from a terminal.
//!
//! Commands:
//! - `tread browse` - Filtered, sorted catalog listing
//! - `tread brands` - Brand facet with per-brand counts
//! - `tread show` - One product's size runs and availability

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{BrandsArgs, BrowseArgs, ShowArgs};

/// Tread CLI - Browse and query the wholesale footwear catalog
#[derive(Parser)]
#[command(name = "tread")]
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
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalog with filters and sorting
    Browse(BrowseArgs),

    /// List brands with product counts
    Brands(BrandsArgs),

    /// Show one product by SKU
    Show(ShowArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);

    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    let result = match cli.command {
        Commands::Browse(args) => commands::browse::run(args, &ctx).await,
        Commands::Brands(args) => commands::brands::run(args, &ctx).await,
        Commands::Show(args) => commands::show::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
