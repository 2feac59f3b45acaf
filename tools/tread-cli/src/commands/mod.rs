//! CLI command implementations.

pub mod brands;
pub mod browse;
pub mod show;

use anyhow::{Context as _, Result};
use clap::Args;
use tread_commerce::catalog::Product;
use tread_store::{CatalogStore, JsonFileSource, LoadOutcome};

use crate::context::Context;

/// Load the catalog through the store, surfacing load failures.
pub(crate) async fn load_catalog(ctx: &Context, flag: Option<&str>) -> Result<Vec<Product>> {
    let path = ctx.catalog_path(flag)?;
    ctx.output.debug(&format!("loading catalog from {}", path));

    let source = JsonFileSource::new(&path);
    let mut store = CatalogStore::new();
    match store.load_from(&source).await {
        LoadOutcome::Applied => {
            if store.products().is_empty() {
                ctx.output.warn("The catalog is empty.");
            }
            Ok(store.products().to_vec())
        }
        _ => Err(anyhow::anyhow!(
            "{}",
            store.last_error().unwrap_or("catalog load failed")
        ))
        .with_context(|| format!("Failed to load catalog from {}", path)),
    }
}

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Path to the catalog JSON file (overrides config).
    #[arg(long)]
    pub catalog: Option<String>,

    /// Free-text search over name and SKU.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Filter by brand (repeatable).
    #[arg(short, long)]
    pub brand: Vec<String>,

    /// Filter by category (repeatable).
    #[arg(short = 'c', long)]
    pub category: Vec<String>,

    /// Filter by availability bucket (repeatable):
    /// in-stock, low-stock, pre-order, made-to-order.
    #[arg(short, long)]
    pub availability: Vec<String>,

    /// Sort key: name-asc, name-desc, price-asc, price-desc,
    /// stock-asc, stock-desc.
    #[arg(long, default_value = "name-asc")]
    pub sort: String,

    /// Sizing system for display: eu or us.
    #[arg(long)]
    pub sizes: Option<String>,

    /// Include hidden products (admin view).
    #[arg(long)]
    pub all: bool,

    /// Page to display (1-indexed).
    #[arg(long, default_value_t = 1)]
    pub page: i64,

    /// Items per page (overrides config).
    #[arg(long)]
    pub per_page: Option<i64>,
}

/// Arguments for the brands command.
#[derive(Args)]
pub struct BrandsArgs {
    /// Path to the catalog JSON file (overrides config).
    #[arg(long)]
    pub catalog: Option<String>,

    /// Include hidden products (admin view).
    #[arg(long)]
    pub all: bool,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// SKU of the product to show.
    pub sku: String,

    /// Path to the catalog JSON file (overrides config).
    #[arg(long)]
    pub catalog: Option<String>,

    /// Sizing system for display: eu or us.
    #[arg(long)]
    pub sizes: Option<String>,
}
