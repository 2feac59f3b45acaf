//! Show one product's size runs.

use anyhow::{bail, Result};

use super::ShowArgs;
use crate::context::Context;
use crate::output::availability_badge;
use tread_commerce::prelude::*;

/// Run the show command.
pub async fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let products = super::load_catalog(ctx, args.catalog.as_deref()).await?;

    let Some(product) = products
        .iter()
        .find(|p| p.sku.eq_ignore_ascii_case(&args.sku))
    else {
        bail!("No product with SKU '{}'", args.sku);
    };

    // Flags are validated regardless of the output mode.
    let sizes = args
        .sizes
        .as_deref()
        .unwrap_or(&ctx.config.display.size_system);
    let Some(system) = SizeSystem::from_str(sizes) else {
        bail!(CatalogError::InvalidSizeSystem(sizes.to_string()));
    };

    if ctx.output.is_json() {
        ctx.output.json(product);
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("SKU", &product.sku);
    ctx.output.kv("Brand", product.brand());
    ctx.output.kv("Category", product.effective_category());
    ctx.output.kv("Visible", if product.visible { "yes" } else { "no" });
    ctx.output.kv("Total stock", &product.total_stock().to_string());

    let badges: Vec<String> = Availability::buckets_for(product)
        .into_iter()
        .map(availability_badge)
        .collect();
    ctx.output.kv("Availability", &badges.join(", "));

    if product.sizes.is_empty() {
        ctx.output.info("No size runs on file.");
        return Ok(());
    }

    ctx.output.table_row(
        &[&format!("SIZE ({})", system.as_str().to_uppercase()), "PRICE", "QUANTITY"],
        &[10, 10, 8],
    );
    for run in &product.sizes {
        ctx.output.table_row(
            &[
                &system.label(run.size),
                &run.price.display(),
                &run.quantity.to_string(),
            ],
            &[10, 10, 8],
        );
    }

    Ok(())
}
