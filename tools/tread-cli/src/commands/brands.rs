//! Print the brand facet with per-brand counts.

use anyhow::Result;

use super::BrandsArgs;
use crate::context::Context;
use tread_commerce::prelude::*;

/// Run the brands command.
pub async fn run(args: BrandsArgs, ctx: &Context) -> Result<()> {
    let products = super::load_catalog(ctx, args.catalog.as_deref()).await?;

    let visible: Vec<&Product> = products
        .iter()
        .filter(|p| args.all || p.visible)
        .collect();
    let facet = brand_facet(visible.iter().copied(), None);

    if ctx.output.is_json() {
        ctx.output.json(&facet);
        return Ok(());
    }

    ctx.output.header("Brands");

    if facet.values.is_empty() {
        ctx.output.info("The catalog is empty.");
        return Ok(());
    }

    for value in &facet.values {
        ctx.output.kv(&value.label, &format!("{} products", value.count));
    }

    Ok(())
}
