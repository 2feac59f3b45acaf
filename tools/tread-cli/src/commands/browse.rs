//! Browse the catalog with filters and sorting.

use anyhow::{bail, Result};

use super::BrowseArgs;
use crate::context::Context;
use crate::output::availability_badge;
use tread_commerce::prelude::*;

/// Run the browse command.
pub async fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let products = super::load_catalog(ctx, args.catalog.as_deref()).await?;
    let spec = build_spec(&args, ctx)?;

    let audience = if args.all {
        Audience::Admin
    } else {
        Audience::Storefront
    };
    let view = compute_view(&products, &spec, audience);

    if ctx.output.is_json() {
        ctx.output.json(&view);
        return Ok(());
    }

    ctx.output.header("Catalog");

    for chip in &view.chips {
        ctx.output.list_item(&chip.label);
    }

    if view.items.is_empty() {
        ctx.output.info("No products match the active filters.");
        return Ok(());
    }

    let per_page = args
        .per_page
        .unwrap_or(ctx.config.display.per_page)
        .max(1);
    let (items, pagination) = view.page(args.page, per_page);

    ctx.output.table_row(
        &["SKU", "NAME", "CATEGORY", "SIZES", "MIN PRICE", "STOCK", "AVAILABILITY"],
        &[12, 28, 12, 16, 10, 7, 24],
    );
    ctx.output.info(&"-".repeat(110));

    for product in items {
        let min_price = product
            .min_price()
            .map(|m| m.display())
            .unwrap_or_else(|| "-".to_string());
        let badges: Vec<String> = Availability::buckets_for(product)
            .into_iter()
            .map(availability_badge)
            .collect();
        ctx.output.table_row(
            &[
                &product.sku,
                &product.name,
                product.effective_category(),
                &size_labels(product, spec.size_system),
                &min_price,
                &product.total_stock().to_string(),
                &badges.join(", "),
            ],
            &[12, 28, 12, 16, 10, 7, 24],
        );
    }

    ctx.output.info(&format!(
        "\nShowing {}-{} of {} ({})",
        pagination.start_item(),
        pagination.end_item(),
        pagination.total,
        spec.sort.display_name()
    ));

    Ok(())
}

/// Render a product's size runs in the chosen sizing system.
fn size_labels(product: &Product, system: SizeSystem) -> String {
    if product.sizes.is_empty() {
        return "-".to_string();
    }
    product
        .sizes
        .iter()
        .map(|run| system.label(run.size))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build a filter spec from command-line flags.
fn build_spec(args: &BrowseArgs, ctx: &Context) -> Result<FilterSpec> {
    let mut spec = FilterSpec::new();

    if let Some(search) = &args.search {
        spec.set_search(search.clone());
    }
    spec.set_brands(args.brand.iter().cloned());
    spec.set_categories(args.category.iter().cloned());

    let mut buckets = Vec::new();
    for raw in &args.availability {
        match Availability::from_str(raw) {
            Some(bucket) => buckets.push(bucket),
            None => bail!(CatalogError::InvalidAvailability(raw.clone())),
        }
    }
    spec.set_availability(buckets);

    spec.set_sort(args.sort.parse()?);

    let sizes = args
        .sizes
        .as_deref()
        .unwrap_or(&ctx.config.display.size_system);
    match SizeSystem::from_str(sizes) {
        Some(system) => spec.set_size_system(system),
        None => bail!(CatalogError::InvalidSizeSystem(sizes.to_string())),
    }

    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tread_commerce::money::Money;

    #[test]
    fn test_size_labels_respect_size_system() {
        let p = Product::new("NIK-001", "Nike Air Max")
            .with_size(42.0, Money::eur(5000), 10)
            .with_size(42.5, Money::eur(5000), 5);

        // The --sizes flag must change what the table shows.
        assert_eq!(size_labels(&p, SizeSystem::Eu), "42, 42.5");
        assert_eq!(size_labels(&p, SizeSystem::Us), "9, 9.5");
        assert_ne!(
            size_labels(&p, SizeSystem::Eu),
            size_labels(&p, SizeSystem::Us)
        );
    }

    #[test]
    fn test_size_labels_empty_runs() {
        let p = Product::new("NIK-001", "Nike Air Max");
        assert_eq!(size_labels(&p, SizeSystem::Eu), "-");
    }
}
