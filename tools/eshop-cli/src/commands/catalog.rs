//! Catalog browsing.

use anyhow::Result;
use eshop_client::catalog::load_catalog;
use eshop_client::Route;
use eshop_commerce::catalog::Catalog;

use super::{ensure_allowed, ProductsArgs};
use crate::context::Context;
use crate::output::{stock_badge, truncate};

async fn fetch(ctx: &Context) -> Result<Catalog> {
    ensure_allowed(ctx, Route::Home)?;
    let spinner = ctx.output.spinner("Loading catalog...");
    let catalog = load_catalog(&ctx.app).await;
    spinner.finish_and_clear();
    Ok(catalog)
}

/// Run the categories command.
pub async fn categories(ctx: &Context) -> Result<()> {
    let catalog = fetch(ctx).await?;

    if ctx.output.is_json() {
        ctx.output.json(&catalog.categories);
        return Ok(());
    }

    ctx.output.header("Categories");
    for category in &catalog.categories {
        ctx.output.list_item(category);
    }
    Ok(())
}

/// Run the products command.
pub async fn products(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let mut catalog = fetch(ctx).await?;

    if let Some(category) = args.category {
        if !catalog.categories.contains(&category) {
            ctx.output.warn(&format!("Unknown category: {}", category));
        }
        catalog.set_filter(category);
    }
    if let Some(sort) = args.sort {
        catalog.set_sort_by(sort);
    }
    if let Some(search) = args.search {
        catalog.set_search(search);
    }

    let visible = catalog.visible_products();

    if ctx.output.is_json() {
        ctx.output.json(&visible);
        return Ok(());
    }

    ctx.output.header(&format!(
        "Products in {} ({})",
        catalog.selected_category(),
        catalog.sort_by.display_name()
    ));

    if visible.is_empty() {
        ctx.output.info("No products found");
        return Ok(());
    }

    let widths = [26, 28, 16, 14, 0];
    ctx.output
        .table_row(&["ID", "NAME", "CATEGORY", "PRICE", "STOCK"], &widths);
    for product in visible {
        let name = truncate(&product.name, 28);
        let price = product.price_display();
        let stock = stock_badge(product);
        ctx.output.table_row(
            &[
                product.id.as_str(),
                &name,
                &product.category,
                &price,
                &stock,
            ],
            &widths,
        );
    }
    Ok(())
}
