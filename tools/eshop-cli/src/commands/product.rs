//! Product administration.

use anyhow::{bail, Result};
use dialoguer::Confirm;
use eshop_client::api::fetch_all_products;
use eshop_client::product_admin::{remove_product, save_product};
use eshop_client::Route;
use eshop_commerce::catalog::Product;
use eshop_forms::{FormSchema, FormState, ProductField, ProductSchema};

use super::{
    ensure_allowed, fill_form, report_form, settle, ProductArgs, ProductCommand, ProductFieldArgs,
};
use crate::context::Context;

/// Run the product command.
pub async fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ProductCommand::Add(fields) => add(fields, ctx).await,
        ProductCommand::Modify { id, fields } => modify(&id, fields, ctx).await,
        ProductCommand::Delete { id, yes } => delete(&id, yes, ctx).await,
    }
}

fn preset(fields: &ProductFieldArgs, field: ProductField) -> Option<String> {
    match field {
        ProductField::Name => fields.name.clone(),
        ProductField::Category => fields.category.clone(),
        ProductField::Manufacturer => fields.manufacturer.clone(),
        ProductField::AvailableItems => fields.available_items.clone(),
        ProductField::Price => fields.price.clone(),
        ProductField::ImageUrl => fields.image_url.clone(),
        ProductField::Description => fields.description.clone(),
    }
}

async fn find_product(ctx: &Context, id: &str) -> Result<Product> {
    let token = settle(ctx, ctx.app.token())?;
    let spinner = ctx.output.spinner("Loading product...");
    let products = fetch_all_products(ctx.app.client(), &token).await;
    spinner.finish_and_clear();

    match settle(ctx, products.map_err(Into::into))?
        .payload
        .into_iter()
        .find(|p| p.id.as_str() == id)
    {
        Some(product) => Ok(product),
        None => bail!("Product '{}' not found", id),
    }
}

async fn submit(
    ctx: &Context,
    form: &mut FormState<ProductSchema>,
    existing: Option<&Product>,
) -> Result<()> {
    let spinner = ctx.output.spinner("Saving product...");
    let result = save_product(&ctx.app, form, existing.map(|p| &p.id)).await;
    spinner.finish_and_clear();
    report_form(ctx, form);
    let message = settle(ctx, result)?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "message": message }));
    }
    Ok(())
}

async fn add(fields: ProductFieldArgs, ctx: &Context) -> Result<()> {
    ensure_allowed(ctx, Route::ProductAdd)?;
    ctx.output.header("Add product");

    let mut form = FormState::<ProductSchema>::new();
    fill_form(ctx, &mut form, |field| preset(&fields, field), |_| false)?;
    submit(ctx, &mut form, None).await
}

async fn modify(id: &str, fields: ProductFieldArgs, ctx: &Context) -> Result<()> {
    ensure_allowed(ctx, Route::ProductModify)?;
    let product = find_product(ctx, id).await?;
    ctx.output.header(&format!("Modify {}", product.name));

    let mut form = FormState::<ProductSchema>::from_product(&product);
    for &field in ProductSchema::FIELDS {
        if let Some(value) = preset(&fields, field) {
            form.on_change(field, value);
        }
    }
    submit(ctx, &mut form, Some(&product)).await
}

async fn delete(id: &str, yes: bool, ctx: &Context) -> Result<()> {
    ensure_allowed(ctx, Route::ProductModify)?;
    let product = find_product(ctx, id).await?;

    if !yes && !ctx.output.is_json() {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Are you sure you want to delete the product {}?",
                product.name
            ))
            .default(false)
            .interact()?;
        if !confirmed {
            ctx.output.info("Delete cancelled");
            return Ok(());
        }
    }

    let spinner = ctx.output.spinner("Deleting product...");
    let result = remove_product(&ctx.app, &product).await;
    spinner.finish_and_clear();
    let message = settle(ctx, result)?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "message": message }));
    }
    Ok(())
}
