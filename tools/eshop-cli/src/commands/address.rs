//! Delivery addresses.

use anyhow::Result;
use eshop_client::address_book::AddressBook;
use eshop_client::Route;
use eshop_forms::AddressField;

use super::{ensure_allowed, fill_form, report_form, settle, AddressArgs};
use crate::context::Context;

/// Run the addresses command.
pub async fn list(ctx: &Context) -> Result<()> {
    ensure_allowed(ctx, Route::ProductOrder)?;

    let mut book = AddressBook::new(&ctx.app);
    let spinner = ctx.output.spinner("Loading addresses...");
    book.reload().await;
    spinner.finish_and_clear();

    if ctx.output.is_json() {
        ctx.output.json(&book.addresses());
        return Ok(());
    }

    ctx.output.header("Addresses");
    if book.addresses().is_empty() {
        ctx.output.info("No saved addresses. Add one with `eshop add-address`.");
        return Ok(());
    }
    for address in book.addresses() {
        println!();
        ctx.output.kv("id", address.id.as_str());
        for line in address.multi_line().lines() {
            ctx.output.list_item(line);
        }
    }
    Ok(())
}

/// Run the add-address command.
pub async fn add(args: AddressArgs, ctx: &Context) -> Result<()> {
    ensure_allowed(ctx, Route::ProductOrder)?;
    ctx.output.header("Add address");

    let mut book = AddressBook::new(&ctx.app);
    save(ctx, &mut book, &args).await?;

    if ctx.output.is_json() {
        ctx.output.json(&book.addresses());
    }
    Ok(())
}

/// Fill the address form from `args` and prompts, save it and reload the
/// list into `book`.
pub(crate) async fn save(ctx: &Context, book: &mut AddressBook, args: &AddressArgs) -> Result<()> {
    fill_form(
        ctx,
        book.form_mut(),
        |field| match field {
            AddressField::Name => args.name.clone(),
            AddressField::ContactNumber => args.contact_number.clone(),
            AddressField::Street => args.street.clone(),
            AddressField::City => args.city.clone(),
            AddressField::State => args.state.clone(),
            AddressField::Landmark => args.landmark.clone(),
            AddressField::Zipcode => args.zipcode.clone(),
        },
        |_| false,
    )?;

    let spinner = ctx.output.spinner("Saving address...");
    let result = book.save().await;
    spinner.finish_and_clear();
    report_form(ctx, book.form());
    settle(ctx, result)?;
    Ok(())
}
