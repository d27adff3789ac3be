//! Checkout for one product.

use anyhow::{bail, Result};
use dialoguer::{Confirm, Select};
use eshop_client::address_book::AddressBook;
use eshop_client::api::fetch_all_products;
use eshop_client::checkout::{CheckoutController, INVALID_ACCESS_MESSAGE};
use eshop_client::Route;
use eshop_commerce::checkout::{OrderDraft, StepChange};
use eshop_commerce::ids::AddressId;

use super::address;
use super::{ensure_allowed, settle, AddressArgs, OrderArgs};
use crate::context::Context;

/// Run the order command.
pub async fn run(args: OrderArgs, ctx: &Context) -> Result<()> {
    ensure_allowed(ctx, Route::ProductOrder)?;
    let token = settle(ctx, ctx.app.token())?;

    let spinner = ctx.output.spinner("Loading product...");
    let products = fetch_all_products(ctx.app.client(), &token).await;
    spinner.finish_and_clear();
    let products = settle(ctx, products.map_err(Into::into))?.payload;

    let Some(product) = products.into_iter().find(|p| p.id.as_str() == args.product) else {
        bail!("Product '{}' not found", args.product);
    };
    if i64::from(args.quantity) > product.available_items {
        bail!(
            "Only {} unit(s) of {} available",
            product.available_items,
            product.name
        );
    }

    // The product page hands checkout its selection as navigation state.
    let state = serde_json::json!({ "product": product, "quantity": args.quantity }).to_string();
    let mut checkout = match CheckoutController::enter(&ctx.app, Some(&state)) {
        Ok(checkout) => checkout,
        Err(next) => {
            let reason = ctx
                .app
                .notifier()
                .take()
                .map(|note| note.message)
                .unwrap_or_else(|| INVALID_ACCESS_MESSAGE.to_string());
            ctx.output.debug(&format!("Next: {}", next.route));
            bail!(reason);
        }
    };

    ctx.output.header(&format!("Order {}", checkout.wizard().product().name));
    step_line(ctx, &checkout);

    let mut book = AddressBook::new(&ctx.app);
    let spinner = ctx.output.spinner("Loading addresses...");
    book.reload().await;
    spinner.finish_and_clear();

    let address_id = match args.address {
        Some(id) => AddressId::new(id),
        None => pick_address(ctx, &mut book).await?,
    };
    let selected = book.select(Some(&address_id));
    if selected.is_none() {
        bail!("Address '{}' not found", address_id);
    }
    checkout.select_address(selected);

    if let StepChange::Moved { to, .. } = checkout.next() {
        ctx.output.debug(&format!("Step: {}", to.label()));
    }
    step_line(ctx, &checkout);
    summary(ctx, &checkout);

    if !args.yes && !ctx.output.is_json() {
        let confirmed = Confirm::new()
            .with_prompt("Place this order?")
            .default(true)
            .interact()?;
        if !confirmed {
            checkout.back();
            if let Some(nav) = checkout.back() {
                ctx.output.debug(&format!("Next: {}", nav.route));
            }
            ctx.output.info("Order cancelled");
            return Ok(());
        }
    }

    let spinner = ctx.output.spinner("Placing order...");
    let placed = checkout.place_order().await;
    spinner.finish_and_clear();
    let next = settle(ctx, placed)?;
    ctx.output.debug(&format!("Next: {}", next.route));

    if ctx.output.is_json() {
        ctx.output.json(&placed_json(checkout.wizard().draft()));
    }
    Ok(())
}

/// Choose a saved address, or add one when there are none or the user
/// asks to.
async fn pick_address(ctx: &Context, book: &mut AddressBook) -> Result<AddressId> {
    const ADD_NEW: &str = "Add a new address";

    loop {
        let mut items: Vec<String> = book.addresses().iter().map(|a| a.label()).collect();
        items.push(ADD_NEW.to_string());

        let selection = if book.addresses().is_empty() {
            ctx.output.info("No saved addresses yet");
            items.len() - 1
        } else {
            Select::new()
                .with_prompt("Select address")
                .items(&items)
                .default(0)
                .interact()?
        };

        if let Some(address) = book.addresses().get(selection) {
            return Ok(address.id.clone());
        }

        let before: Vec<AddressId> = book.addresses().iter().map(|a| a.id.clone()).collect();
        address::save(ctx, book, &AddressArgs::default()).await?;
        if let Some(added) = book.addresses().iter().find(|a| !before.contains(&a.id)) {
            return Ok(added.id.clone());
        }
    }
}

fn step_line(ctx: &Context, checkout: &CheckoutController) {
    let active = checkout.wizard().active_step();
    let line: Vec<String> = checkout
        .wizard()
        .steps()
        .iter()
        .enumerate()
        .map(|(index, state)| {
            let mark = if state.completed { "✓" } else if index == active { "●" } else { "○" };
            format!("{} {}", mark, state.step.label())
        })
        .collect();
    ctx.output.info(&line.join("  ›  "));
}

fn summary(ctx: &Context, checkout: &CheckoutController) {
    let wizard = checkout.wizard();
    let product = wizard.product();
    let quantity = wizard.draft().quantity;

    ctx.output.header("Order summary");
    ctx.output.kv("product", &product.name);
    ctx.output.kv("quantity", &quantity.to_string());
    ctx.output.kv("category", &product.category);
    ctx.output.kv(
        "total",
        &format!("₹ {:.2}", product.price * f64::from(quantity)),
    );
    let ship_to = ship_to_lines(wizard.draft());
    if !ship_to.is_empty() {
        ctx.output.kv("ship to", "");
        for line in &ship_to {
            ctx.output.list_item(line);
        }
    }
}

fn placed_json(draft: &OrderDraft) -> serde_json::Value {
    serde_json::json!({
        "product": draft.product,
        "quantity": draft.quantity,
        "address": draft.address,
    })
}

fn ship_to_lines(draft: &OrderDraft) -> Vec<String> {
    draft
        .address_object
        .as_ref()
        .map(|address| address.multi_line().lines().map(str::to_string).collect())
        .unwrap_or_default()
}
