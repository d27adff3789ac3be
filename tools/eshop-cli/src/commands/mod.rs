//! CLI command implementations.

pub mod address;
pub mod auth;
pub mod catalog;
pub mod config;
pub mod order;
pub mod product;

use anyhow::{anyhow, bail, Result};
use clap::{Args, Subcommand};
use dialoguer::{Input, Password};
use eshop_client::{ClientError, Guard, Level, Route};
use eshop_commerce::catalog::SortBy;
use eshop_forms::{FormSchema, FormState};

use crate::context::Context;

/// Arguments for the login command.
#[derive(Args)]
pub struct LoginArgs {
    /// Email address to log in with.
    #[arg(short, long)]
    pub email: Option<String>,
}

/// Arguments for the signup command. The password is always prompted for.
#[derive(Args)]
pub struct SignUpArgs {
    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(short, long)]
    pub email: Option<String>,

    #[arg(long)]
    pub contact_number: Option<String>,
}

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Show only this category ("ALL" shows everything).
    #[arg(long)]
    pub category: Option<String>,

    /// Sort order: default, price-desc, price-asc or newest.
    #[arg(short, long)]
    pub sort: Option<SortBy>,

    /// Match against name, manufacturer and description.
    #[arg(long)]
    pub search: Option<String>,
}

/// Address fields; missing ones are prompted for.
#[derive(Args, Default)]
pub struct AddressArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub contact_number: Option<String>,

    #[arg(long)]
    pub street: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    #[arg(long)]
    pub state: Option<String>,

    #[arg(long)]
    pub landmark: Option<String>,

    #[arg(long)]
    pub zipcode: Option<String>,
}

/// Arguments for the order command.
#[derive(Args)]
pub struct OrderArgs {
    /// Product ID.
    pub product: String,

    /// Number of units.
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub quantity: u32,

    /// Delivery address ID (prompted for when omitted).
    #[arg(short, long)]
    pub address: Option<String>,

    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    #[command(subcommand)]
    pub command: ProductCommand,
}

#[derive(Subcommand)]
pub enum ProductCommand {
    /// Add a product.
    Add(ProductFieldArgs),
    /// Modify a product; omitted fields keep their current value.
    Modify {
        /// Product ID.
        id: String,
        #[command(flatten)]
        fields: ProductFieldArgs,
    },
    /// Delete a product.
    Delete {
        /// Product ID.
        id: String,
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Product fields.
#[derive(Args)]
pub struct ProductFieldArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub manufacturer: Option<String>,

    #[arg(long)]
    pub available_items: Option<String>,

    #[arg(long)]
    pub price: Option<String>,

    #[arg(long)]
    pub image_url: Option<String>,

    #[arg(long)]
    pub description: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Set a config value.
    Set {
        /// Config key (dot-separated).
        key: String,
        /// Value to set.
        value: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}

/// Fill `form` one field at a time. Preset values are taken as given;
/// prompted values are asked for again until they pass their rule.
pub(crate) fn fill_form<S: FormSchema>(
    ctx: &Context,
    form: &mut FormState<S>,
    preset: impl Fn(S::Field) -> Option<String>,
    secret: impl Fn(S::Field) -> bool,
) -> Result<()> {
    for &field in S::FIELDS {
        if let Some(value) = preset(field) {
            form.on_change(field, value);
            form.on_blur(field);
            continue;
        }
        loop {
            let value = prompt(S::label(field), S::rule(field).is_required(), secret(field))?;
            form.on_change(field, value);
            if form.on_blur(field) {
                break;
            }
            if let Some(message) = form.field(field).helper_text() {
                ctx.output.warn(message);
            }
        }
    }
    Ok(())
}

fn prompt(label: &str, required: bool, secret: bool) -> Result<String> {
    let label = if required {
        format!("{} *", label)
    } else {
        label.to_string()
    };
    let value = if secret {
        Password::new()
            .with_prompt(label)
            .allow_empty_password(true)
            .interact()?
    } else {
        Input::<String>::new()
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()?
    };
    Ok(value)
}

/// Print the message of every flagged field.
pub(crate) fn report_form<S: FormSchema>(ctx: &Context, form: &FormState<S>) {
    for (field, state) in form.fields() {
        if let Some(message) = state.helper_text() {
            ctx.output.warn(&format!("{}: {}", S::label(field), message));
        }
    }
}

/// Show the notification a controller posted and turn its error into a
/// command failure.
pub(crate) fn settle<T>(ctx: &Context, result: Result<T, ClientError>) -> Result<T> {
    let note = ctx.app.notifier().take();
    match result {
        Ok(value) => {
            if let Some(note) = note {
                ctx.output.notification(&note);
            }
            Ok(value)
        }
        Err(e) => {
            if e.redirect() == Some(Route::Login) {
                ctx.forget_session()?;
            }
            match note {
                Some(note) if note.level != Level::Success => Err(anyhow!(note.message)),
                _ => Err(describe(e)),
            }
        }
    }
}

fn describe(e: ClientError) -> anyhow::Error {
    match e.redirect() {
        Some(Route::Login) => anyhow!("{}. Run `eshop login` first.", e),
        Some(_) => anyhow!("{}. This command needs an administrator account.", e),
        None => anyhow!(e),
    }
}

/// Fail unless the session may open `route`.
pub(crate) fn ensure_allowed(ctx: &Context, route: Route) -> Result<()> {
    match ctx.app.guard(&route) {
        Guard::Allow => Ok(()),
        Guard::Redirect(Route::Login) => {
            ctx.forget_session()?;
            bail!("Not logged in. Run `eshop login` first.")
        }
        Guard::Redirect(_) => bail!("{} is not available to this account.", route),
    }
}
