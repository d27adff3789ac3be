//! E-Shop CLI - Command line storefront for the E-Shop backend.
//!
//! Commands:
//! - `eshop login` / `eshop logout` / `eshop signup` - Manage the account session
//! - `eshop categories` - List product categories
//! - `eshop products` - Browse products with filter, sort and search
//! - `eshop addresses` / `eshop add-address` - Manage delivery addresses
//! - `eshop order` - Check out a product
//! - `eshop product` - Add, modify or delete products (admin)
//! - `eshop config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{
    AddressArgs, ConfigArgs, LoginArgs, OrderArgs, ProductArgs, ProductsArgs, SignUpArgs,
};

/// E-Shop CLI - Browse, order and manage products
#[derive(Parser)]
#[command(name = "eshop")]
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
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Backend URL, overriding the config file and ESHOP_API_URL
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and save the session
    Login(LoginArgs),

    /// End the saved session
    Logout,

    /// Create an account
    Signup(SignUpArgs),

    /// List product categories
    Categories,

    /// List products
    Products(ProductsArgs),

    /// List saved delivery addresses
    Addresses,

    /// Save a new delivery address
    AddAddress(AddressArgs),

    /// Order a product
    Order(OrderArgs),

    /// Manage products (admin)
    Product(ProductArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "eshop=debug,eshop_client=debug,eshop_data=debug,eshop_auth=debug"
    } else {
        "warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config and any saved session
    let ctx = match context::Context::load(cli.config.as_deref(), cli.api_url.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };
    ctx.output.debug(&format!("Backend: {}", ctx.api_url));

    // Execute command
    let result = match cli.command {
        Commands::Login(args) => commands::auth::login(args, &ctx).await,
        Commands::Logout => commands::auth::logout(&ctx).await,
        Commands::Signup(args) => commands::auth::signup(args, &ctx).await,
        Commands::Categories => commands::catalog::categories(&ctx).await,
        Commands::Products(args) => commands::catalog::products(args, &ctx).await,
        Commands::Addresses => commands::address::list(&ctx).await,
        Commands::AddAddress(args) => commands::address::add(args, &ctx).await,
        Commands::Order(args) => commands::order::run(args, &ctx).await,
        Commands::Product(args) => commands::product::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
