//! Storefront client for the E-Shop backend.
//!
//! - [`api`]: one async function per backend operation
//! - [`AppContext`]: backend client, session store and notifier
//! - view controllers: [`checkout`], [`address_book`], [`account`],
//!   [`product_admin`] and [`catalog`] loading
//! - [`routes`]: route table, guards and menu
//!
//! # Example
//!
//! ```rust,ignore
//! use eshop_client::{account, AppContext};
//! use eshop_data::{FetchClient, HttpTransport};
//!
//! let client = FetchClient::new(HttpTransport::new()?).with_base_url("http://localhost:8080");
//! let ctx = AppContext::new(client);
//! account::sign_in(&ctx, &mut login_form).await?;
//! let catalog = eshop_client::catalog::load_catalog(&ctx).await;
//! ```

pub mod account;
pub mod address_book;
pub mod api;
mod app;
pub mod catalog;
pub mod checkout;
mod error;
pub mod notify;
pub mod product_admin;
pub mod routes;
pub mod scope;

pub use app::AppContext;
pub use error::ClientError;
pub use notify::{Level, Notification, Notifier};
pub use routes::{Guard, Navigation, Route};
