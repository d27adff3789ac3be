//! Catalog loading.

use eshop_commerce::catalog::Catalog;
use eshop_data::FetchClient;

use crate::api::{fetch_all_categories, fetch_all_products};
use crate::AppContext;

/// Fetch categories and products concurrently.
///
/// Any failure degrades to `["ALL"]` and no products.
pub async fn init_catalog(client: &FetchClient, token: &str) -> Catalog {
    let loaded = futures::future::try_join(
        fetch_all_categories(client, token),
        fetch_all_products(client, token),
    )
    .await;

    match loaded {
        Ok((categories, products)) => {
            tracing::debug!(
                categories = categories.payload.len(),
                products = products.payload.len(),
                "catalog loaded"
            );
            Catalog::loaded(categories.payload, products.payload)
        }
        Err(failure) => {
            tracing::warn!(reason = %failure.reason, "catalog unavailable, showing empty catalog");
            Catalog::empty()
        }
    }
}

/// Load the catalog for the current session; empty without one.
pub async fn load_catalog(ctx: &AppContext) -> Catalog {
    match ctx.token() {
        Ok(token) => init_catalog(ctx.client(), &token).await,
        Err(e) => {
            tracing::debug!(error = %e, "no session, showing empty catalog");
            Catalog::empty()
        }
    }
}
