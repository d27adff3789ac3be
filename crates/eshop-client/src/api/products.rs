use eshop_commerce::catalog::{with_all_category, Product, ProductInput};
use eshop_commerce::ids::ProductId;
use eshop_data::{ApiResult, FetchClient};

use super::paths;

/// Category names, sorted, with `"ALL"` first.
pub async fn fetch_all_categories(client: &FetchClient, token: &str) -> ApiResult<Vec<String>> {
    let categories = client
        .get(paths::CATEGORIES)
        .bearer_auth(token)
        .fetch_json::<Vec<String>>()
        .await?;
    Ok(categories.map(with_all_category))
}

pub async fn fetch_all_products(client: &FetchClient, token: &str) -> ApiResult<Vec<Product>> {
    client
        .get(paths::PRODUCTS)
        .bearer_auth(token)
        .fetch_json()
        .await
}

/// Settles with `"Product <name> added successfully."`.
pub async fn create_product(
    client: &FetchClient,
    product: &ProductInput,
    token: &str,
) -> ApiResult<String> {
    let created = client
        .post(paths::PRODUCTS)
        .bearer_auth(token)
        .json(product)
        .fetch_text()
        .await?;
    Ok(created.map(|_| format!("Product {} added successfully.", product.name)))
}

/// Settles with `"Product <name> modified successfully."`.
pub async fn modify_product(
    client: &FetchClient,
    id: &ProductId,
    product: &ProductInput,
    token: &str,
) -> ApiResult<String> {
    let modified = client
        .put(paths::product(id.as_str()))
        .bearer_auth(token)
        .json(product)
        .fetch_text()
        .await?;
    Ok(modified.map(|_| format!("Product {} modified successfully.", product.name)))
}

/// Settles with the raw response text.
pub async fn delete_product(client: &FetchClient, id: &ProductId, token: &str) -> ApiResult<String> {
    client
        .delete(paths::product(id.as_str()))
        .bearer_auth(token)
        .fetch_text()
        .await
}
