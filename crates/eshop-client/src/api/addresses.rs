use eshop_commerce::checkout::{AddressRecord, NewAddress};
use eshop_data::{ApiResult, FetchClient};

use super::paths;

pub async fn fetch_all_addresses(
    client: &FetchClient,
    token: &str,
) -> ApiResult<Vec<AddressRecord>> {
    client
        .get(paths::ADDRESSES)
        .bearer_auth(token)
        .fetch_json()
        .await
}

/// Settles with `"Address <name> added successfully."`.
pub async fn create_address(
    client: &FetchClient,
    address: &NewAddress,
    token: &str,
) -> ApiResult<String> {
    let created = client
        .post(paths::ADDRESSES)
        .bearer_auth(token)
        .json(address)
        .fetch_text()
        .await?;
    Ok(created.map(|_| format!("Address {} added successfully.", address.name)))
}
