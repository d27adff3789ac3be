use eshop_commerce::checkout::OrderDraft;
use eshop_data::{ApiResult, FetchClient};

use super::paths;

/// Place an order. Settles with the raw response text.
pub async fn create_order(client: &FetchClient, order: &OrderDraft, token: &str) -> ApiResult<String> {
    client
        .post(paths::ORDERS)
        .bearer_auth(token)
        .json(order)
        .fetch_text()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use eshop_commerce::checkout::AddressRecord;
    use eshop_commerce::ids::{AddressId, ProductId, UserId};
    use eshop_data::mock::{MockReply, MockTransport};
    use eshop_data::TRANSPORT_FAILURE_REASON;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_order_body_omits_address_object() {
        let mock = Arc::new(MockTransport::new());
        mock.push(MockReply::text(201, "o1")).push(MockReply::fail("reset"));
        let client = FetchClient::from_shared(mock.clone());

        let mut order = OrderDraft::new(ProductId::new("p1"), 2, Some(UserId::new("u1")));
        order.set_address(Some(AddressRecord {
            id: AddressId::new("a1"),
            ..Default::default()
        }));

        assert_eq!(create_order(&client, &order, "t").await.unwrap().payload, "o1");
        assert_eq!(
            mock.requests()[0].body_json().unwrap(),
            json!({"quantity": 2, "user": "u1", "product": "p1", "address": "a1"})
        );

        let err = create_order(&client, &order, "t").await.unwrap_err();
        assert_eq!(err.reason, TRANSPORT_FAILURE_REASON);
    }
}
