#![allow(dead_code)]

use std::sync::Arc;

use eshop_auth::{roles, ManualClock, Session};
use eshop_client::AppContext;
use eshop_commerce::ids::UserId;
use eshop_data::mock::MockTransport;
use eshop_data::FetchClient;

pub const NOW: i64 = 1_700_000_000_000;

pub struct Harness {
    pub ctx: AppContext,
    pub mock: Arc<MockTransport>,
    pub clock: Arc<ManualClock>,
}

pub fn harness() -> Harness {
    let mock = Arc::new(MockTransport::new());
    let clock = Arc::new(ManualClock::new(NOW));
    let client = FetchClient::from_shared(mock.clone()).with_base_url("http://shop.test");
    let ctx = AppContext::with_clock(client, clock.clone());
    Harness { ctx, mock, clock }
}

pub fn logged_in(role: &str) -> Harness {
    let h = harness();
    h.ctx.session().begin(Session::new(
        "asha@example.com",
        "jwt",
        roles([role]),
        Some(UserId::new("u1")),
        NOW,
    ));
    h
}
