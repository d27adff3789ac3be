mod common;

use common::{harness, logged_in, NOW};
use eshop_client::address_book::{AddressBook, ADDRESS_SAVED_MESSAGE};
use eshop_client::catalog::{init_catalog, load_catalog};
use eshop_client::{account, product_admin, ClientError, Guard, Level, Route};
use eshop_auth::AuthError;
use eshop_commerce::catalog::{Catalog, ProductInput};
use eshop_commerce::ids::AddressId;
use eshop_data::mock::MockReply;
use eshop_data::Method;
use eshop_forms::{
    AddressField, FormState, LoginField, LoginSchema, ProductField, ProductSchema, SignUpField,
    SignUpSchema, REQUIRED_MESSAGE,
};
use serde_json::json;

#[tokio::test]
async fn catalog_loads_both_lists() {
    let h = logged_in("USER");
    h.mock
        .route(Method::Get, "/api/products/categories", MockReply::json(200, json!(["Toys", "Books"])))
        .route(Method::Get, "/api/products", MockReply::json(200, json!([{"id": "p1", "name": "Lamp"}])));

    let catalog = load_catalog(&h.ctx).await;
    assert_eq!(catalog.categories, vec!["ALL", "Books", "Toys"]);
    assert_eq!(catalog.products.len(), 1);
}

#[tokio::test]
async fn catalog_degrades_on_any_failure() {
    let h = logged_in("USER");
    h.mock
        .route(Method::Get, "/api/products/categories", MockReply::json(200, json!(["Toys"])))
        .route(Method::Get, "/api/products", MockReply::json(500, json!({})));

    let token = h.ctx.token().unwrap();
    let catalog = init_catalog(h.ctx.client(), &token).await;
    assert_eq!(catalog, Catalog::empty());
}

#[tokio::test]
async fn catalog_without_session_is_empty() {
    let h = harness();
    assert_eq!(load_catalog(&h.ctx).await, Catalog::empty());
    assert!(h.mock.requests().is_empty());
}

#[tokio::test]
async fn login_starts_session_and_guards_follow() {
    let h = harness();
    h.mock.push(MockReply::json(200, json!({"token": "jwt", "id": "u1"})));
    assert_eq!(h.ctx.guard(&Route::Home), Guard::Redirect(Route::Login));

    let mut form = FormState::<LoginSchema>::new();
    form.on_change(LoginField::Email, "asha@example.com");
    form.on_change(LoginField::Password, "Secret1!");
    let nav = account::sign_in(&h.ctx, &mut form).await.unwrap();
    assert_eq!(nav.route, Route::Home);
    assert_eq!(form.value(LoginField::Email), "");

    let session = h.ctx.current_session().unwrap();
    assert_eq!(session.access_token_expiry_ms, NOW + 300_000);
    assert_eq!(h.ctx.guard(&Route::Login), Guard::Redirect(Route::Home));
    assert_eq!(h.ctx.guard(&Route::ProductAdd), Guard::Redirect(Route::Home));

    h.clock.advance(300_000);
    assert_eq!(h.ctx.token(), Err(ClientError::Auth(AuthError::SessionExpired)));
    assert_eq!(h.ctx.guard(&Route::Home), Guard::Redirect(Route::Login));

    account::sign_out(&h.ctx);
    assert_eq!(h.ctx.token(), Err(ClientError::Auth(AuthError::NotLoggedIn)));
}

#[tokio::test]
async fn bad_login_posts_error() {
    let h = harness();
    h.mock.push(MockReply::text(401, ""));

    let mut form = FormState::<LoginSchema>::new();
    form.on_change(LoginField::Email, "asha@example.com");
    form.on_change(LoginField::Password, "wrong");
    assert!(account::sign_in(&h.ctx, &mut form).await.is_err());

    let note = h.ctx.notifier().current().unwrap();
    assert_eq!(note.level, Level::Error);
    assert_eq!(note.message, "Bad Credentials. Please try again.");
    assert!(h.ctx.current_session().is_none());
}

#[tokio::test]
async fn invalid_sign_up_sends_nothing() {
    let h = harness();
    let mut form = FormState::<SignUpSchema>::new();
    form.on_change(SignUpField::FirstName, "Asha");

    let err = account::sign_up(&h.ctx, &mut form).await.unwrap_err();
    assert!(matches!(err, ClientError::Form(_)));
    assert_eq!(
        form.field(SignUpField::Email).helper_text(),
        Some(REQUIRED_MESSAGE)
    );
    assert!(h.mock.requests().is_empty());
    assert!(h.ctx.notifier().current().is_none());
}

#[tokio::test]
async fn saving_address_resets_form_and_reloads() {
    let h = logged_in("USER");
    h.mock
        .route(Method::Post, "/api/addresses", MockReply::text(201, ""))
        .route(
            Method::Get,
            "/api/addresses",
            MockReply::json(200, json!([{"id": "a1", "name": "Home", "zipcode": "560001",
                "contactNumber": "9876543210", "street": "MG Road", "city": "Pune", "state": "MH"}])),
        );

    let mut book = AddressBook::new(&h.ctx);
    let form = book.form_mut();
    form.on_change(AddressField::Name, "Home");
    form.on_change(AddressField::ContactNumber, "9876543210");
    form.on_change(AddressField::Street, "MG Road");
    form.on_change(AddressField::City, "Pune");
    form.on_change(AddressField::State, "MH");
    form.on_change(AddressField::Zipcode, "560001");

    book.save().await.unwrap();
    assert_eq!(h.ctx.notifier().current().unwrap().message, ADDRESS_SAVED_MESSAGE);
    assert_eq!(book.form().value(AddressField::Name), "");
    assert_eq!(book.addresses().len(), 1);

    let body = h.mock.requests()[0].body_json().unwrap();
    assert_eq!(body["user"], "u1");

    let picked = book.select(Some(&AddressId::new("a1"))).unwrap();
    assert_eq!(picked.label(), "Home 560001");
    assert!(book.select(Some(&AddressId::new("zz"))).is_none());
    assert!(book.selected().is_none());
}

#[tokio::test]
async fn address_list_failure_and_stale_results() {
    let h = logged_in("USER");
    h.mock.push(MockReply::fail("refused"));

    let mut book = AddressBook::new(&h.ctx);
    assert!(book.reload().await.is_empty());

    h.mock.push(MockReply::json(
        200,
        json!([{"id": "a1", "name": "Home", "zipcode": "560001", "contactNumber": "9876543210",
                "street": "MG Road", "city": "Pune", "state": "MH"}]),
    ));
    let (ticket, fetch) = book.begin_reload();
    let list = fetch.await;
    assert_eq!(list.len(), 1);
    book.reset();
    assert!(!book.finish_reload(&ticket, list));
    assert!(book.addresses().is_empty());
}

#[tokio::test]
async fn product_admin_requires_admin() {
    let h = logged_in("USER");
    let mut form = FormState::<ProductSchema>::new();
    let err = product_admin::save_product(&h.ctx, &mut form, None).await.unwrap_err();
    assert_eq!(err.redirect(), Some(Route::Home));
    assert!(h.mock.requests().is_empty());
}

#[tokio::test]
async fn admin_adds_product() {
    let h = logged_in("ADMIN");
    h.mock.push(MockReply::text(201, "p9"));

    let mut form = FormState::<ProductSchema>::new();
    form.on_change(ProductField::Name, "Desk Lamp");
    form.on_change(ProductField::Category, "Furniture");
    form.on_change(ProductField::Manufacturer, "Lumen");
    form.on_change(ProductField::AvailableItems, "5");
    form.on_change(ProductField::Price, "999");

    let message = product_admin::save_product(&h.ctx, &mut form, None).await.unwrap();
    assert_eq!(message, "Product Desk Lamp added successfully.");
    assert_eq!(h.ctx.notifier().current().unwrap().message, message);

    let sent: ProductInput = serde_json::from_value(h.mock.requests()[0].body_json().unwrap()).unwrap();
    assert_eq!(sent.price, 999.0);
    assert!(sent.id.is_none());
}
